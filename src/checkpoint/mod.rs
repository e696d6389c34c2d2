//! Persisted navigation state.
//!
//! A navigator's back-stack can be saved as an ordered sequence of
//! destination ids and restored later, for example across process
//! recreation. Handles, transitions and in-flight animations are not part of
//! the saved state; a restored navigator recreates handles from its graph.

use crate::core::DestinationId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for the navigation state format
pub const STATE_VERSION: u32 = 1;

/// Serializable snapshot of a navigator's back-stack.
///
/// # Example
///
/// ```rust
/// use viewnav::checkpoint::NavigationState;
/// use viewnav::core::DestinationId;
///
/// let state = NavigationState::new(vec![
///     DestinationId::from("details"),
///     DestinationId::from("home"),
/// ]);
///
/// let json = state.to_json().unwrap();
/// let restored = NavigationState::from_json(&json).unwrap();
///
/// assert_eq!(restored.top(), Some(&DestinationId::from("details")));
/// assert_eq!(restored.id, state.id);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was taken
    pub saved_at: DateTime<Utc>,

    /// Destination ids, visible destination first
    pub stack: Vec<DestinationId>,
}

impl NavigationState {
    pub fn new(stack: Vec<DestinationId>) -> Self {
        Self {
            version: STATE_VERSION,
            id: Uuid::new_v4(),
            saved_at: Utc::now(),
            stack,
        }
    }

    /// The destination visible when the snapshot was taken.
    pub fn top(&self) -> Option<&DestinationId> {
        self.stack.first()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Check that this snapshot can be restored by this version.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != STATE_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: STATE_VERSION,
            });
        }
        if self.stack.is_empty() {
            return Err(CheckpointError::EmptyStack);
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode and validate a JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let state: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        state.validate()?;
        Ok(state)
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode and validate a binary snapshot.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let state: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        state.validate()?;
        Ok(state)
    }
}
