//! Navigation history tracking.
//!
//! Every accepted navigation is recorded with the transition that ran, so a
//! host can inspect how the user moved through the graph.

use super::destination::DestinationId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Kind of an accepted navigation event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationKind {
    /// A destination was pushed on top of the stack.
    Push,
    /// The top destination was popped.
    Pop,
    /// The stack was replaced from persisted state.
    Restore,
}

/// Record of a single accepted navigation.
///
/// # Example
///
/// ```rust
/// use viewnav::core::{DestinationId, NavigationKind, NavigationRecord};
/// use chrono::Utc;
///
/// let record = NavigationRecord {
///     kind: NavigationKind::Push,
///     from: Some(DestinationId::from("home")),
///     to: DestinationId::from("details"),
///     transition: "no-transition".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to.as_str(), "details");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigationRecord {
    pub kind: NavigationKind,
    /// The destination that was visible before; `None` for the first screen
    pub from: Option<DestinationId>,
    /// The destination that became visible
    pub to: DestinationId,
    /// Name of the transition that ran
    pub transition: String,
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of accepted navigations.
///
/// # Example
///
/// ```rust
/// use viewnav::core::{DestinationId, NavigationHistory, NavigationKind, NavigationRecord};
/// use chrono::Utc;
///
/// let mut history = NavigationHistory::new();
/// history.record(NavigationRecord {
///     kind: NavigationKind::Push,
///     from: None,
///     to: DestinationId::from("home"),
///     transition: "none".to_string(),
///     timestamp: Utc::now(),
/// });
/// history.record(NavigationRecord {
///     kind: NavigationKind::Push,
///     from: Some(DestinationId::from("home")),
///     to: DestinationId::from("details"),
///     transition: "tween".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// let path = history.path();
/// assert_eq!(path.len(), 2);
/// assert_eq!(path[1].as_str(), "details");
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NavigationHistory {
    records: Vec<NavigationRecord>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn record(&mut self, record: NavigationRecord) {
        self.records.push(record);
    }

    /// Destinations that became visible, in order.
    pub fn path(&self) -> Vec<&DestinationId> {
        self.records.iter().map(|r| &r.to).collect()
    }

    /// Count of records of one kind.
    pub fn count(&self, kind: NavigationKind) -> usize {
        self.records.iter().filter(|r| r.kind == kind).count()
    }

    /// Time between the first and last record, `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn records(&self) -> &[NavigationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
