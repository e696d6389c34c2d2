//! Errors raised by navigation calls.

use crate::checkpoint::CheckpointError;
use crate::core::DestinationId;
use thiserror::Error;

/// Hard failures of a navigation call.
///
/// Ignored gestures are not errors; they are reported as
/// [`NavigateOutcome::Ignored`](super::NavigateOutcome::Ignored).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("No destination '{destination}' in the graph")]
    UnknownDestination { destination: DestinationId },

    #[error("Cannot restore state while a transition is running")]
    TransitionInFlight,

    #[error("Invalid navigation state: {0}")]
    InvalidState(#[from] CheckpointError),
}
