//! Pop transitions remembered per push.

use crate::core::{DestinationId, Screen, StackEntry};
use crate::transition::SharedTransition;
use std::collections::HashMap;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct PushKey {
    pushed: DestinationId,
    previous: DestinationId,
    sequence: u64,
}

impl PushKey {
    fn new(pushed: &StackEntry, previous: &DestinationId) -> Self {
        Self {
            pushed: pushed.destination.clone(),
            previous: previous.clone(),
            sequence: pushed.sequence,
        }
    }
}

/// Transitions to play when a specific push is popped.
///
/// An entry is recorded only when a navigation supplied an explicit pop
/// transition, and is consumed by the pop of that very push. Pushing the
/// same pair again later without an override falls through to defaults.
pub struct PopTransitionRegistry<H: Screen> {
    entries: HashMap<PushKey, SharedTransition<H>>,
}

impl<H: Screen> PopTransitionRegistry<H> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Remember `transition` for the pop of `pushed`, which covered `previous`.
    pub fn record(
        &mut self,
        pushed: &StackEntry,
        previous: &DestinationId,
        transition: SharedTransition<H>,
    ) {
        self.entries.insert(PushKey::new(pushed, previous), transition);
    }

    /// Remove and return the transition recorded for `pushed`.
    pub fn take(
        &mut self,
        pushed: &StackEntry,
        previous: &DestinationId,
    ) -> Option<SharedTransition<H>> {
        self.entries.remove(&PushKey::new(pushed, previous))
    }

    pub fn contains(&self, pushed: &StackEntry, previous: &DestinationId) -> bool {
        self.entries.contains_key(&PushKey::new(pushed, previous))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<H: Screen> Default for PopTransitionRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Screen> fmt::Debug for PopTransitionRegistry<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PopTransitionRegistry")
            .field("entries", &self.entries.len())
            .finish()
    }
}
