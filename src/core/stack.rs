//! The ordered back-stack of destinations.

use super::destination::DestinationId;
use std::collections::VecDeque;

/// One push onto the back-stack.
///
/// The same destination may appear several times in a stack; the sequence
/// number tells those pushes apart.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StackEntry {
    pub destination: DestinationId,
    pub sequence: u64,
}

/// Most-recent-first sequence of stack entries.
///
/// Index 0 is the visible destination; index 1, when present, is the one that
/// becomes visible after a single pop. Only push and pop-first mutate the
/// order.
///
/// # Example
///
/// ```rust
/// use viewnav::core::{BackStack, DestinationId};
///
/// let mut stack = BackStack::new();
/// stack.push(DestinationId::from("home"));
/// stack.push(DestinationId::from("details"));
///
/// assert_eq!(stack.depth(), 2);
/// assert_eq!(stack.peek().unwrap().destination.as_str(), "details");
/// assert_eq!(stack.peek_second().unwrap().destination.as_str(), "home");
/// ```
#[derive(Clone, Debug, Default)]
pub struct BackStack {
    entries: VecDeque<StackEntry>,
    next_sequence: u64,
}

impl BackStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a destination on top and return the new entry.
    pub fn push(&mut self, destination: DestinationId) -> StackEntry {
        let entry = StackEntry {
            destination,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.entries.push_front(entry.clone());
        entry
    }

    /// The visible entry.
    pub fn peek(&self) -> Option<&StackEntry> {
        self.entries.front()
    }

    /// The entry that becomes visible after one pop.
    pub fn peek_second(&self) -> Option<&StackEntry> {
        self.entries.get(1)
    }

    /// Remove and return the visible entry.
    pub fn pop(&mut self) -> Option<StackEntry> {
        self.entries.pop_front()
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Destination ids, most recent first.
    pub fn ids(&self) -> Vec<DestinationId> {
        self.entries.iter().map(|e| e.destination.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StackEntry> {
        self.entries.iter()
    }

    /// Drop every entry. Sequence numbers keep increasing.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> DestinationId {
        DestinationId::from(s)
    }

    #[test]
    fn new_stack_is_empty() {
        let stack = BackStack::new();
        assert!(stack.is_empty());
        assert!(stack.peek().is_none());
        assert!(stack.peek_second().is_none());
    }

    #[test]
    fn push_places_entry_on_top() {
        let mut stack = BackStack::new();
        stack.push(id("a"));
        stack.push(id("b"));
        stack.push(id("c"));

        assert_eq!(stack.ids(), vec![id("c"), id("b"), id("a")]);
    }

    #[test]
    fn pop_returns_top_first() {
        let mut stack = BackStack::new();
        stack.push(id("a"));
        stack.push(id("b"));

        assert_eq!(stack.pop().unwrap().destination, id("b"));
        assert_eq!(stack.pop().unwrap().destination, id("a"));
        assert!(stack.pop().is_none());
    }

    #[test]
    fn repeated_pushes_get_distinct_sequences() {
        let mut stack = BackStack::new();
        let first = stack.push(id("a"));
        stack.push(id("b"));
        let second = stack.push(id("a"));

        assert_eq!(first.destination, second.destination);
        assert_ne!(first, second);
        assert!(second.sequence > first.sequence);
    }

    #[test]
    fn clear_keeps_sequence_monotonic() {
        let mut stack = BackStack::new();
        let before = stack.push(id("a"));
        stack.clear();
        let after = stack.push(id("a"));

        assert_eq!(stack.depth(), 1);
        assert!(after.sequence > before.sequence);
    }
}
