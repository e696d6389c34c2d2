//! The shared view surface screens are attached to.

use crate::core::Screen;
use std::cell::RefCell;

/// Host surface holding attached screen handles.
///
/// Attached handles keep their relative z-order in attach order: the last
/// attached handle is on top. Methods take `&self` because the container is
/// shared between the navigator and the transitions it starts, all on one
/// control thread.
pub trait Container<H: Screen> {
    /// Attach `handle` on top of the existing children.
    fn attach(&self, handle: &H);

    /// Detach `handle` if present.
    fn detach(&self, handle: &H);

    /// Attached handles, bottom to top.
    fn children(&self) -> Vec<H>;

    /// Whether `handle` is currently attached.
    fn contains(&self, handle: &H) -> bool {
        self.children().iter().any(|h| h == handle)
    }
}

/// Mutation observed by a [`MemoryContainer`].
#[derive(Clone, Debug, PartialEq)]
pub enum ContainerEvent<H> {
    Attached(H),
    Detached(H),
}

/// In-memory container for headless hosts and tests.
///
/// Refuses to attach a handle that is already present and keeps a log of
/// every mutation it performed.
///
/// # Example
///
/// ```rust
/// use viewnav::host::{Container, MemoryContainer};
///
/// let container = MemoryContainer::new();
/// container.attach(&"home");
/// container.attach(&"details");
///
/// assert_eq!(container.children(), vec!["home", "details"]);
/// assert_eq!(container.top(), Some("details"));
/// ```
#[derive(Debug)]
pub struct MemoryContainer<H> {
    children: RefCell<Vec<H>>,
    events: RefCell<Vec<ContainerEvent<H>>>,
}

impl<H: Screen> MemoryContainer<H> {
    pub fn new() -> Self {
        Self {
            children: RefCell::new(Vec::new()),
            events: RefCell::new(Vec::new()),
        }
    }

    /// The topmost attached handle.
    pub fn top(&self) -> Option<H> {
        self.children.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.children.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.borrow().is_empty()
    }

    /// Every mutation performed so far, oldest first.
    pub fn events(&self) -> Vec<ContainerEvent<H>> {
        self.events.borrow().clone()
    }

    /// Number of times `handle` was attached.
    pub fn attach_count(&self, handle: &H) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, ContainerEvent::Attached(h) if h == handle))
            .count()
    }

    /// Number of times `handle` was detached.
    pub fn detach_count(&self, handle: &H) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, ContainerEvent::Detached(h) if h == handle))
            .count()
    }
}

impl<H: Screen> Default for MemoryContainer<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Screen> Container<H> for MemoryContainer<H> {
    fn attach(&self, handle: &H) {
        let mut children = self.children.borrow_mut();
        if children.contains(handle) {
            tracing::warn!(?handle, "refusing to attach a handle twice");
            return;
        }
        children.push(handle.clone());
        self.events
            .borrow_mut()
            .push(ContainerEvent::Attached(handle.clone()));
    }

    fn detach(&self, handle: &H) {
        let mut children = self.children.borrow_mut();
        let Some(index) = children.iter().position(|h| h == handle) else {
            return;
        };
        children.remove(index);
        self.events
            .borrow_mut()
            .push(ContainerEvent::Detached(handle.clone()));
    }

    fn children(&self) -> Vec<H> {
        self.children.borrow().clone()
    }

    fn contains(&self, handle: &H) -> bool {
        self.children.borrow().contains(handle)
    }
}
