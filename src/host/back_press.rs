//! Back-press plumbing between the host and a navigator.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Receives notice of when a navigator can consume a back-press.
///
/// `bind` is called once the back-stack grows past one destination and
/// `unbind` once it shrinks back to one.
pub trait BackPressBinding {
    fn bind(&mut self);
    fn unbind(&mut self);
}

/// Identifies a callback registered with a [`BackPressDispatcher`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CallbackId(u64);

type BackPressCallback = Rc<dyn Fn() -> bool>;

/// Host-side back-press dispatcher.
///
/// Callbacks are offered the press newest first. A callback returns whether
/// anything remains on screen; when no callback is registered the press is
/// not consumed and the host should leave the surrounding context.
///
/// # Example
///
/// ```rust
/// use viewnav::host::BackPressDispatcher;
///
/// let dispatcher = BackPressDispatcher::new();
/// assert!(!dispatcher.on_back_pressed());
///
/// let id = dispatcher.add(|| true);
/// assert!(dispatcher.on_back_pressed());
///
/// dispatcher.remove(id);
/// assert!(!dispatcher.on_back_pressed());
/// ```
#[derive(Clone, Default)]
pub struct BackPressDispatcher {
    callbacks: Rc<RefCell<Vec<(CallbackId, BackPressCallback)>>>,
    next_id: Rc<Cell<u64>>,
}

impl BackPressDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` ahead of every existing one.
    pub fn add(&self, callback: impl Fn() -> bool + 'static) -> CallbackId {
        let id = CallbackId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.callbacks.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    /// Unregister a callback. Unknown ids are ignored.
    pub fn remove(&self, id: CallbackId) {
        self.callbacks.borrow_mut().retain(|(cid, _)| *cid != id);
    }

    /// Deliver a back-press to the newest callback.
    ///
    /// Returns `false` when no callback is registered.
    pub fn on_back_pressed(&self) -> bool {
        let newest = self.callbacks.borrow().last().map(|(_, cb)| Rc::clone(cb));
        match newest {
            Some(callback) => callback(),
            None => false,
        }
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.callbacks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.borrow().is_empty()
    }
}

impl fmt::Debug for BackPressDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackPressDispatcher")
            .field("callbacks", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_callback_wins() {
        let dispatcher = BackPressDispatcher::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&log);
        dispatcher.add(move || {
            first.borrow_mut().push("first");
            true
        });
        let second = Rc::clone(&log);
        let id = dispatcher.add(move || {
            second.borrow_mut().push("second");
            false
        });

        assert!(!dispatcher.on_back_pressed());
        dispatcher.remove(id);
        assert!(dispatcher.on_back_pressed());

        assert_eq!(*log.borrow(), vec!["second", "first"]);
    }

    #[test]
    fn callback_may_remove_itself() {
        let dispatcher = BackPressDispatcher::new();
        let slot = Rc::new(Cell::new(None));

        let inner = dispatcher.clone();
        let inner_slot = Rc::clone(&slot);
        let id = dispatcher.add(move || {
            if let Some(id) = inner_slot.get() {
                inner.remove(id);
            }
            true
        });
        slot.set(Some(id));

        assert!(dispatcher.on_back_pressed());
        assert!(dispatcher.is_empty());
    }
}
