//! Contracts for the host animation subsystem.
//!
//! The engine never computes a frame. Transitions hand targets to the host's
//! animators and wait for their callbacks, which arrive on the control thread
//! during a later turn.

use super::container::Container;
use crate::core::Screen;
use std::fmt;
use std::rc::Rc;

type Callback = Box<dyn FnOnce()>;

/// Start and end callbacks for one host animation.
///
/// Each callback fires at most once. Ending an animation that never reported
/// a start fires the start callback first, so listeners always observe the
/// pair in order.
///
/// # Example
///
/// ```rust
/// use viewnav::host::AnimationListener;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let log = Rc::new(RefCell::new(Vec::new()));
/// let (start_log, end_log) = (Rc::clone(&log), Rc::clone(&log));
///
/// let listener = AnimationListener::new()
///     .on_start(move || start_log.borrow_mut().push("start"))
///     .on_end(move || end_log.borrow_mut().push("end"));
///
/// listener.ended();
/// assert_eq!(*log.borrow(), vec!["start", "end"]);
/// ```
#[derive(Default)]
pub struct AnimationListener {
    on_start: Option<Callback>,
    on_end: Option<Callback>,
}

impl AnimationListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `callback` when the animation starts.
    pub fn on_start(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_start = Some(Box::new(callback));
        self
    }

    /// Run `callback` when the animation ends.
    pub fn on_end(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_end = Some(Box::new(callback));
        self
    }

    /// Report that the animation started. Later calls do nothing.
    pub fn started(&mut self) {
        if let Some(callback) = self.on_start.take() {
            callback();
        }
    }

    /// Report that the animation finished, consuming the listener.
    pub fn ended(mut self) {
        self.started();
        if let Some(callback) = self.on_end.take() {
            callback();
        }
    }
}

impl fmt::Debug for AnimationListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationListener")
            .field("start_pending", &self.on_start.is_some())
            .field("end_pending", &self.on_end.is_some())
            .finish()
    }
}

/// A single animator or tween applied to one screen.
pub trait Animation<H: Screen> {
    /// Start animating `target`, reporting progress through `listener`.
    fn start(&self, target: &H, listener: AnimationListener);
}

/// A container-wide transition in the "begin delayed" style.
///
/// Calling [`begin_delayed`](LayoutTransition::begin_delayed) captures the
/// container's current state. Whatever the caller changes before the next
/// frame (attached children, constraints) is animated from the captured state
/// to the new one.
pub trait LayoutTransition<H: Screen> {
    fn begin_delayed(&self, container: &Rc<dyn Container<H>>, listener: AnimationListener);
}

impl<H: Screen, T: Animation<H> + ?Sized> Animation<H> for Rc<T> {
    fn start(&self, target: &H, listener: AnimationListener) {
        (**self).start(target, listener);
    }
}

impl<H: Screen, T: LayoutTransition<H> + ?Sized> LayoutTransition<H> for Rc<T> {
    fn begin_delayed(&self, container: &Rc<dyn Container<H>>, listener: AnimationListener) {
        (**self).begin_delayed(container, listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[test]
    fn started_fires_once() {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        let mut listener = AnimationListener::new().on_start(move || c.set(c.get() + 1));

        listener.started();
        listener.started();
        listener.ended();

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn ended_implies_started() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (a, b) = (Rc::clone(&log), Rc::clone(&log));
        let listener = AnimationListener::new()
            .on_end(move || a.borrow_mut().push("end"))
            .on_start(move || b.borrow_mut().push("start"));

        listener.ended();

        assert_eq!(*log.borrow(), vec!["start", "end"]);
    }

    #[test]
    fn empty_listener_is_harmless() {
        let mut listener = AnimationListener::new();
        listener.started();
        listener.ended();
    }
}
