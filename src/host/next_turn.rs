//! Host animations that begin on a later turn.

use super::animation::{Animation, AnimationListener, LayoutTransition};
use super::container::Container;
use super::looper::Looper;
use crate::core::Screen;
use std::fmt;
use std::rc::Rc;

/// Wraps an animation so it starts on the looper's next turn.
///
/// Real hosts begin a delayed layout transition on the next frame, and only
/// then report the start. Nothing reaches `listener` before that turn runs.
///
/// # Example
///
/// ```rust
/// use viewnav::host::{AnimationListener, Container, LayoutTransition, Looper};
/// use viewnav::host::{ManualClock, MemoryContainer, NextTurn};
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use std::time::Duration;
///
/// let (clock, looper) = (ManualClock::new(), Looper::new());
/// let layout = NextTurn::new(looper.clone(), clock.animation(Duration::from_millis(100)));
/// let container: Rc<dyn Container<&str>> = Rc::new(MemoryContainer::<&str>::new());
///
/// let started = Rc::new(Cell::new(false));
/// let flag = Rc::clone(&started);
/// layout.begin_delayed(&container, AnimationListener::new().on_start(move || flag.set(true)));
/// assert!(!started.get());
///
/// looper.run_turn();
/// assert!(started.get());
/// ```
pub struct NextTurn<T> {
    looper: Looper,
    inner: Rc<T>,
}

impl<T> NextTurn<T> {
    pub fn new(looper: Looper, inner: T) -> Self {
        Self {
            looper,
            inner: Rc::new(inner),
        }
    }
}

impl<T> Clone for NextTurn<T> {
    fn clone(&self) -> Self {
        Self {
            looper: self.looper.clone(),
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for NextTurn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NextTurn")
            .field("looper", &self.looper)
            .finish_non_exhaustive()
    }
}

impl<H: Screen, T: LayoutTransition<H> + 'static> LayoutTransition<H> for NextTurn<T> {
    fn begin_delayed(&self, container: &Rc<dyn Container<H>>, listener: AnimationListener) {
        let (inner, container) = (Rc::clone(&self.inner), Rc::clone(container));
        self.looper
            .post(move || inner.begin_delayed(&container, listener));
    }
}

impl<H: Screen, T: Animation<H> + 'static> Animation<H> for NextTurn<T> {
    fn start(&self, target: &H, listener: AnimationListener) {
        let (inner, target) = (Rc::clone(&self.inner), target.clone());
        self.looper.post(move || inner.start(&target, listener));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ManualClock;
    use std::cell::RefCell;
    use std::time::Duration;

    #[test]
    fn animation_starts_and_ends_after_the_turn() {
        let (clock, looper) = (ManualClock::new(), Looper::new());
        let tween = NextTurn::new(looper.clone(), clock.animation(Duration::from_millis(50)));
        let log = Rc::new(RefCell::new(Vec::new()));
        let (start_log, end_log) = (Rc::clone(&log), Rc::clone(&log));

        tween.start(
            &"a",
            AnimationListener::new()
                .on_start(move || start_log.borrow_mut().push("start"))
                .on_end(move || end_log.borrow_mut().push("end")),
        );
        clock.finish_all();
        assert!(log.borrow().is_empty());

        looper.run_turn();
        assert_eq!(*log.borrow(), vec!["start"]);
        assert_eq!(clock.running(), 1);

        clock.finish_all();
        assert_eq!(*log.borrow(), vec!["start", "end"]);
    }
}
