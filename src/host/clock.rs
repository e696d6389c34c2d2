//! Deterministic animation clock.
//!
//! `ManualClock` plays the part of the host's animation subsystem in headless
//! hosts and tests: animations run for a fixed duration and finish when the
//! clock is advanced past their end. End callbacks fire from inside
//! [`ManualClock::advance`], the same way a real host fires them from inside
//! its frame iteration.

use super::animation::{Animation, AnimationListener, LayoutTransition};
use super::container::Container;
use crate::core::Screen;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

struct Running {
    id: u64,
    ends_at: Duration,
    listener: AnimationListener,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    running: Vec<Running>,
}

/// Animation clock advanced by hand.
///
/// # Example
///
/// ```rust
/// use viewnav::host::{Animation, AnimationListener, ManualClock};
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let fade = clock.animation(Duration::from_millis(200));
///
/// let done = Rc::new(Cell::new(false));
/// let flag = Rc::clone(&done);
/// fade.start(&"screen", AnimationListener::new().on_end(move || flag.set(true)));
///
/// clock.advance(Duration::from_millis(100));
/// assert!(!done.get());
/// clock.advance(Duration::from_millis(100));
/// assert!(done.get());
/// ```
#[derive(Clone, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// An animation of fixed `duration` driven by this clock.
    pub fn animation(&self, duration: Duration) -> TimedAnimation {
        TimedAnimation {
            clock: self.clone(),
            duration,
        }
    }

    /// Register a running animation. Its start is reported immediately.
    pub fn schedule(&self, duration: Duration, mut listener: AnimationListener) {
        listener.started();
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let ends_at = state.now + duration;
        state.running.push(Running {
            id,
            ends_at,
            listener,
        });
    }

    /// Move time forward and finish every animation whose end was reached.
    ///
    /// Animations finish in end-time order, ties in start order. Returns the
    /// number of animations that finished.
    pub fn advance(&self, by: Duration) -> usize {
        {
            let mut state = self.state.borrow_mut();
            state.now += by;
        }
        let mut finished = 0;
        // Callbacks may schedule zero-length animations that are due at once.
        loop {
            let due = self.take_due();
            if due.is_empty() {
                return finished;
            }
            finished += due.len();
            for running in due {
                running.listener.ended();
            }
        }
    }

    /// Advance until nothing is running. Returns the number of animations
    /// that finished.
    pub fn finish_all(&self) -> usize {
        let mut finished = 0;
        while let Some(next_end) = self.next_end() {
            let now = self.now();
            finished += self.advance(next_end.saturating_sub(now));
        }
        finished
    }

    /// Animations that have started but not finished.
    pub fn running(&self) -> usize {
        self.state.borrow().running.len()
    }

    /// Time elapsed since the clock was created.
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    fn next_end(&self) -> Option<Duration> {
        self.state.borrow().running.iter().map(|r| r.ends_at).min()
    }

    fn take_due(&self) -> Vec<Running> {
        let mut state = self.state.borrow_mut();
        let now = state.now;
        let (mut due, pending): (Vec<_>, Vec<_>) =
            state.running.drain(..).partition(|r| r.ends_at <= now);
        state.running = pending;
        due.sort_by_key(|r| (r.ends_at, r.id));
        due
    }
}

impl fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ManualClock")
            .field("now", &state.now)
            .field("running", &state.running.len())
            .finish()
    }
}

/// Fixed-duration animation on a [`ManualClock`].
///
/// Works both as a per-screen [`Animation`] and as a container-wide
/// [`LayoutTransition`].
#[derive(Clone, Debug)]
pub struct TimedAnimation {
    clock: ManualClock,
    duration: Duration,
}

impl TimedAnimation {
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl<H: Screen> Animation<H> for TimedAnimation {
    fn start(&self, target: &H, listener: AnimationListener) {
        tracing::trace!(?target, duration = ?self.duration, "animation started");
        self.clock.schedule(self.duration, listener);
    }
}

impl<H: Screen> LayoutTransition<H> for TimedAnimation {
    fn begin_delayed(&self, _container: &Rc<dyn Container<H>>, listener: AnimationListener) {
        tracing::trace!(duration = ?self.duration, "layout transition started");
        self.clock.schedule(self.duration, listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn recording(log: &Rc<RefCell<Vec<&'static str>>>, name: &'static str) -> AnimationListener {
        let log = Rc::clone(log);
        AnimationListener::new().on_end(move || log.borrow_mut().push(name))
    }

    #[test]
    fn start_is_reported_immediately() {
        let clock = ManualClock::new();
        let started = Rc::new(Cell::new(false));
        let flag = Rc::clone(&started);

        clock.schedule(
            Duration::from_millis(50),
            AnimationListener::new().on_start(move || flag.set(true)),
        );

        assert!(started.get());
        assert_eq!(clock.running(), 1);
    }

    #[test]
    fn animations_finish_in_end_order() {
        let clock = ManualClock::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        clock.schedule(Duration::from_millis(300), recording(&log, "slow"));
        clock.schedule(Duration::from_millis(100), recording(&log, "fast"));
        clock.schedule(Duration::from_millis(100), recording(&log, "fast-2"));

        assert_eq!(clock.advance(Duration::from_millis(100)), 2);
        assert_eq!(*log.borrow(), vec!["fast", "fast-2"]);

        assert_eq!(clock.advance(Duration::from_millis(200)), 1);
        assert_eq!(*log.borrow(), vec!["fast", "fast-2", "slow"]);
        assert_eq!(clock.running(), 0);
    }

    #[test]
    fn callbacks_may_schedule_more_animations() {
        let clock = ManualClock::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let chained = clock.clone();
        let chained_log = Rc::clone(&log);
        clock.schedule(
            Duration::from_millis(10),
            AnimationListener::new().on_end(move || {
                chained.schedule(Duration::ZERO, recording(&chained_log, "follow-up"));
            }),
        );

        assert_eq!(clock.advance(Duration::from_millis(10)), 2);
        assert_eq!(*log.borrow(), vec!["follow-up"]);
    }

    #[test]
    fn finish_all_drains_everything() {
        let clock = ManualClock::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        clock.schedule(Duration::from_millis(40), recording(&log, "a"));
        clock.schedule(Duration::from_millis(900), recording(&log, "b"));

        assert_eq!(clock.finish_all(), 2);
        assert_eq!(clock.now(), Duration::from_millis(900));
        assert_eq!(*log.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn timed_animation_uses_clock() {
        let clock = ManualClock::new();
        let anim = clock.animation(Duration::from_millis(20));
        let ended = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ended);

        Animation::start(&anim, &1u8, AnimationListener::new().on_end(move || flag.set(true)));
        clock.advance(Duration::from_millis(19));
        assert!(!ended.get());
        clock.advance(Duration::from_millis(1));
        assert!(ended.get());
    }
}
