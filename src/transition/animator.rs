//! Property-animator transition.

use super::{Transition, TransitionContext};
use crate::core::Screen;
use crate::host::{Animation, AnimationListener, Container};
use std::rc::Rc;

/// Runs an enter animator on `to` and an exit animator on `from` together.
///
/// Completion follows the exit animator: the end is dispatched once, from
/// its end callback.
pub struct PropertyAnimators<H: Screen> {
    enter: Rc<dyn Animation<H>>,
    exit: Rc<dyn Animation<H>>,
}

impl<H: Screen> PropertyAnimators<H> {
    pub fn new(enter: Rc<dyn Animation<H>>, exit: Rc<dyn Animation<H>>) -> Self {
        Self { enter, exit }
    }
}

impl<H: Screen> Transition<H> for PropertyAnimators<H> {
    fn run(&self, ctx: &TransitionContext, container: &Rc<dyn Container<H>>, from: &H, to: &H) {
        ctx.dispatch_started();
        container.attach(to);

        let exit_ctx = ctx.clone();
        self.enter.start(to, AnimationListener::new());
        self.exit.start(
            from,
            AnimationListener::new().on_end(move || exit_ctx.dispatch_ended()),
        );
    }

    fn name(&self) -> &str {
        "property-animators"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Looper, ManualClock, MemoryContainer};
    use std::time::Duration;

    fn run(enter_ms: u64, exit_ms: u64) -> (ManualClock, TransitionContext, Rc<MemoryContainer<&'static str>>) {
        let clock = ManualClock::new();
        let memory = Rc::new(MemoryContainer::new());
        memory.attach(&"a");
        let container: Rc<dyn Container<&str>> = memory.clone();
        let ctx = TransitionContext::standalone(Looper::new());

        let transition = PropertyAnimators::<&str>::new(
            Rc::new(clock.animation(Duration::from_millis(enter_ms))),
            Rc::new(clock.animation(Duration::from_millis(exit_ms))),
        );
        transition.run(&ctx, &container, &"a", &"b");
        (clock, ctx, memory)
    }

    #[test]
    fn end_follows_exit_animator() {
        let (clock, ctx, memory) = run(500, 200);

        assert_eq!(memory.children(), vec!["a", "b"]);
        assert!(ctx.is_started());

        clock.advance(Duration::from_millis(200));
        assert!(ctx.is_ended());
        assert_eq!(clock.running(), 1);
    }

    #[test]
    fn slow_exit_keeps_transition_running() {
        let (clock, ctx, _) = run(100, 400);

        clock.advance(Duration::from_millis(100));
        assert!(!ctx.is_ended());

        clock.advance(Duration::from_millis(300));
        assert!(ctx.is_ended());
    }
}
