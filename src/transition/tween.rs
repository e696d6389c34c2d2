//! Tween-style transition.

use super::{Transition, TransitionContext};
use crate::core::Screen;
use crate::host::{Animation, AnimationListener, Container};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Role {
    Enter,
    Exit,
}

/// Tracks which tweens of one hand-off are still running.
struct RunningTweens {
    ctx: TransitionContext,
    running: RefCell<HashSet<Role>>,
}

impl RunningTweens {
    fn new(ctx: TransitionContext) -> Rc<Self> {
        Rc::new(Self {
            ctx,
            running: RefCell::new(HashSet::from([Role::Enter, Role::Exit])),
        })
    }

    fn listener(self: &Rc<Self>, role: Role) -> AnimationListener {
        let (start, end) = (Rc::clone(self), Rc::clone(self));
        AnimationListener::new()
            .on_start(move || start.ctx.dispatch_started())
            .on_end(move || end.finish(role))
    }

    fn finish(&self, role: Role) {
        let now_idle = {
            let mut running = self.running.borrow_mut();
            running.remove(&role) && running.is_empty()
        };
        if now_idle {
            self.ctx.dispatch_ended();
        }
    }
}

/// Starts an exit tween on `from` and an enter tween on `to` in parallel.
///
/// Both tweens are registered before either starts, so the end is
/// dispatched only after the last of them finishes, whatever their order.
pub struct ViewTweens<H: Screen> {
    enter: Rc<dyn Animation<H>>,
    exit: Rc<dyn Animation<H>>,
}

impl<H: Screen> ViewTweens<H> {
    pub fn new(enter: Rc<dyn Animation<H>>, exit: Rc<dyn Animation<H>>) -> Self {
        Self { enter, exit }
    }
}

impl<H: Screen> Transition<H> for ViewTweens<H> {
    fn run(&self, ctx: &TransitionContext, container: &Rc<dyn Container<H>>, from: &H, to: &H) {
        let tweens = RunningTweens::new(ctx.clone());

        self.exit.start(from, tweens.listener(Role::Exit));
        container.attach(to);
        self.enter.start(to, tweens.listener(Role::Enter));
    }

    fn name(&self) -> &str {
        "view-tweens"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Looper, ManualClock, MemoryContainer};
    use std::time::Duration;

    fn run(enter_ms: u64, exit_ms: u64) -> (ManualClock, TransitionContext) {
        let clock = ManualClock::new();
        let memory = Rc::new(MemoryContainer::new());
        memory.attach(&"a");
        let container: Rc<dyn Container<&str>> = memory;
        let ctx = TransitionContext::standalone(Looper::new());

        ViewTweens::<&str>::new(
            Rc::new(clock.animation(Duration::from_millis(enter_ms))),
            Rc::new(clock.animation(Duration::from_millis(exit_ms))),
        )
        .run(&ctx, &container, &"a", &"b");
        (clock, ctx)
    }

    #[test]
    fn waits_for_slower_enter() {
        let (clock, ctx) = run(400, 100);
        assert!(ctx.is_started());

        clock.advance(Duration::from_millis(100));
        assert!(!ctx.is_ended());

        clock.advance(Duration::from_millis(300));
        assert!(ctx.is_ended());
    }

    #[test]
    fn waits_for_slower_exit() {
        let (clock, ctx) = run(100, 400);

        clock.advance(Duration::from_millis(100));
        assert!(!ctx.is_ended());

        clock.advance(Duration::from_millis(300));
        assert!(ctx.is_ended());
    }

    #[test]
    fn instant_tweens_end_once_both_finish() {
        let (clock, ctx) = run(0, 0);

        assert!(!ctx.is_ended());
        assert_eq!(clock.advance(Duration::ZERO), 2);
        assert!(ctx.is_ended());
    }
}
