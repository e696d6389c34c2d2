//! Instant cut between two screens.

use super::{Transition, TransitionContext};
use crate::core::Screen;
use crate::host::Container;
use std::rc::Rc;

/// Swaps attachment with no animation.
///
/// Start and end are dispatched synchronously, so the participants are
/// never observed in transition once `run` returns.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTransition;

impl<H: Screen> Transition<H> for NoTransition {
    fn run(&self, ctx: &TransitionContext, container: &Rc<dyn Container<H>>, from: &H, to: &H) {
        ctx.dispatch_started();
        container.attach(to);
        container.detach(from);
        ctx.dispatch_ended();
    }

    fn name(&self) -> &str {
        "no-transition"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Looper, MemoryContainer};

    #[test]
    fn swaps_synchronously() {
        let memory = Rc::new(MemoryContainer::new());
        memory.attach(&"a");
        let container: Rc<dyn Container<&str>> = memory.clone();
        let ctx = TransitionContext::standalone(Looper::new());

        NoTransition.run(&ctx, &container, &"a", &"b");

        assert_eq!(memory.children(), vec!["b"]);
        assert!(ctx.is_started());
        assert!(ctx.is_ended());
    }
}
