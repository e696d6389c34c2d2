//! Constraint-driven transitions.
//!
//! Both kinds mutate the participants' layout constraints to drive the host
//! layout transition, and both put every handle back into the constraint
//! state it had before the hand-off once the animation ends. A handle can
//! then take part in a later transition without carrying transient state.

use super::{Transition, TransitionContext};
use crate::core::Screen;
use crate::host::{AnimationListener, Container, LayoutTransition};
use std::rc::Rc;

/// A screen laid out by a set of constraints that can be captured and
/// re-applied.
pub trait ConstraintScreen: Screen {
    /// Captured constraint state.
    type Constraints: Clone + 'static;

    /// Capture the current constraints.
    fn constraints(&self) -> Self::Constraints;

    /// Replace the current constraints.
    fn apply_constraints(&self, constraints: &Self::Constraints);
}

/// Slides `to` in from one constraint set while `from` leaves toward another.
///
/// `to` is attached in its `enter_from` state. On the next turn the layout
/// transition begins, `to` returns to its own constraints and `from` moves to
/// `exit_to`.
pub struct ConstraintSets<H: ConstraintScreen> {
    enter_from: H::Constraints,
    exit_to: H::Constraints,
    layout: Rc<dyn LayoutTransition<H>>,
}

impl<H: ConstraintScreen> ConstraintSets<H> {
    pub fn new(
        enter_from: H::Constraints,
        exit_to: H::Constraints,
        layout: Rc<dyn LayoutTransition<H>>,
    ) -> Self {
        Self {
            enter_from,
            exit_to,
            layout,
        }
    }
}

impl<H: ConstraintScreen> Transition<H> for ConstraintSets<H> {
    fn run(&self, ctx: &TransitionContext, container: &Rc<dyn Container<H>>, from: &H, to: &H) {
        ctx.dispatch_started();

        let from_snapshot = from.constraints();
        let to_snapshot = to.constraints();

        container.attach(to);
        to.apply_constraints(&self.enter_from);

        let layout = Rc::clone(&self.layout);
        let exit_to = self.exit_to.clone();
        let container = Rc::clone(container);
        let (from, to) = (from.clone(), to.clone());
        let anim_ctx = ctx.clone();
        // The enter-from state must be laid out before the animation captures it.
        ctx.post(move || {
            let (restore_from, restore_to) = (from.clone(), to.clone());
            let (start_ctx, end_ctx) = (anim_ctx.clone(), anim_ctx);
            let restore_to_snapshot = to_snapshot.clone();
            layout.begin_delayed(
                &container,
                AnimationListener::new()
                    .on_start(move || start_ctx.dispatch_started())
                    .on_end(move || {
                        restore_from.apply_constraints(&from_snapshot);
                        restore_to.apply_constraints(&restore_to_snapshot);
                        end_ctx.dispatch_ended();
                    }),
            );
            to.apply_constraints(&to_snapshot);
            from.apply_constraints(&exit_to);
        });
    }

    fn name(&self) -> &str {
        "constraint-sets"
    }
}

/// Morphs `from` into the constraints of `to`, then swaps them.
///
/// At the end `to` is attached in place of the morphed `from`, and `from`
/// gets its original constraints back.
pub struct ConstraintMorph<H: ConstraintScreen> {
    layout: Rc<dyn LayoutTransition<H>>,
}

impl<H: ConstraintScreen> ConstraintMorph<H> {
    pub fn new(layout: Rc<dyn LayoutTransition<H>>) -> Self {
        Self { layout }
    }
}

impl<H: ConstraintScreen> Transition<H> for ConstraintMorph<H> {
    fn run(&self, ctx: &TransitionContext, container: &Rc<dyn Container<H>>, from: &H, to: &H) {
        ctx.dispatch_started();
        let from_snapshot = from.constraints();
        let to_snapshot = to.constraints();

        let (start_ctx, end_ctx) = (ctx.clone(), ctx.clone());
        let end_container = Rc::clone(container);
        let (end_from, end_to) = (from.clone(), to.clone());
        self.layout.begin_delayed(
            container,
            AnimationListener::new()
                .on_start(move || start_ctx.dispatch_started())
                .on_end(move || {
                    end_container.attach(&end_to);
                    end_from.apply_constraints(&from_snapshot);
                    end_ctx.dispatch_ended();
                }),
        );
        from.apply_constraints(&to_snapshot);
    }

    fn name(&self) -> &str {
        "constraint-morph"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Looper, ManualClock, MemoryContainer};
    use std::cell::RefCell;
    use std::time::Duration;

    #[derive(Clone, Debug)]
    struct Layout {
        name: &'static str,
        constraints: Rc<RefCell<&'static str>>,
    }

    impl Layout {
        fn new(name: &'static str, constraints: &'static str) -> Self {
            Self {
                name,
                constraints: Rc::new(RefCell::new(constraints)),
            }
        }
    }

    impl PartialEq for Layout {
        fn eq(&self, other: &Self) -> bool {
            self.name == other.name
        }
    }

    impl ConstraintScreen for Layout {
        type Constraints = &'static str;

        fn constraints(&self) -> Self::Constraints {
            *self.constraints.borrow()
        }

        fn apply_constraints(&self, constraints: &Self::Constraints) {
            *self.constraints.borrow_mut() = constraints;
        }
    }

    struct Fixture {
        clock: ManualClock,
        looper: Looper,
        memory: Rc<MemoryContainer<Layout>>,
        container: Rc<dyn Container<Layout>>,
        from: Layout,
        to: Layout,
    }

    fn fixture() -> Fixture {
        let memory = Rc::new(MemoryContainer::new());
        let from = Layout::new("from", "from-rest");
        memory.attach(&from);
        let container: Rc<dyn Container<Layout>> = memory.clone();
        Fixture {
            clock: ManualClock::new(),
            looper: Looper::new(),
            memory,
            container,
            from,
            to: Layout::new("to", "to-rest"),
        }
    }

    #[test]
    fn constraint_sets_drive_and_restore() {
        let f = fixture();
        let ctx = TransitionContext::standalone(f.looper.clone());
        let transition = ConstraintSets::<Layout>::new(
            "offscreen-right",
            "offscreen-left",
            Rc::new(f.clock.animation(Duration::from_millis(250))),
        );

        transition.run(&ctx, &f.container, &f.from, &f.to);
        assert!(ctx.is_started());
        assert!(f.memory.contains(&f.to));
        assert_eq!(f.to.constraints(), "offscreen-right");

        f.looper.run_turn();
        assert_eq!(f.to.constraints(), "to-rest");
        assert_eq!(f.from.constraints(), "offscreen-left");
        assert!(!ctx.is_ended());

        f.clock.advance(Duration::from_millis(250));
        assert!(ctx.is_ended());
        assert_eq!(f.from.constraints(), "from-rest");
        assert_eq!(f.to.constraints(), "to-rest");
    }

    #[test]
    fn constraint_morph_swaps_at_end() {
        let f = fixture();
        let ctx = TransitionContext::standalone(f.looper.clone());
        let transition = ConstraintMorph::<Layout>::new(Rc::new(f.clock.animation(Duration::from_millis(100))));

        transition.run(&ctx, &f.container, &f.from, &f.to);
        assert_eq!(f.from.constraints(), "to-rest");
        assert!(!f.memory.contains(&f.to));

        f.clock.advance(Duration::from_millis(100));
        assert!(ctx.is_ended());
        assert!(f.memory.contains(&f.to));
        assert_eq!(f.from.constraints(), "from-rest");
    }
}
