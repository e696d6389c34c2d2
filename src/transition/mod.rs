//! Hand-offs between the visible screen and the next one.
//!
//! A [`Transition`] receives a [`TransitionContext`], the shared container
//! and the two handles. It signals the start of the hand-off before it
//! mutates anything and the end once every animated effect it drives has
//! finished. Transitions carry no identity: the navigator resolves one fresh
//! for every navigation event.
//!
//! # Kinds
//!
//! - [`NoTransition`]: instant swap, start and end dispatched synchronously
//! - [`ToEndScene`]: declarative scene change animated by the host
//! - [`PropertyAnimators`]: concurrent animators, completion follows exit
//! - [`ViewTweens`]: parallel tweens, completion after the last one
//! - [`ConstraintSets`] and [`ConstraintMorph`]: constraint-driven morphs
//!   that restore each handle's constraints afterwards

mod animator;
mod constraint;
mod context;
mod no_op;
mod resolver;
mod scene;
mod tween;

pub use animator::PropertyAnimators;
pub use constraint::{ConstraintMorph, ConstraintScreen, ConstraintSets};
pub use context::{DispatchEvent, DispatchObserver, TransitionContext};
pub use no_op::NoTransition;
pub use resolver::TransitionResolver;
pub use scene::ToEndScene;
pub use tween::ViewTweens;

use crate::core::Screen;
use crate::host::{Animation, Container, LayoutTransition};
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

/// An animated or instantaneous hand-off between two screens.
pub trait Transition<H: Screen> {
    /// Hand the container over from `from` to `to`.
    ///
    /// Implementations call `ctx.dispatch_started()` before mutating shared
    /// state and `ctx.dispatch_ended()` exactly once, after the last of their
    /// effects has finished. A navigator has already dispatched the start
    /// when it calls `run`; the repeated call is a no-op.
    fn run(&self, ctx: &TransitionContext, container: &Rc<dyn Container<H>>, from: &H, to: &H);

    /// Short name used in logs and navigation history.
    fn name(&self) -> &str {
        "transition"
    }
}

/// Shared, type-erased transition.
pub type SharedTransition<H> = Rc<dyn Transition<H>>;

/// Transition backed by a closure.
///
/// # Example
///
/// ```rust
/// use viewnav::transition::{FnTransition, Transition};
///
/// let cut = FnTransition::<&str, _>::new("cut", |ctx, container, from, to| {
///     ctx.dispatch_started();
///     container.attach(to);
///     container.detach(from);
///     ctx.dispatch_ended();
/// });
/// assert_eq!(cut.name(), "cut");
/// ```
pub struct FnTransition<H, F> {
    name: &'static str,
    run: F,
    _screen: PhantomData<fn(&H)>,
}

impl<H, F> FnTransition<H, F>
where
    H: Screen,
    F: Fn(&TransitionContext, &Rc<dyn Container<H>>, &H, &H),
{
    pub fn new(name: &'static str, run: F) -> Self {
        Self {
            name,
            run,
            _screen: PhantomData,
        }
    }
}

impl<H, F> Transition<H> for FnTransition<H, F>
where
    H: Screen,
    F: Fn(&TransitionContext, &Rc<dyn Container<H>>, &H, &H),
{
    fn run(&self, ctx: &TransitionContext, container: &Rc<dyn Container<H>>, from: &H, to: &H) {
        (self.run)(ctx, container, from, to);
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// A destination's own enter and pop-enter transitions.
pub struct DefaultTransitions<H: Screen> {
    /// Runs when navigating to the destination
    pub enter: SharedTransition<H>,
    /// Runs when a pop reveals the destination
    pub pop_enter: SharedTransition<H>,
}

impl<H: Screen> DefaultTransitions<H> {
    /// Use `enter` for both directions.
    pub fn new(enter: SharedTransition<H>) -> Self {
        Self {
            pop_enter: Rc::clone(&enter),
            enter,
        }
    }

    pub fn with_pop(enter: SharedTransition<H>, pop_enter: SharedTransition<H>) -> Self {
        Self { enter, pop_enter }
    }
}

impl<H: Screen> Clone for DefaultTransitions<H> {
    fn clone(&self) -> Self {
        Self {
            enter: Rc::clone(&self.enter),
            pop_enter: Rc::clone(&self.pop_enter),
        }
    }
}

impl<H: Screen> fmt::Debug for DefaultTransitions<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultTransitions")
            .field("enter", &self.enter.name())
            .field("pop_enter", &self.pop_enter.name())
            .finish()
    }
}

/// Transitions supplied with a single `navigate` call.
///
/// `transition` runs now; `pop_transition` is remembered and runs when this
/// very push is popped.
///
/// # Example
///
/// ```rust
/// use viewnav::host::ManualClock;
/// use viewnav::transition::TransitionPair;
/// use std::rc::Rc;
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let pair = TransitionPair::<&str>::tweens(
///     Rc::new(clock.animation(Duration::from_millis(200))),
///     Rc::new(clock.animation(Duration::from_millis(200))),
///     Rc::new(clock.animation(Duration::from_millis(150))),
///     Rc::new(clock.animation(Duration::from_millis(150))),
/// );
/// assert_eq!(pair.transition.name(), "view-tweens");
/// ```
pub struct TransitionPair<H: Screen> {
    pub transition: SharedTransition<H>,
    pub pop_transition: SharedTransition<H>,
}

impl<H: Screen> TransitionPair<H> {
    pub fn new(transition: SharedTransition<H>, pop_transition: SharedTransition<H>) -> Self {
        Self {
            transition,
            pop_transition,
        }
    }

    /// Play the same transition in both directions.
    pub fn symmetric(transition: SharedTransition<H>) -> Self {
        Self {
            pop_transition: Rc::clone(&transition),
            transition,
        }
    }

    /// Scene transitions driven by `layout` and `pop_layout`.
    pub fn scenes(
        layout: Rc<dyn LayoutTransition<H>>,
        pop_layout: Rc<dyn LayoutTransition<H>>,
    ) -> Self {
        Self::new(
            Rc::new(ToEndScene::new(layout)),
            Rc::new(ToEndScene::new(pop_layout)),
        )
    }

    /// Tweens for each of the four roles.
    pub fn tweens(
        enter: Rc<dyn Animation<H>>,
        exit: Rc<dyn Animation<H>>,
        pop_enter: Rc<dyn Animation<H>>,
        pop_exit: Rc<dyn Animation<H>>,
    ) -> Self {
        Self::new(
            Rc::new(ViewTweens::new(enter, exit)),
            Rc::new(ViewTweens::new(pop_enter, pop_exit)),
        )
    }

    /// Property animators for each of the four roles.
    pub fn animators(
        enter: Rc<dyn Animation<H>>,
        exit: Rc<dyn Animation<H>>,
        pop_enter: Rc<dyn Animation<H>>,
        pop_exit: Rc<dyn Animation<H>>,
    ) -> Self {
        Self::new(
            Rc::new(PropertyAnimators::new(enter, exit)),
            Rc::new(PropertyAnimators::new(pop_enter, pop_exit)),
        )
    }
}

impl<H: ConstraintScreen> TransitionPair<H> {
    /// Constraint morphs driven by `layout` and `pop_layout`.
    pub fn constraint_morphs(
        layout: Rc<dyn LayoutTransition<H>>,
        pop_layout: Rc<dyn LayoutTransition<H>>,
    ) -> Self {
        Self::new(
            Rc::new(ConstraintMorph::new(layout)),
            Rc::new(ConstraintMorph::new(pop_layout)),
        )
    }

    /// Constraint-set slides for both directions.
    pub fn constraint_sets(
        layout: Rc<dyn LayoutTransition<H>>,
        pop_layout: Rc<dyn LayoutTransition<H>>,
        enter_from: H::Constraints,
        exit_to: H::Constraints,
        pop_enter_from: H::Constraints,
        pop_exit_to: H::Constraints,
    ) -> Self {
        Self::new(
            Rc::new(ConstraintSets::new(enter_from, exit_to, layout)),
            Rc::new(ConstraintSets::new(pop_enter_from, pop_exit_to, pop_layout)),
        )
    }
}

impl<H: Screen> Clone for TransitionPair<H> {
    fn clone(&self) -> Self {
        Self::new(Rc::clone(&self.transition), Rc::clone(&self.pop_transition))
    }
}

impl<H: Screen> fmt::Debug for TransitionPair<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionPair")
            .field("transition", &self.transition.name())
            .field("pop_transition", &self.pop_transition.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Looper, ManualClock, MemoryContainer};
    use std::time::Duration;

    #[test]
    fn fn_transition_runs_closure() {
        let memory = Rc::new(MemoryContainer::new());
        memory.attach(&1u8);
        let container: Rc<dyn Container<u8>> = memory.clone();
        let ctx = TransitionContext::standalone(Looper::new());

        let cut = FnTransition::<u8, _>::new("cut", |ctx, container, from, to| {
            container.attach(to);
            container.detach(from);
            ctx.dispatch_ended();
        });
        cut.run(&ctx, &container, &1, &2);

        assert_eq!(memory.children(), vec![2]);
        assert!(ctx.is_ended());
    }

    #[test]
    fn default_pop_enter_mirrors_enter() {
        let defaults = DefaultTransitions::<u8>::new(Rc::new(NoTransition));
        assert!(Rc::ptr_eq(&defaults.enter, &defaults.pop_enter));
    }

    #[test]
    fn symmetric_pair_shares_transition() {
        let pair = TransitionPair::<u8>::symmetric(Rc::new(NoTransition));
        assert!(Rc::ptr_eq(&pair.transition, &pair.pop_transition));
    }

    #[test]
    fn factories_pick_matching_kinds() {
        let clock = ManualClock::new();
        let anim = || -> Rc<dyn Animation<u8>> { Rc::new(clock.animation(Duration::from_millis(10))) };
        let layout =
            || -> Rc<dyn LayoutTransition<u8>> { Rc::new(clock.animation(Duration::from_millis(10))) };

        let scenes = TransitionPair::scenes(layout(), layout());
        let animators = TransitionPair::animators(anim(), anim(), anim(), anim());

        assert_eq!(scenes.transition.name(), "scene");
        assert_eq!(scenes.pop_transition.name(), "scene");
        assert_eq!(animators.pop_transition.name(), "property-animators");
    }
}
