//! Motion-layout screens and the transition that plays their scenes.

use super::scenes::{SceneRef, SceneSet};
use crate::host::{AnimationListener, Container};
use crate::transition::{Transition, TransitionContext};
use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;

/// Host view able to play a motion scene in either direction.
///
/// The listener's end callback fires once the layout settles at either end
/// of the scene's progress range.
pub trait MotionLayout: Clone + PartialEq + Debug + 'static {
    fn play(&self, scene: &SceneRef, listener: AnimationListener);
}

/// Screen handle pairing a motion layout with its resolved scenes.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionScreen<L> {
    pub layout: L,
    pub scenes: Rc<SceneSet>,
}

impl<L: MotionLayout> MotionScreen<L> {
    pub fn new(layout: L, scenes: Rc<SceneSet>) -> Self {
        Self { layout, scenes }
    }
}

/// Which pair of scenes a [`MotionTransition`] plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionDirection {
    /// `to` plays its enter scene, `from` its exit scene.
    Forward,
    /// `to` plays its pop-enter scene, `from` its pop-exit scene.
    Pop,
}

/// Plays the participants' own scenes on both layouts at once.
///
/// The incoming layout is attached before its scene starts. The hand-off
/// ends after both layouts have settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MotionTransition {
    direction: MotionDirection,
}

impl MotionTransition {
    pub fn forward() -> Self {
        Self {
            direction: MotionDirection::Forward,
        }
    }

    pub fn pop() -> Self {
        Self {
            direction: MotionDirection::Pop,
        }
    }

    pub fn direction(&self) -> MotionDirection {
        self.direction
    }
}

impl<L: MotionLayout> Transition<MotionScreen<L>> for MotionTransition {
    fn run(
        &self,
        ctx: &TransitionContext,
        container: &Rc<dyn Container<MotionScreen<L>>>,
        from: &MotionScreen<L>,
        to: &MotionScreen<L>,
    ) {
        let (enter, exit) = match self.direction {
            MotionDirection::Forward => (&to.scenes.enter, &from.scenes.exit),
            MotionDirection::Pop => (&to.scenes.pop_enter, &from.scenes.pop_exit),
        };
        tracing::trace!(enter = %enter, exit = %exit, "playing motion scenes");

        ctx.dispatch_started();
        container.attach(to);

        let remaining = Rc::new(Cell::new(2u8));
        let settled = |ctx: TransitionContext, remaining: Rc<Cell<u8>>| {
            AnimationListener::new().on_end(move || {
                remaining.set(remaining.get() - 1);
                if remaining.get() == 0 {
                    ctx.dispatch_ended();
                }
            })
        };
        to.layout
            .play(enter, settled(ctx.clone(), Rc::clone(&remaining)));
        from.layout.play(exit, settled(ctx.clone(), remaining));
    }

    fn name(&self) -> &str {
        match self.direction {
            MotionDirection::Forward => "motion",
            MotionDirection::Pop => "motion-pop",
        }
    }
}
