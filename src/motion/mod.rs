//! Motion-layout navigation.
//!
//! Each destination is a motion layout that carries its own scenes for the
//! four navigation roles. Only the enter scene has to be configured; the
//! others are inferred when the graph is built (see [`SceneSpec::resolve`]),
//! so a broken destination fails at configuration time rather than on the
//! first navigation.
//!
//! # Example
//!
//! ```rust
//! use viewnav::builder::GraphBuilder;
//! use viewnav::host::AnimationListener;
//! use viewnav::motion::{self, MotionLayout, SceneRef, SceneSpec};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Layout(&'static str);
//!
//! impl MotionLayout for Layout {
//!     fn play(&self, _scene: &SceneRef, listener: AnimationListener) {
//!         listener.ended();
//!     }
//! }
//!
//! let graph = GraphBuilder::new()
//!     .destination(motion::destination("home", SceneSpec::new().enter("fade"), || Layout("home")))
//!     .start("home")
//!     .build();
//! assert!(graph.is_ok());
//! ```

mod scenes;
mod transition;

pub use scenes::{SceneId, SceneRef, SceneSet, SceneSpec};
pub use transition::{MotionDirection, MotionLayout, MotionScreen, MotionTransition};

use crate::builder::DestinationBuilder;
use crate::core::DestinationId;
use crate::transition::DefaultTransitions;
use std::rc::Rc;

/// A graph destination backed by a motion layout.
///
/// The scenes are resolved immediately. A missing enter scene is recorded on
/// the builder and reported when the graph is built.
pub fn destination<L, F>(
    id: impl Into<DestinationId>,
    spec: SceneSpec,
    layout: F,
) -> DestinationBuilder<MotionScreen<L>>
where
    L: MotionLayout,
    F: Fn() -> L + 'static,
{
    let builder = DestinationBuilder::new(id);
    match spec.resolve(builder.id()) {
        Ok(scenes) => {
            let scenes = Rc::new(scenes);
            builder
                .screen(move || MotionScreen::new(layout(), Rc::clone(&scenes)))
                .default_transitions(DefaultTransitions::with_pop(
                    Rc::new(MotionTransition::forward()),
                    Rc::new(MotionTransition::pop()),
                ))
        }
        Err(error) => builder.reject(error),
    }
}
