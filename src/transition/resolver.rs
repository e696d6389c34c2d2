//! Picks the transition to run for a navigation event.

use super::{DefaultTransitions, NoTransition, SharedTransition};
use crate::core::Screen;
use std::fmt;
use std::rc::Rc;

/// Resolves enter and pop transitions through a fixed precedence chain.
///
/// For both directions the first available of these wins:
/// 1. the transition supplied for this event (override or registry entry)
/// 2. the destination's own default
/// 3. the navigator-wide fallback
/// 4. [`NoTransition`]
///
/// The pop fallback defaults to the enter fallback when not set separately.
pub struct TransitionResolver<H: Screen> {
    fallback: Option<SharedTransition<H>>,
    fallback_pop: Option<SharedTransition<H>>,
    no_transition: SharedTransition<H>,
}

impl<H: Screen> TransitionResolver<H> {
    pub fn new(
        fallback: Option<SharedTransition<H>>,
        fallback_pop: Option<SharedTransition<H>>,
    ) -> Self {
        Self {
            fallback,
            fallback_pop,
            no_transition: Rc::new(NoTransition),
        }
    }

    /// Transition for a push onto a destination with `defaults`.
    pub fn resolve_enter(
        &self,
        explicit: Option<&SharedTransition<H>>,
        defaults: Option<&DefaultTransitions<H>>,
    ) -> SharedTransition<H> {
        explicit
            .or_else(|| defaults.map(|d| &d.enter))
            .or(self.fallback.as_ref())
            .map_or_else(|| Rc::clone(&self.no_transition), Rc::clone)
    }

    /// Transition for a pop revealing a destination with `defaults`.
    pub fn resolve_pop(
        &self,
        registered: Option<SharedTransition<H>>,
        defaults: Option<&DefaultTransitions<H>>,
    ) -> SharedTransition<H> {
        registered
            .or_else(|| defaults.map(|d| Rc::clone(&d.pop_enter)))
            .or_else(|| self.fallback_pop.clone())
            .or_else(|| self.fallback.clone())
            .unwrap_or_else(|| Rc::clone(&self.no_transition))
    }
}

impl<H: Screen> Default for TransitionResolver<H> {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl<H: Screen> fmt::Debug for TransitionResolver<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionResolver")
            .field("fallback", &self.fallback.as_ref().map(|t| t.name().to_string()))
            .field(
                "fallback_pop",
                &self.fallback_pop.as_ref().map(|t| t.name().to_string()),
            )
            .finish()
    }
}
