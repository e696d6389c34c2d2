//! Re-entrancy guards for navigation requests.
//!
//! Guards are pure checks evaluated before the navigator mutates anything.
//! A failed check is an expected outcome under rapid input, so it is reported
//! as a [`Rejection`] value rather than an error.

use super::destination::Destination;
use super::screen::Screen;
use crate::host::Container;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a navigation request was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// The target is already participating in a running transition.
    InTransition,
    /// The target's handle is already attached to the container.
    AlreadyAttached,
    /// The stack has nothing below the visible destination.
    NothingToPop,
    /// The destination a pop would reveal is still transitioning.
    TargetInTransition,
    /// The visible destination is still leaving or entering.
    CurrentInTransition,
    /// The start destination was already pushed.
    AlreadyStarted,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::InTransition => "target is in transition",
            Self::AlreadyAttached => "target is already attached",
            Self::NothingToPop => "nothing to pop",
            Self::TargetInTransition => "revealed destination is in transition",
            Self::CurrentInTransition => "visible destination is in transition",
            Self::AlreadyStarted => "navigator already started",
        };
        f.write_str(reason)
    }
}

/// Check whether `target` may be navigated to from `current`.
///
/// The in-transition flag blocks a second navigation while the target's
/// enter animation runs. The attachment check blocks it once the handle has
/// been placed, whatever the state of the flags. A destination takes part in
/// one transition at a time, so a still-moving `current` blocks as well.
pub fn check_navigate<H: Screen>(
    target: &Destination<H>,
    current: Option<&Destination<H>>,
    container: &dyn Container<H>,
) -> Result<(), Rejection> {
    if target.is_in_transition() {
        return Err(Rejection::InTransition);
    }
    if target.is_active(container) {
        return Err(Rejection::AlreadyAttached);
    }
    if current.is_some_and(Destination::is_in_transition) {
        return Err(Rejection::CurrentInTransition);
    }
    Ok(())
}

/// Check whether the stack may be popped.
///
/// `top` is the visible destination and `revealed` the one below it.
pub fn check_pop<H: Screen>(
    depth: usize,
    top: Option<&Destination<H>>,
    revealed: Option<&Destination<H>>,
) -> Result<(), Rejection> {
    let Some(revealed) = revealed.filter(|_| depth >= 2) else {
        return Err(Rejection::NothingToPop);
    };
    if revealed.is_in_transition() {
        return Err(Rejection::TargetInTransition);
    }
    if top.is_some_and(Destination::is_in_transition) {
        return Err(Rejection::CurrentInTransition);
    }
    Ok(())
}
