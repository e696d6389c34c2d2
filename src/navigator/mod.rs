//! The navigation controller and its collaborators.
//!
//! A [`Navigator`] owns the back-stack, the destinations it created and the
//! pop transitions remembered per push. It accepts `navigate` and
//! `pop_back_stack` requests, rejects the ones that would race a running
//! transition, and drives a resolved transition for every accepted one.

mod binding;
mod controller;
mod error;
mod registry;

pub use binding::DispatcherBinding;
pub use controller::{NavigateOutcome, Navigator, SharedNavigator};
pub use error::NavigationError;
pub use registry::PopTransitionRegistry;
