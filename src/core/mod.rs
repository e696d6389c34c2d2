//! Core navigation types.
//!
//! This module contains the data model of the engine:
//! - Screen handles via the `Screen` marker trait
//! - Destinations and their stable ids
//! - The back-stack and its entries
//! - Re-entrancy guards
//! - Navigation history
//!
//! Nothing here drives a transition; the navigator composes these pieces.

mod destination;
pub mod guard;
mod history;
mod screen;
mod stack;

pub use destination::{Destination, DestinationId, ScreenFactory};
pub use guard::Rejection;
pub use history::{NavigationHistory, NavigationKind, NavigationRecord};
pub use screen::Screen;
pub use stack::{BackStack, StackEntry};
