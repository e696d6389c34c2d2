//! Contracts for the host collaborators the engine drives.
//!
//! The engine does not render, lay out or animate anything itself. It talks
//! to the host through a few narrow traits:
//!
//! - [`Container`]: the shared surface handles are attached to
//! - [`Animation`] and [`LayoutTransition`]: the host animation subsystem
//! - [`BackPressBinding`]: notice of when back-presses can be consumed
//!
//! Alongside the traits live in-memory implementations ([`MemoryContainer`],
//! [`ManualClock`], [`NextTurn`], [`BackPressDispatcher`]) and the [`Looper`]
//! that models the single control thread. Headless hosts and the test suite run on these.

mod animation;
mod back_press;
mod clock;
mod container;
mod looper;
mod next_turn;

pub use animation::{Animation, AnimationListener, LayoutTransition};
pub use back_press::{BackPressBinding, BackPressDispatcher, CallbackId};
pub use clock::{ManualClock, TimedAnimation};
pub use container::{Container, ContainerEvent, MemoryContainer};
pub use looper::Looper;
pub use next_turn::NextTurn;
