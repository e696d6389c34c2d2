//! Viewnav: a back-stack navigation engine for animated screen hand-offs
//!
//! Viewnav keeps a stack of screens and plays a transition between the
//! visible screen and the next one on every push and pop. It decides which
//! transition to play from a layered set of overrides and defaults, rejects
//! navigation that would race a running animation, and releases the screen
//! that left only after its animation has actually finished.
//!
//! Rendering, layout and animation belong to the host. The engine drives them
//! through narrow traits in [`host`] and ships in-memory implementations for
//! headless use and tests.
//!
//! # Core Concepts
//!
//! - **Destination**: a stack entry owning a lazily created screen handle
//! - **Transition**: an animated or instant hand-off between two handles
//! - **Navigator**: owns the back-stack and runs a transition per navigation
//! - **Motion**: destinations that carry their own reversible scenes
//!
//! # Example
//!
//! ```rust
//! use viewnav::builder::{DestinationBuilder, GraphBuilder, NavigatorBuilder};
//! use viewnav::host::{Container, Looper, MemoryContainer};
//! use std::rc::Rc;
//!
//! let graph = GraphBuilder::new()
//!     .destination(DestinationBuilder::new("home").screen(|| "home"))
//!     .destination(DestinationBuilder::new("details").screen(|| "details"))
//!     .start("home")
//!     .build()
//!     .unwrap();
//!
//! let container = Rc::new(MemoryContainer::new());
//! let shared: Rc<dyn Container<&str>> = container.clone();
//! let looper = Looper::new();
//! let mut navigator = NavigatorBuilder::new()
//!     .container(shared)
//!     .graph(graph)
//!     .looper(looper.clone())
//!     .build()
//!     .unwrap();
//!
//! navigator.start().unwrap();
//! navigator.navigate("details", None).unwrap();
//! looper.run_until_idle();
//! assert_eq!(container.children(), vec!["details"]);
//!
//! assert!(navigator.pop_back_stack());
//! looper.run_until_idle();
//! assert_eq!(container.children(), vec!["home"]);
//! assert!(!navigator.pop_back_stack());
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod host;
pub mod motion;
pub mod navigator;
pub mod transition;

// Re-export commonly used types
pub use builder::{BuildError, DestinationBuilder, GraphBuilder, NavigatorBuilder};
pub use checkpoint::NavigationState;
pub use core::{DestinationId, Rejection, Screen};
pub use navigator::{NavigateOutcome, NavigationError, Navigator, SharedNavigator};
pub use transition::{Transition, TransitionPair};
