//! Builder API for graphs and navigators.
//!
//! Configuration is validated when it is built, not when it is first used:
//! a graph with missing screens, duplicate ids or a bad start destination
//! fails at `build()` and reports every problem at once.

pub mod error;
pub mod graph;
pub mod navigator;

pub use error::BuildError;
pub use graph::{
    DestinationBuilder, DestinationGraph, DestinationProvider, DestinationSpec, GraphBuilder,
};
pub use navigator::NavigatorBuilder;

use crate::core::{DestinationId, Screen};

/// A graph of destinations with fixed handles, starting at the first one.
///
/// # Example
///
/// ```
/// use viewnav::builder::{simple_graph, DestinationProvider};
///
/// let graph = simple_graph([("home", "home-screen"), ("details", "details-screen")]).unwrap();
/// assert_eq!(graph.start().as_str(), "home");
/// ```
pub fn simple_graph<H, I, K>(destinations: I) -> Result<DestinationGraph<H>, BuildError>
where
    H: Screen,
    I: IntoIterator<Item = (K, H)>,
    K: Into<DestinationId>,
{
    let mut builder = GraphBuilder::new();
    let mut start = None;
    for (id, handle) in destinations {
        let id = id.into();
        start.get_or_insert_with(|| id.clone());
        builder = builder.destination(DestinationBuilder::new(id).handle(handle));
    }
    match start {
        Some(start) => builder.start(start).build(),
        None => builder.build(),
    }
}
