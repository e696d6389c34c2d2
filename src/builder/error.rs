//! Configuration errors raised while building graphs and navigators.

use crate::core::DestinationId;
use thiserror::Error;

/// Errors that can occur when building a destination graph or a navigator.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Container not specified. Call .container(container) before .build()")]
    MissingContainer,

    #[error("Destination graph not specified. Call .graph(graph) before .build()")]
    MissingGraph,

    #[error("Destination '{destination}' has no screen. Call .screen(factory) or .handle(handle)")]
    MissingScreen { destination: DestinationId },

    #[error("Destination '{destination}' is declared more than once")]
    DuplicateDestination { destination: DestinationId },

    #[error("Start destination not specified. Call .start(id) before .build()")]
    MissingStartDestination,

    #[error("Start destination '{destination}' is not part of the graph")]
    UnknownStartDestination { destination: DestinationId },

    #[error("Destination '{destination}' requires an enter scene")]
    MissingEnterScene { destination: DestinationId },

    #[error("Invalid configuration ({} problems): {}", .0.len(), summarize(.0))]
    Invalid(Vec<BuildError>),
}

impl BuildError {
    /// Every individual problem carried by this error.
    pub fn problems(&self) -> Vec<&BuildError> {
        match self {
            Self::Invalid(errors) => errors.iter().flat_map(BuildError::problems).collect(),
            other => vec![other],
        }
    }
}

fn summarize(errors: &[BuildError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
