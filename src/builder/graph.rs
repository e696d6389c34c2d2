//! Builders for destinations and the graph that provides them.

use crate::builder::error::BuildError;
use crate::core::{DestinationId, Screen, ScreenFactory};
use crate::transition::DefaultTransitions;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::rc::Rc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Everything a navigator needs to create a destination.
pub struct DestinationSpec<H: Screen> {
    pub factory: ScreenFactory<H>,
    pub defaults: Option<DefaultTransitions<H>>,
}

impl<H: Screen> Clone for DestinationSpec<H> {
    fn clone(&self) -> Self {
        Self {
            factory: Rc::clone(&self.factory),
            defaults: self.defaults.clone(),
        }
    }
}

impl<H: Screen> fmt::Debug for DestinationSpec<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DestinationSpec")
            .field("defaults", &self.defaults)
            .finish()
    }
}

/// Source of destinations for a navigator.
///
/// The navigator asks for each destination at most once and keeps what it
/// creates for the rest of its lifetime.
pub trait DestinationProvider<H: Screen> {
    /// The destination shown first.
    fn start(&self) -> &DestinationId;

    /// The factory and defaults for `id`, or `None` if the id is unknown.
    fn provide(&self, id: &DestinationId) -> Option<DestinationSpec<H>>;
}

/// Fluent builder for a single destination.
pub struct DestinationBuilder<H: Screen> {
    id: DestinationId,
    factory: Option<ScreenFactory<H>>,
    defaults: Option<DefaultTransitions<H>>,
    problems: Vec<BuildError>,
}

impl<H: Screen> DestinationBuilder<H> {
    pub fn new(id: impl Into<DestinationId>) -> Self {
        Self {
            id: id.into(),
            factory: None,
            defaults: None,
            problems: Vec::new(),
        }
    }

    pub fn id(&self) -> &DestinationId {
        &self.id
    }

    /// Create the handle lazily, on first navigation.
    pub fn screen(mut self, factory: impl Fn() -> H + 'static) -> Self {
        self.factory = Some(Rc::new(factory));
        self
    }

    /// Use an already created handle.
    pub fn handle(self, handle: H) -> Self {
        self.screen(move || handle.clone())
    }

    /// Enter and pop-enter transitions used when a navigation supplies none.
    pub fn default_transitions(mut self, defaults: DefaultTransitions<H>) -> Self {
        self.defaults = Some(defaults);
        self
    }

    pub fn defaults(&self) -> Option<&DefaultTransitions<H>> {
        self.defaults.as_ref()
    }

    /// Record a configuration problem found while building the destination.
    pub(crate) fn reject(mut self, problem: BuildError) -> Self {
        self.problems.push(problem);
        self
    }

    fn validate(&self) -> Validation<(), NonEmptyVec<BuildError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<BuildError>>> = self
            .problems
            .iter()
            .cloned()
            .map(|problem| Validation::fail(problem))
            .collect();

        // A destination rejected for its scenes has no screen by construction.
        if self.factory.is_none() && self.problems.is_empty() {
            checks.push(Validation::fail(BuildError::MissingScreen {
                destination: self.id.clone(),
            }));
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

impl<H: Screen> fmt::Debug for DestinationBuilder<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DestinationBuilder")
            .field("id", &self.id)
            .field("has_screen", &self.factory.is_some())
            .field("defaults", &self.defaults)
            .field("problems", &self.problems)
            .finish()
    }
}

/// Fluent builder for a [`DestinationGraph`].
///
/// `build` reports every configuration problem at once.
///
/// # Example
///
/// ```rust
/// use viewnav::builder::{DestinationBuilder, GraphBuilder};
/// use viewnav::core::DestinationId;
///
/// let graph = GraphBuilder::new()
///     .destination(DestinationBuilder::new("home").handle("home-screen"))
///     .destination(DestinationBuilder::new("details").screen(|| "details-screen"))
///     .start("home")
///     .build()
///     .unwrap();
///
/// assert_eq!(graph.len(), 2);
/// assert!(graph.contains(&DestinationId::from("details")));
/// ```
pub struct GraphBuilder<H: Screen> {
    destinations: Vec<DestinationBuilder<H>>,
    start: Option<DestinationId>,
}

impl<H: Screen> GraphBuilder<H> {
    pub fn new() -> Self {
        Self {
            destinations: Vec::new(),
            start: None,
        }
    }

    /// Add a destination.
    pub fn destination(mut self, destination: DestinationBuilder<H>) -> Self {
        self.destinations.push(destination);
        self
    }

    /// Set the start destination (required).
    pub fn start(mut self, id: impl Into<DestinationId>) -> Self {
        self.start = Some(id.into());
        self
    }

    /// Validate the configuration and build the graph.
    pub fn build(self) -> Result<DestinationGraph<H>, BuildError> {
        if let Validation::Failure(errors) = self.validate() {
            let mut problems: Vec<BuildError> = errors.iter().cloned().collect();
            tracing::debug!(problems = problems.len(), "destination graph rejected");
            return Err(if problems.len() == 1 {
                problems.remove(0)
            } else {
                BuildError::Invalid(problems)
            });
        }
        let start = self
            .start
            .clone()
            .ok_or(BuildError::MissingStartDestination)?;
        Ok(self.assemble(start))
    }

    fn validate(&self) -> Validation<(), NonEmptyVec<BuildError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<BuildError>>> =
            self.destinations.iter().map(DestinationBuilder::validate).collect();

        let mut seen = HashSet::new();
        for destination in &self.destinations {
            if !seen.insert(destination.id()) {
                checks.push(Validation::fail(BuildError::DuplicateDestination {
                    destination: destination.id().clone(),
                }));
            }
        }

        checks.push(match &self.start {
            None => Validation::fail(BuildError::MissingStartDestination),
            Some(start) if !seen.contains(start) => {
                Validation::fail(BuildError::UnknownStartDestination {
                    destination: start.clone(),
                })
            }
            Some(_) => Validation::success(()),
        });

        Validation::all_vec(checks).map(|_| ())
    }

    fn assemble(self, start: DestinationId) -> DestinationGraph<H> {
        let mut order = Vec::with_capacity(self.destinations.len());
        let mut specs = HashMap::with_capacity(self.destinations.len());
        for destination in self.destinations {
            if let Some(factory) = destination.factory {
                order.push(destination.id.clone());
                specs.insert(
                    destination.id,
                    DestinationSpec {
                        factory,
                        defaults: destination.defaults,
                    },
                );
            }
        }
        DestinationGraph {
            start,
            order,
            specs,
        }
    }
}

impl<H: Screen> Default for GraphBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// A validated set of destinations with a start destination.
pub struct DestinationGraph<H: Screen> {
    start: DestinationId,
    order: Vec<DestinationId>,
    specs: HashMap<DestinationId, DestinationSpec<H>>,
}

impl<H: Screen> DestinationGraph<H> {
    /// Destination ids in declaration order.
    pub fn ids(&self) -> &[DestinationId] {
        &self.order
    }

    pub fn contains(&self, id: &DestinationId) -> bool {
        self.specs.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<H: Screen> DestinationProvider<H> for DestinationGraph<H> {
    fn start(&self) -> &DestinationId {
        &self.start
    }

    fn provide(&self, id: &DestinationId) -> Option<DestinationSpec<H>> {
        self.specs.get(id).cloned()
    }
}

impl<H: Screen> fmt::Debug for DestinationGraph<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DestinationGraph")
            .field("start", &self.start)
            .field("destinations", &self.order)
            .finish()
    }
}
