//! Builder for constructing navigators.

use crate::builder::error::BuildError;
use crate::builder::graph::DestinationProvider;
use crate::core::Screen;
use crate::host::{BackPressBinding, BackPressDispatcher, Container, Looper};
use crate::navigator::{DispatcherBinding, Navigator, SharedNavigator};
use crate::transition::{DispatchEvent, DispatchObserver, SharedTransition, TransitionResolver};
use std::cell::RefCell;
use std::rc::Rc;

/// Builder for a [`Navigator`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use viewnav::builder::{DestinationBuilder, GraphBuilder, NavigatorBuilder};
/// use viewnav::host::{Container, MemoryContainer};
/// use std::rc::Rc;
///
/// let graph = GraphBuilder::new()
///     .destination(DestinationBuilder::new("home").handle("home"))
///     .destination(DestinationBuilder::new("details").handle("details"))
///     .start("home")
///     .build()
///     .unwrap();
///
/// let container = Rc::new(MemoryContainer::new());
/// let shared: Rc<dyn Container<&str>> = container.clone();
/// let mut navigator = NavigatorBuilder::new()
///     .container(shared)
///     .graph(graph)
///     .build()
///     .unwrap();
///
/// navigator.start().unwrap();
/// navigator.navigate("details", None).unwrap();
/// assert_eq!(navigator.depth(), 2);
/// assert_eq!(container.children(), vec!["details"]);
/// ```
pub struct NavigatorBuilder<H: Screen> {
    container: Option<Rc<dyn Container<H>>>,
    graph: Option<Box<dyn DestinationProvider<H>>>,
    looper: Option<Looper>,
    fallback: Option<SharedTransition<H>>,
    fallback_pop: Option<SharedTransition<H>>,
    back_press: Option<Box<dyn BackPressBinding>>,
    observer: Option<DispatchObserver>,
}

impl<H: Screen> NavigatorBuilder<H> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            container: None,
            graph: None,
            looper: None,
            fallback: None,
            fallback_pop: None,
            back_press: None,
            observer: None,
        }
    }

    /// Set the container screens are attached to (required).
    pub fn container(mut self, container: Rc<dyn Container<H>>) -> Self {
        self.container = Some(container);
        self
    }

    /// Set the destination source (required).
    pub fn graph(mut self, graph: impl DestinationProvider<H> + 'static) -> Self {
        self.graph = Some(Box::new(graph));
        self
    }

    /// Control loop used for deferred work. Defaults to a fresh looper.
    pub fn looper(mut self, looper: Looper) -> Self {
        self.looper = Some(looper);
        self
    }

    /// Transition used when neither the call nor the destination supplies one.
    pub fn fallback(mut self, transition: SharedTransition<H>) -> Self {
        self.fallback = Some(transition);
        self
    }

    /// Pop transition used when neither the push nor the revealed destination
    /// supplies one. Defaults to the enter fallback.
    pub fn fallback_pop(mut self, transition: SharedTransition<H>) -> Self {
        self.fallback_pop = Some(transition);
        self
    }

    /// Binding told when the navigator starts and stops consuming back-presses.
    pub fn back_press(mut self, binding: impl BackPressBinding + 'static) -> Self {
        self.back_press = Some(Box::new(binding));
        self
    }

    /// Observe the start and end of every transition dispatch.
    pub fn on_dispatch(mut self, observer: impl Fn(&DispatchEvent) + 'static) -> Self {
        self.observer = Some(Rc::new(observer));
        self
    }

    /// Build the navigator.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Navigator<H>, BuildError> {
        let container = self.container.ok_or(BuildError::MissingContainer)?;
        let graph = self.graph.ok_or(BuildError::MissingGraph)?;

        let mut navigator = Navigator::new(
            container,
            graph,
            self.looper.unwrap_or_default(),
            TransitionResolver::new(self.fallback, self.fallback_pop),
            self.observer,
        );
        if let Some(binding) = self.back_press {
            navigator.set_back_press(binding);
        }
        Ok(navigator)
    }

    /// Build a shared navigator whose back-presses arrive through `dispatcher`.
    ///
    /// Replaces any binding set with [`back_press`](Self::back_press).
    pub fn build_shared(
        mut self,
        dispatcher: &BackPressDispatcher,
    ) -> Result<SharedNavigator<H>, BuildError> {
        self.back_press = None;
        let navigator = self.build()?;
        let shared = Rc::new(RefCell::new(navigator));
        let binding = DispatcherBinding::new(dispatcher.clone(), Rc::downgrade(&shared));
        shared.borrow_mut().set_back_press(Box::new(binding));
        Ok(shared)
    }
}

impl<H: Screen> Default for NavigatorBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}
