//! Back-stack destinations and their identities.

use super::screen::Screen;
use crate::host::Container;
use crate::transition::DefaultTransitions;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Stable identity of a destination, assigned by the owning graph.
///
/// Graphs built from numeric resource ids and graphs built from route names
/// share the same representation.
///
/// # Example
///
/// ```rust
/// use viewnav::core::DestinationId;
///
/// let home = DestinationId::from("home");
/// let numeric = DestinationId::from(42u32);
///
/// assert_eq!(home.as_str(), "home");
/// assert_eq!(numeric.to_string(), "42");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DestinationId(String);

impl DestinationId {
    /// Create an id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DestinationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for DestinationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u32> for DestinationId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl From<&DestinationId> for DestinationId {
    fn from(id: &DestinationId) -> Self {
        id.clone()
    }
}

/// Factory producing a destination's screen handle.
pub type ScreenFactory<H> = Rc<dyn Fn() -> H>;

/// One entry of the navigation graph, referenced by back-stack entries.
///
/// The destination exclusively owns its handle. The handle is created by the
/// factory the first time the destination is navigated to and is then
/// retained for the destination's lifetime, so popping back to a destination
/// re-attaches the very same handle.
pub struct Destination<H: Screen> {
    id: DestinationId,
    factory: ScreenFactory<H>,
    handle: Option<H>,
    defaults: Option<DefaultTransitions<H>>,
    in_transition: Rc<Cell<bool>>,
    epoch: Rc<Cell<u64>>,
}

impl<H: Screen> Destination<H> {
    /// Create a destination whose handle has not been materialized yet.
    pub fn new(
        id: DestinationId,
        factory: ScreenFactory<H>,
        defaults: Option<DefaultTransitions<H>>,
    ) -> Self {
        Self {
            id,
            factory,
            handle: None,
            defaults,
            in_transition: Rc::new(Cell::new(false)),
            epoch: Rc::new(Cell::new(0)),
        }
    }

    pub fn id(&self) -> &DestinationId {
        &self.id
    }

    /// The handle, if it has been materialized.
    pub fn handle(&self) -> Option<&H> {
        self.handle.as_ref()
    }

    /// Return the handle, invoking the factory on first use.
    pub fn materialize(&mut self) -> &H {
        let id = &self.id;
        let factory = &self.factory;
        self.handle.get_or_insert_with(|| {
            tracing::trace!(destination = %id, "creating screen handle");
            factory()
        })
    }

    /// Default transitions configured for this destination.
    pub fn defaults(&self) -> Option<&DefaultTransitions<H>> {
        self.defaults.as_ref()
    }

    /// Whether a transition currently has this destination as a participant.
    pub fn is_in_transition(&self) -> bool {
        self.in_transition.get()
    }

    /// Whether the handle is materialized and currently attached to `container`.
    pub fn is_active(&self, container: &dyn Container<H>) -> bool {
        self.handle.as_ref().is_some_and(|h| container.contains(h))
    }

    pub(crate) fn in_transition_flag(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.in_transition)
    }

    pub(crate) fn epoch(&self) -> Rc<Cell<u64>> {
        Rc::clone(&self.epoch)
    }

    /// Mark the start of a hand-off that brings this destination into view.
    ///
    /// Any detach scheduled against an older epoch is dropped.
    pub(crate) fn begin_entering(&self) {
        self.epoch.set(self.epoch.get().wrapping_add(1));
    }
}

impl<H: Screen> fmt::Debug for Destination<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Destination")
            .field("id", &self.id)
            .field("handle", &self.handle)
            .field("has_defaults", &self.defaults.is_some())
            .field("in_transition", &self.in_transition.get())
            .finish()
    }
}
