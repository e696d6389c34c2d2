//! The navigation controller.

use super::error::NavigationError;
use super::registry::PopTransitionRegistry;
use crate::builder::DestinationProvider;
use crate::checkpoint::{CheckpointError, NavigationState};
use crate::core::guard::{check_navigate, check_pop};
use crate::core::{
    BackStack, Destination, DestinationId, NavigationHistory, NavigationKind, NavigationRecord,
    Rejection, Screen,
};
use crate::host::{BackPressBinding, Container, Looper};
use crate::transition::{
    DispatchObserver, SharedTransition, TransitionContext, TransitionPair, TransitionResolver,
};
use chrono::Utc;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Both participants of one hand-off, resolved before the stack changes.
struct Handoff<H: Screen> {
    from_id: DestinationId,
    to_id: DestinationId,
    from: H,
    to: H,
    ctx: TransitionContext,
}

/// Result of an accepted or ignored navigation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigateOutcome {
    /// The destination was pushed and its enter transition started.
    Navigated(DestinationId),
    /// The request was dropped without touching the stack.
    Ignored(Rejection),
}

impl NavigateOutcome {
    pub fn is_navigated(&self) -> bool {
        matches!(self, Self::Navigated(_))
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Navigated(_) => None,
            Self::Ignored(rejection) => Some(*rejection),
        }
    }
}

/// A navigator shared with host callbacks.
pub type SharedNavigator<H> = Rc<RefCell<Navigator<H>>>;

/// Owns the back-stack and drives a transition for every accepted
/// navigation.
///
/// Calls return immediately. Transitions finish later, from the host's
/// animation callbacks, and the handle that left the screen is detached on
/// the next turn of the [`Looper`] after its transition ended.
///
/// Dispatch observers and animation callbacks must not call back into a
/// navigator that is already borrowed.
pub struct Navigator<H: Screen> {
    container: Rc<dyn Container<H>>,
    graph: Box<dyn DestinationProvider<H>>,
    looper: Looper,
    resolver: TransitionResolver<H>,
    destinations: HashMap<DestinationId, Destination<H>>,
    stack: BackStack,
    registry: PopTransitionRegistry<H>,
    history: NavigationHistory,
    observer: Option<DispatchObserver>,
    back_press: Option<Box<dyn BackPressBinding>>,
    back_press_bound: bool,
}

impl<H: Screen> Navigator<H> {
    pub(crate) fn new(
        container: Rc<dyn Container<H>>,
        graph: Box<dyn DestinationProvider<H>>,
        looper: Looper,
        resolver: TransitionResolver<H>,
        observer: Option<DispatchObserver>,
    ) -> Self {
        Self {
            container,
            graph,
            looper,
            resolver,
            destinations: HashMap::new(),
            stack: BackStack::new(),
            registry: PopTransitionRegistry::new(),
            history: NavigationHistory::new(),
            observer,
            back_press: None,
            back_press_bound: false,
        }
    }

    pub(crate) fn set_back_press(&mut self, binding: Box<dyn BackPressBinding>) {
        self.back_press = Some(binding);
        self.back_press_bound = false;
        self.sync_back_press();
    }

    /// Show the graph's start destination.
    pub fn start(&mut self) -> Result<NavigateOutcome, NavigationError> {
        if !self.stack.is_empty() {
            return Ok(NavigateOutcome::Ignored(Rejection::AlreadyStarted));
        }
        let start = self.graph.start().clone();
        self.navigate(start, None)
    }

    /// Push `id` and run its enter transition.
    ///
    /// `transitions` overrides the destination defaults for this call; its
    /// pop transition is remembered for the pop of this very push. The first
    /// destination is attached without a transition.
    pub fn navigate(
        &mut self,
        id: impl Into<DestinationId>,
        transitions: Option<TransitionPair<H>>,
    ) -> Result<NavigateOutcome, NavigationError> {
        let id = id.into();
        self.ensure_destination(&id)?;

        let previous = self.stack.peek().map(|entry| entry.destination.clone());
        let verdict = check_navigate(
            self.known(&id)?,
            previous.as_ref().and_then(|p| self.destinations.get(p)),
            self.container.as_ref(),
        );
        if let Err(rejection) = verdict {
            tracing::debug!(destination = %id, %rejection, "navigation ignored");
            return Ok(NavigateOutcome::Ignored(rejection));
        }

        let handle = self.materialize(&id)?.clone();
        // Everything that can fail happens before the stack changes.
        let planned = match previous {
            None => {
                self.known(&id)?.begin_entering();
                None
            }
            Some(previous) => {
                let (explicit, pop_transition) = match transitions {
                    Some(pair) => (Some(pair.transition), Some(pair.pop_transition)),
                    None => (None, None),
                };
                let transition = self
                    .resolver
                    .resolve_enter(explicit.as_ref(), self.known(&id)?.defaults());
                let handoff = self.prepare_handoff(&previous, &id)?;
                Some((handoff, transition, pop_transition))
            }
        };

        let entry = self.stack.push(id.clone());
        match planned {
            None => {
                self.container.attach(&handle);
                self.record(NavigationKind::Push, None, &id, "none");
            }
            Some((handoff, transition, pop_transition)) => {
                if let Some(pop_transition) = pop_transition {
                    self.registry.record(&entry, &handoff.from_id, pop_transition);
                }
                self.run_handoff(handoff, transition, NavigationKind::Push);
            }
        }

        tracing::debug!(destination = %id, depth = self.stack.depth(), "navigated");
        self.sync_back_press();
        Ok(NavigateOutcome::Navigated(id))
    }

    /// Pop the visible destination and run the pop transition.
    ///
    /// Returns `false` without mutating anything when there is nothing to
    /// return to or a participant is still transitioning.
    pub fn pop_back_stack(&mut self) -> bool {
        let top = self.stack.peek().and_then(|e| self.destinations.get(&e.destination));
        let revealed = self
            .stack
            .peek_second()
            .and_then(|e| self.destinations.get(&e.destination));
        if let Err(rejection) = check_pop(self.stack.depth(), top, revealed) {
            tracing::debug!(%rejection, "pop ignored");
            return false;
        }

        let (Some(popped), Some(revealed)) = (
            self.stack.peek().cloned(),
            self.stack.peek_second().map(|e| e.destination.clone()),
        ) else {
            return false;
        };
        let handoff = match self.prepare_handoff(&popped.destination, &revealed) {
            Ok(handoff) => handoff,
            Err(error) => {
                tracing::warn!(%error, "pop transition could not be prepared");
                return false;
            }
        };

        self.stack.pop();
        let registered = self.registry.take(&popped, &revealed);
        let transition = self.resolver.resolve_pop(
            registered,
            self.destinations.get(&revealed).and_then(Destination::defaults),
        );
        self.run_handoff(handoff, transition, NavigationKind::Pop);

        tracing::debug!(
            popped = %popped.destination,
            destination = %revealed,
            depth = self.stack.depth(),
            "popped"
        );
        self.sync_back_press();
        true
    }

    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// The visible destination.
    pub fn current(&self) -> Option<&DestinationId> {
        self.stack.peek().map(|entry| &entry.destination)
    }

    /// Stack ids, visible destination first.
    pub fn stack_ids(&self) -> Vec<DestinationId> {
        self.stack.ids()
    }

    /// Whether `id` currently takes part in a transition.
    pub fn is_in_transition(&self, id: &DestinationId) -> bool {
        self.destinations
            .get(id)
            .is_some_and(Destination::is_in_transition)
    }

    /// Whether any destination takes part in a transition.
    pub fn is_transitioning(&self) -> bool {
        self.destinations.values().any(Destination::is_in_transition)
    }

    /// A destination created by this navigator.
    pub fn destination(&self, id: &DestinationId) -> Option<&Destination<H>> {
        self.destinations.get(id)
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    pub fn container(&self) -> &Rc<dyn Container<H>> {
        &self.container
    }

    pub fn looper(&self) -> &Looper {
        &self.looper
    }

    /// Pop transitions still waiting for their push to be popped.
    pub fn pending_pop_transitions(&self) -> usize {
        self.registry.len()
    }

    /// Snapshot the back-stack.
    pub fn save_state(&self) -> Result<NavigationState, NavigationError> {
        if self.stack.is_empty() {
            return Err(CheckpointError::EmptyStack.into());
        }
        Ok(NavigationState::new(self.stack.ids()))
    }

    /// Replace the back-stack with `state` and show its top without a
    /// transition.
    ///
    /// Remembered pop transitions are dropped. Nothing changes if the state
    /// is invalid, names an unknown destination or a transition is running.
    pub fn restore_state(&mut self, state: &NavigationState) -> Result<(), NavigationError> {
        state.validate()?;
        if self.is_transitioning() {
            return Err(NavigationError::TransitionInFlight);
        }
        for id in &state.stack {
            self.ensure_destination(id)?;
        }

        let attached: Vec<H> = self
            .destinations
            .values()
            .filter_map(Destination::handle)
            .filter(|handle| self.container.contains(handle))
            .cloned()
            .collect();
        for handle in &attached {
            self.container.detach(handle);
        }

        let previous = self.current().cloned();
        self.stack.clear();
        self.registry.clear();
        for id in state.stack.iter().rev() {
            self.stack.push(id.clone());
        }

        if let Some(top) = state.top() {
            let handle = self.materialize(top)?.clone();
            self.known(top)?.begin_entering();
            self.container.attach(&handle);
            self.record(NavigationKind::Restore, previous, top, "none");
        }

        tracing::debug!(snapshot = %state.id, depth = self.stack.depth(), "state restored");
        self.sync_back_press();
        Ok(())
    }

    fn ensure_destination(&mut self, id: &DestinationId) -> Result<(), NavigationError> {
        if self.destinations.contains_key(id) {
            return Ok(());
        }
        let spec = self
            .graph
            .provide(id)
            .ok_or_else(|| NavigationError::UnknownDestination {
                destination: id.clone(),
            })?;
        self.destinations.insert(
            id.clone(),
            Destination::new(id.clone(), spec.factory, spec.defaults),
        );
        Ok(())
    }

    fn known(&self, id: &DestinationId) -> Result<&Destination<H>, NavigationError> {
        self.destinations
            .get(id)
            .ok_or_else(|| NavigationError::UnknownDestination {
                destination: id.clone(),
            })
    }

    fn materialize(&mut self, id: &DestinationId) -> Result<&H, NavigationError> {
        self.destinations
            .get_mut(id)
            .map(Destination::materialize)
            .ok_or_else(|| NavigationError::UnknownDestination {
                destination: id.clone(),
            })
    }

    /// Resolve both participants of a hand-off and build its context.
    ///
    /// Fails only on an unknown id, before any state is touched.
    fn prepare_handoff(
        &mut self,
        from_id: &DestinationId,
        to_id: &DestinationId,
    ) -> Result<Handoff<H>, NavigationError> {
        let from_handle = self.materialize(from_id)?.clone();
        let to_handle = self.materialize(to_id)?.clone();

        let from = self.known(from_id)?;
        let to = self.known(to_id)?;
        to.begin_entering();

        let departed = from_handle.clone();
        let epoch = from.epoch();
        let expected = epoch.get();
        let container = Rc::clone(&self.container);
        let looper = self.looper.clone();
        // Detaching from inside the animation callback would mutate the
        // view tree the host is iterating.
        let detach_departed = move || {
            looper.post(move || {
                if epoch.get() == expected && container.contains(&departed) {
                    tracing::trace!(handle = ?departed, "detaching departed screen");
                    container.detach(&departed);
                }
            });
        };
        let ctx = TransitionContext::for_dispatch(
            from,
            to,
            self.looper.clone(),
            self.observer.clone(),
            detach_departed,
        );

        Ok(Handoff {
            from_id: from_id.clone(),
            to_id: to_id.clone(),
            from: from_handle,
            to: to_handle,
            ctx,
        })
    }

    fn run_handoff(
        &mut self,
        handoff: Handoff<H>,
        transition: SharedTransition<H>,
        kind: NavigationKind,
    ) {
        let Handoff {
            from_id,
            to_id,
            from,
            to,
            ctx,
        } = handoff;

        // A detach of `to` from an earlier hand-off may still be queued.
        if self.container.contains(&to) {
            tracing::trace!(destination = %to_id, "detaching stale handle before transition");
            self.container.detach(&to);
        }

        tracing::debug!(
            from = %from_id,
            to = %to_id,
            transition = transition.name(),
            "running transition"
        );
        self.record(kind, Some(from_id), &to_id, transition.name());
        // Both participants count as in transition from here on, even when
        // the host reports the animation start on a later frame.
        ctx.dispatch_started();
        transition.run(&ctx, &self.container, &from, &to);
    }

    fn record(
        &mut self,
        kind: NavigationKind,
        from: Option<DestinationId>,
        to: &DestinationId,
        transition: &str,
    ) {
        self.history.record(NavigationRecord {
            kind,
            from,
            to: to.clone(),
            transition: transition.to_string(),
            timestamp: Utc::now(),
        });
    }

    fn sync_back_press(&mut self) {
        let wanted = self.stack.depth() > 1;
        if wanted == self.back_press_bound {
            return;
        }
        if let Some(binding) = self.back_press.as_mut() {
            if wanted {
                binding.bind();
            } else {
                binding.unbind();
            }
        }
        self.back_press_bound = wanted;
    }
}

impl<H: Screen> fmt::Debug for Navigator<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("stack", &self.stack.ids())
            .field("resolver", &self.resolver)
            .field("registry", &self.registry)
            .field("back_press_bound", &self.back_press_bound)
            .finish()
    }
}
