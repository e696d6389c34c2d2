//! Dispatch context handed to a running transition.

use crate::core::{Destination, DestinationId, Screen};
use crate::host::{AnimationListener, Looper};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Dispatch signal observed by a navigator's host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchEvent {
    Started {
        from: DestinationId,
        to: DestinationId,
    },
    Ended {
        from: DestinationId,
        to: DestinationId,
    },
}

/// Callback receiving every [`DispatchEvent`].
pub type DispatchObserver = Rc<dyn Fn(&DispatchEvent)>;

struct DispatchState {
    from: DestinationId,
    to: DestinationId,
    flags: [Rc<Cell<bool>>; 2],
    started: Cell<bool>,
    ended: Cell<bool>,
    looper: Looper,
    on_ended: RefCell<Option<Box<dyn FnOnce()>>>,
    observer: Option<DispatchObserver>,
}

/// Start/end hooks for one hand-off between two destinations.
///
/// A transition calls [`dispatch_started`](Self::dispatch_started) before it
/// mutates shared state and [`dispatch_ended`](Self::dispatch_ended) once
/// every animated effect it drives has finished. Starting twice is harmless;
/// ending twice is a contract violation that is logged and ignored.
///
/// Clones share the same dispatch, so a context can be moved into several
/// animation callbacks.
///
/// # Example
///
/// ```rust
/// use viewnav::host::Looper;
/// use viewnav::transition::TransitionContext;
///
/// let ctx = TransitionContext::standalone(Looper::new());
/// ctx.dispatch_started();
/// ctx.dispatch_ended();
///
/// assert!(ctx.is_ended());
/// ```
#[derive(Clone)]
pub struct TransitionContext {
    state: Rc<DispatchState>,
}

impl TransitionContext {
    /// A context not tied to any navigator, for exercising transitions in
    /// isolation.
    pub fn standalone(looper: Looper) -> Self {
        Self {
            state: Rc::new(DispatchState {
                from: DestinationId::from("from"),
                to: DestinationId::from("to"),
                flags: [Rc::new(Cell::new(false)), Rc::new(Cell::new(false))],
                started: Cell::new(false),
                ended: Cell::new(false),
                looper,
                on_ended: RefCell::new(None),
                observer: None,
            }),
        }
    }

    /// A context toggling the in-transition flags of both participants.
    ///
    /// `on_ended` runs once, right after the flags are cleared.
    pub(crate) fn for_dispatch<H: Screen>(
        from: &Destination<H>,
        to: &Destination<H>,
        looper: Looper,
        observer: Option<DispatchObserver>,
        on_ended: impl FnOnce() + 'static,
    ) -> Self {
        Self {
            state: Rc::new(DispatchState {
                from: from.id().clone(),
                to: to.id().clone(),
                flags: [from.in_transition_flag(), to.in_transition_flag()],
                started: Cell::new(false),
                ended: Cell::new(false),
                looper,
                on_ended: RefCell::new(Some(Box::new(on_ended))),
                observer,
            }),
        }
    }

    /// The destination being left.
    pub fn from(&self) -> &DestinationId {
        &self.state.from
    }

    /// The destination being revealed.
    pub fn to(&self) -> &DestinationId {
        &self.state.to
    }

    /// Signal that the hand-off has started.
    pub fn dispatch_started(&self) {
        let state = &self.state;
        if state.started.get() || state.ended.get() {
            return;
        }
        state.started.set(true);
        for flag in &state.flags {
            flag.set(true);
        }
        tracing::trace!(from = %state.from, to = %state.to, "transition started");
        self.notify(DispatchEvent::Started {
            from: state.from.clone(),
            to: state.to.clone(),
        });
    }

    /// Signal that every effect of the hand-off has finished.
    pub fn dispatch_ended(&self) {
        let state = &self.state;
        if state.ended.get() {
            tracing::warn!(
                from = %state.from,
                to = %state.to,
                "transition ended more than once"
            );
            return;
        }
        self.dispatch_started();
        state.ended.set(true);
        for flag in &state.flags {
            flag.set(false);
        }
        tracing::trace!(from = %state.from, to = %state.to, "transition ended");
        let on_ended = state.on_ended.borrow_mut().take();
        if let Some(on_ended) = on_ended {
            on_ended();
        }
        self.notify(DispatchEvent::Ended {
            from: state.from.clone(),
            to: state.to.clone(),
        });
    }

    /// A listener that forwards an animation's start and end to this context.
    pub fn listener(&self) -> AnimationListener {
        let (start, end) = (self.clone(), self.clone());
        AnimationListener::new()
            .on_start(move || start.dispatch_started())
            .on_end(move || end.dispatch_ended())
    }

    /// Schedule `task` for the next turn of the control loop.
    pub fn post(&self, task: impl FnOnce() + 'static) {
        self.state.looper.post(task);
    }

    pub fn looper(&self) -> &Looper {
        &self.state.looper
    }

    pub fn is_started(&self) -> bool {
        self.state.started.get()
    }

    pub fn is_ended(&self) -> bool {
        self.state.ended.get()
    }

    fn notify(&self, event: DispatchEvent) {
        if let Some(observer) = &self.state.observer {
            observer(&event);
        }
    }
}

impl fmt::Debug for TransitionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionContext")
            .field("from", &self.state.from)
            .field("to", &self.state.to)
            .field("started", &self.state.started.get())
            .field("ended", &self.state.ended.get())
            .finish()
    }
}
