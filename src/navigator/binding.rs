//! Back-press binding between a host dispatcher and a shared navigator.

use super::controller::Navigator;
use crate::core::Screen;
use crate::host::{BackPressBinding, BackPressDispatcher, CallbackId};
use std::cell::RefCell;
use std::rc::Weak;

/// Registers a pop callback with a [`BackPressDispatcher`] while the
/// navigator has something to pop.
///
/// The callback reports whether anything remains on screen. It holds the
/// navigator weakly, so a dropped navigator simply stops consuming presses.
pub struct DispatcherBinding<H: Screen> {
    dispatcher: BackPressDispatcher,
    navigator: Weak<RefCell<Navigator<H>>>,
    callback: Option<CallbackId>,
}

impl<H: Screen> DispatcherBinding<H> {
    pub fn new(dispatcher: BackPressDispatcher, navigator: Weak<RefCell<Navigator<H>>>) -> Self {
        Self {
            dispatcher,
            navigator,
            callback: None,
        }
    }

    pub fn is_bound(&self) -> bool {
        self.callback.is_some()
    }
}

impl<H: Screen> BackPressBinding for DispatcherBinding<H> {
    fn bind(&mut self) {
        if self.callback.is_some() {
            return;
        }
        let navigator = Weak::clone(&self.navigator);
        let id = self.dispatcher.add(move || {
            let Some(navigator) = navigator.upgrade() else {
                return false;
            };
            let Ok(mut navigator) = navigator.try_borrow_mut() else {
                tracing::warn!("back press delivered while the navigator is busy");
                return true;
            };
            navigator.pop_back_stack();
            navigator.depth() >= 1
        });
        tracing::trace!(callback = ?id, "back press bound");
        self.callback = Some(id);
    }

    fn unbind(&mut self) {
        if let Some(id) = self.callback.take() {
            tracing::trace!(callback = ?id, "back press unbound");
            self.dispatcher.remove(id);
        }
    }
}

impl<H: Screen> Drop for DispatcherBinding<H> {
    fn drop(&mut self) {
        self.unbind();
    }
}
