//! Declarative scene transition.

use super::{Transition, TransitionContext};
use crate::core::Screen;
use crate::host::{Container, LayoutTransition};
use std::rc::Rc;

/// Animates the container from its current state to the scene holding `to`.
///
/// The host layout transition captures the current children, then `to` is
/// attached and the difference is animated. The departed screen stays in
/// place until the navigator detaches it after the end dispatch.
pub struct ToEndScene<H: Screen> {
    layout: Rc<dyn LayoutTransition<H>>,
}

impl<H: Screen> ToEndScene<H> {
    pub fn new(layout: Rc<dyn LayoutTransition<H>>) -> Self {
        Self { layout }
    }
}

impl<H: Screen> Transition<H> for ToEndScene<H> {
    fn run(&self, ctx: &TransitionContext, container: &Rc<dyn Container<H>>, _from: &H, to: &H) {
        ctx.dispatch_started();
        self.layout.begin_delayed(container, ctx.listener());
        container.attach(to);
    }

    fn name(&self) -> &str {
        "scene"
    }
}
