//! Opaque screen handles.
//!
//! The engine never renders, measures or lays out a screen. It only needs to
//! compare handles, clone them into callbacks and print them in diagnostics.

use std::fmt::Debug;

/// Marker trait for screen handles managed by a navigator.
///
/// A handle is whatever the host uses to refer to an attachable visual unit:
/// a widget id, an `Rc` to a view node, an index into a scene graph. Equality
/// must mean "the same visual unit", since the container uses it for
/// membership checks.
///
/// # Required Traits
///
/// - `Clone`: handles are captured by transition callbacks
/// - `PartialEq`: containers test membership by comparison
/// - `Debug`: handles show up in logs and container event logs
///
/// The trait is implemented for every type satisfying these bounds.
///
/// # Example
///
/// ```rust
/// use viewnav::core::Screen;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct WidgetId(u32);
///
/// fn assert_screen<H: Screen>(_: &H) {}
/// assert_screen(&WidgetId(7));
/// ```
pub trait Screen: Clone + PartialEq + Debug + 'static {}

impl<T> Screen for T where T: Clone + PartialEq + Debug + 'static {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[derive(Clone, PartialEq, Debug)]
    enum TestScreen {
        Home,
        Details,
    }

    fn name_of<H: Screen>(handle: &H) -> String {
        format!("{handle:?}")
    }

    #[test]
    fn enums_are_screens() {
        assert_eq!(name_of(&TestScreen::Home), "Home");
        assert_eq!(name_of(&TestScreen::Details), "Details");
    }

    #[test]
    fn shared_nodes_are_screens() {
        let node = Rc::new(String::from("node"));
        let same = Rc::clone(&node);
        assert_eq!(node, same);
        assert_eq!(name_of(&node), "\"node\"");
    }
}
