//! The capability boundary between page behaviour and a rendering engine.
//!
//! Components never touch a browser directly. They find elements, flip
//! classes and bind handlers through [`UiSurface`], which a wasm build
//! backs with `web-sys` and tests back with [`FakeSurface`](crate::fake::FakeSurface).

use crate::error::Result;
use crate::event::{EventKind, Handler, IntersectionHandler, MediaHandler, Target};
use crate::subscription::Subscription;

pub trait UiSurface: 'static {
    /// Handle to a page element. Equality is node identity.
    type Element: Clone + PartialEq + 'static;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// First element matching `selector` in document order.
    fn query(&self, selector: &str) -> Option<Self::Element>;

    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    /// Descendants of `root` matching `selector`, in document order.
    fn query_within(&self, root: &Self::Element, selector: &str) -> Vec<Self::Element>;

    fn body(&self) -> Option<Self::Element>;

    /// Upper-case tag name, e.g. `BUTTON`.
    fn tag_name(&self, element: &Self::Element) -> String;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    fn add_class(&self, element: &Self::Element, class: &str);

    fn remove_class(&self, element: &Self::Element, class: &str);

    /// Whether `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: &Self::Element, node: &Self::Element) -> bool;

    fn next_sibling_element(&self, element: &Self::Element) -> Option<Self::Element>;

    fn focus(&self, element: &Self::Element);

    fn set_text(&self, element: &Self::Element, text: &str);

    /// Current value of a form control; `None` when the element has none.
    fn input_value(&self, element: &Self::Element) -> Option<String>;

    fn set_input_value(&self, element: &Self::Element, value: &str);

    /// Fire a bubbling `input` event at `element`.
    fn dispatch_input(&self, element: &Self::Element);

    /// Smoothly scroll `element` into view.
    fn scroll_into_view(&self, element: &Self::Element);

    fn scroll_y(&self) -> f64;

    /// Smoothly scroll the window back to offset 0.
    fn scroll_to_top(&self);

    fn current_year(&self) -> i32;

    fn media_matches(&self, query: &str) -> bool;

    /// Register `handler` for `kind` on `target`.
    ///
    /// # Errors
    /// Returns [`UiError::Bind`](crate::UiError::Bind) when the engine refuses the listener.
    fn listen(
        &self,
        target: Target<'_, Self::Element>,
        kind: EventKind,
        handler: Handler<Self::Element>,
    ) -> Result<Subscription>;

    /// Call `handler` with the new match state whenever `query` flips.
    ///
    /// # Errors
    /// Returns [`UiError::Media`](crate::UiError::Media) when the query cannot be watched.
    fn watch_media(&self, query: &str, handler: MediaHandler) -> Result<Subscription>;

    /// Observe `targets` for visibility changes crossing `threshold`.
    ///
    /// # Errors
    /// Returns [`UiError::Observe`](crate::UiError::Observe) when no observer can be created.
    fn observe_intersection(
        &self,
        targets: &[Self::Element],
        threshold: f64,
        handler: IntersectionHandler<Self::Element>,
    ) -> Result<Subscription>;

    fn toggle_class(&self, element: &Self::Element, class: &str) -> bool {
        if self.has_class(element, class) {
            self.remove_class(element, class);
            false
        } else {
            self.add_class(element, class);
            true
        }
    }

    fn set_class(&self, element: &Self::Element, class: &str, on: bool) {
        if on {
            self.add_class(element, class);
        } else {
            self.remove_class(element, class);
        }
    }
}
