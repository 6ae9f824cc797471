//! Shared open/close helpers for the mobile menu panel.

use crate::config::UiConfig;
use crate::surface::UiSurface;

/// The menu trigger and the panel it controls.
#[derive(Debug, Clone)]
pub struct MenuHandles<E> {
    pub button: E,
    pub panel: E,
}

impl<E: Clone + PartialEq + 'static> MenuHandles<E> {
    /// Both hooks must be present; otherwise the menu features stay off.
    pub fn find<S: UiSurface<Element = E>>(surface: &S, config: &UiConfig) -> Option<Self> {
        let button = surface.element_by_id(&config.selectors.menu_button_id)?;
        let panel = surface.element_by_id(&config.selectors.menu_id)?;
        Some(Self { button, panel })
    }

    pub fn is_open<S: UiSurface<Element = E>>(&self, surface: &S, config: &UiConfig) -> bool {
        !surface.has_class(&self.panel, &config.classes.hidden)
    }

    pub fn close<S: UiSurface<Element = E>>(&self, surface: &S, config: &UiConfig) {
        surface.add_class(&self.panel, &config.classes.hidden);
    }

    /// Flip visibility and report whether the menu is now open.
    pub fn toggle<S: UiSurface<Element = E>>(&self, surface: &S, config: &UiConfig) -> bool {
        !surface.toggle_class(&self.panel, &config.classes.hidden)
    }

    pub fn items<S: UiSurface<Element = E>>(&self, surface: &S, config: &UiConfig) -> Vec<E> {
        surface.query_within(&self.panel, &config.selectors.menu_item)
    }

    pub fn focus_first_item<S: UiSurface<Element = E>>(&self, surface: &S, config: &UiConfig) {
        if let Some(first) = self.items(surface, config).first() {
            surface.focus(first);
        }
    }
}
