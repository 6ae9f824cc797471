//! Single initialization entry point for the page behaviour.

use std::rc::Rc;

use log::debug;

use crate::components::{Wire, accessibility, footer, keyboard, mobile_menu, scroll, wire_all};
use crate::config::UiConfig;
use crate::error::Result;
use crate::subscription::Bindings;
use crate::surface::UiSurface;

/// Owns the surface, the config and every binding made on the page.
///
/// `init` may be called any number of times: each call first releases the
/// previous bindings, so no listener, media watcher or observer is ever
/// attached twice.
pub struct Page<S: UiSurface> {
    surface: Rc<S>,
    config: Rc<UiConfig>,
    bindings: Bindings,
    initialized: bool,
}

impl<S: UiSurface> Page<S> {
    pub fn new(surface: S, config: UiConfig) -> Self {
        Self::with_surface(Rc::new(surface), config)
    }

    pub fn with_surface(surface: Rc<S>, config: UiConfig) -> Self {
        Self {
            surface,
            config: Rc::new(config),
            bindings: Bindings::default(),
            initialized: false,
        }
    }

    #[must_use]
    pub const fn surface(&self) -> &Rc<S> {
        &self.surface
    }

    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Number of live listeners, media watchers and observers.
    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Wire every component.
    ///
    /// A component that fails to bind is logged and skipped; the rest are
    /// still wired.
    ///
    /// # Errors
    /// Returns the first binding failure after all components have been attempted.
    pub fn init(&mut self) -> Result<()> {
        self.teardown();

        let components: [(&str, Wire<S>); 7] = [
            ("mobile menu", mobile_menu::init::<S>),
            ("scroll to top", scroll::init_scroll_to_top::<S>),
            ("scroll indicator", scroll::init_scroll_indicator::<S>),
            ("scroll reveal", scroll::init_scroll_reveal::<S>),
            ("accessibility", accessibility::init::<S>),
            ("keyboard navigation", keyboard::init::<S>),
            ("footer year", footer::init::<S>),
        ];

        let result = wire_all(&self.surface, &self.config, &mut self.bindings, &components);
        self.initialized = true;
        debug!("page initialized with {} bindings", self.bindings.len());
        result
    }

    /// Detach every binding. DOM classes are left as they are.
    pub fn teardown(&mut self) {
        if self.initialized {
            debug!("releasing {} bindings", self.bindings.len());
        }
        self.bindings.clear();
        self.initialized = false;
    }
}
