#![forbid(unsafe_code)]
//! EcoPulse page behaviour: menu toggling, scroll helpers, reveal-on-scroll
//! and keyboard accessibility, written against an abstract [`UiSurface`].

pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod fake;
pub mod focus_trap;
pub mod keys;
pub mod page;
pub mod slider;
pub mod subscription;
pub mod surface;

pub use config::UiConfig;
pub use error::{Result, UiError};
pub use event::{
    DomEvent, EventKind, Handler, IntersectionEntry, IntersectionHandler, MediaHandler,
    Observation, Target,
};
pub use keys::Key;
pub use page::Page;
pub use subscription::{Bindings, Subscription};
pub use surface::UiSurface;
