//! Surface-neutral event payloads.

use std::fmt;

use crate::keys::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    KeyDown,
    MouseDown,
    FocusIn,
    FocusOut,
    Scroll,
    Input,
}

impl EventKind {
    /// DOM event type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::KeyDown => "keydown",
            Self::MouseDown => "mousedown",
            Self::FocusIn => "focusin",
            Self::FocusOut => "focusout",
            Self::Scroll => "scroll",
            Self::Input => "input",
        }
    }

    /// Scroll listeners never cancel the event, so they register as passive.
    #[must_use]
    pub const fn is_passive(self) -> bool {
        matches!(self, Self::Scroll)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a listener is attached.
#[derive(Debug, Clone, Copy)]
pub enum Target<'a, E> {
    Window,
    Document,
    Element(&'a E),
}

/// An event as seen by a handler.
///
/// Handlers record cancellation on the payload; the surface applies it to
/// the underlying event once the handler returns.
#[derive(Debug, Clone)]
pub struct DomEvent<E> {
    pub kind: EventKind,
    pub target: Option<E>,
    pub key: Key,
    pub shift_key: bool,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl<E> DomEvent<E> {
    #[must_use]
    pub const fn new(kind: EventKind, target: Option<E>) -> Self {
        Self {
            kind,
            target,
            key: Key::Other,
            shift_key: false,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: Key, shift_key: bool) -> Self {
        self.key = key;
        self.shift_key = shift_key;
        self
    }

    pub const fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub const fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    #[must_use]
    pub const fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

pub type Handler<E> = Box<dyn FnMut(&mut DomEvent<E>)>;

pub type MediaHandler = Box<dyn FnMut(bool)>;

#[derive(Debug, Clone)]
pub struct IntersectionEntry<E> {
    pub target: E,
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// What an intersection handler wants done with the entry's target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    Keep,
    Unobserve,
}

pub type IntersectionHandler<E> = Box<dyn FnMut(&IntersectionEntry<E>) -> Observation>;
