//! Error types for page wiring.

use crate::event::EventKind;

pub type Result<T> = std::result::Result<T, UiError>;

/// Failures raised by the surface binding layer.
///
/// Missing page elements are never errors; every component simply skips
/// itself when its hooks are absent.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("failed to bind {kind} listener: {message}")]
    Bind { kind: EventKind, message: String },
    #[error("failed to watch media query `{query}`: {message}")]
    Media { query: String, message: String },
    #[error("failed to observe intersections: {0}")]
    Observe(String),
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}
