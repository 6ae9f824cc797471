//! Page hook names, class names and thresholds.
//!
//! Everything the components look up in the page markup is named here so a
//! page can override it with a JSON document. Omitted fields keep their
//! defaults.

use serde::Deserialize;

use crate::error::Result;

/// Vertical offset, in CSS pixels, past which the scroll-to-top button shows.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.15;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const HIGH_CONTRAST_QUERY: &str = "(prefers-contrast: high)";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub selectors: Selectors,
    pub classes: Classes,
    pub media: MediaQueries,
    pub scroll_top_threshold: f64,
    pub reveal_threshold: f64,
}

/// Element ids and selectors the page markup provides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub skip_link: String,
    pub menu_button_id: String,
    pub menu_id: String,
    pub menu_item: String,
    pub scroll_top_id: String,
    pub scroll_indicator_id: String,
    pub hero_section: String,
    pub reveal: String,
    pub range_input: String,
    pub year_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Classes {
    pub hidden: String,
    pub reveal_active: String,
    pub keyboard_navigation: String,
    pub focus_outline: String,
    pub focus_outline_trigger: String,
    pub reduce_motion: String,
    pub high_contrast: String,
    /// Classes present on the scroll-to-top button while it is hidden.
    pub scroll_top_hidden: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MediaQueries {
    pub reduced_motion: String,
    pub high_contrast: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            classes: Classes::default(),
            media: MediaQueries::default(),
            scroll_top_threshold: SCROLL_TOP_THRESHOLD,
            reveal_threshold: REVEAL_THRESHOLD,
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            skip_link: ".skip-link".into(),
            menu_button_id: "mobile-menu-btn".into(),
            menu_id: "mobile-menu".into(),
            menu_item: "a".into(),
            scroll_top_id: "scroll-to-top".into(),
            scroll_indicator_id: "scroll-indicator".into(),
            hero_section: "section.hero-section".into(),
            reveal: ".scroll-reveal".into(),
            range_input: "input[type=\"range\"]".into(),
            year_id: "year".into(),
        }
    }
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            hidden: "hidden".into(),
            reveal_active: "active".into(),
            keyboard_navigation: "keyboard-navigation".into(),
            focus_outline: "focus-outline".into(),
            focus_outline_trigger: "btn".into(),
            reduce_motion: "reduce-motion".into(),
            high_contrast: "high-contrast".into(),
            scroll_top_hidden: vec![
                "opacity-0".into(),
                "invisible".into(),
                "translate-y-4".into(),
            ],
        }
    }
}

impl Default for MediaQueries {
    fn default() -> Self {
        Self {
            reduced_motion: REDUCED_MOTION_QUERY.into(),
            high_contrast: HIGH_CONTRAST_QUERY.into(),
        }
    }
}

impl UiConfig {
    /// Parse a JSON override document.
    ///
    /// # Errors
    /// Returns [`UiError::Config`](crate::UiError::Config) when the document is not valid JSON
    /// or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
