//! Page-supplied overrides for [`UiConfig`].

use ecopulse_ui::UiConfig;
use log::warn;

use crate::dom;

/// Id of the optional `<script type="application/json">` holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "ecopulse-config";

/// Read overrides from the page, falling back to defaults.
///
/// A malformed document is logged and ignored so a typo in markup never
/// disables the page behaviour.
#[must_use]
pub fn load_page_config() -> UiConfig {
    let Some(raw) = dom::document()
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
    else {
        return UiConfig::default();
    };
    parse_or_default(&raw)
}

fn parse_or_default(raw: &str) -> UiConfig {
    if raw.trim().is_empty() {
        return UiConfig::default();
    }
    UiConfig::from_json(raw).unwrap_or_else(|err| {
        warn!("{err}; using default page config");
        UiConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::parse_or_default;
    use ecopulse_ui::UiConfig;

    #[test]
    fn blank_document_uses_defaults() {
        assert_eq!(parse_or_default("  \n"), UiConfig::default());
    }

    #[test]
    fn malformed_document_uses_defaults() {
        assert_eq!(parse_or_default("{\"scroll_top_threshold\": }"), UiConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = parse_or_default(r#"{"reveal_threshold": 0.5}"#);
        assert!((cfg.reveal_threshold - 0.5).abs() < f64::EPSILON);
    }
}
