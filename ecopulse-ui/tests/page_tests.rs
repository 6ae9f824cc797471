mod common;

use common::{has, initialized, landing};
use ecopulse_ui::config::{HIGH_CONTRAST_QUERY, REDUCED_MOTION_QUERY};
use ecopulse_ui::fake::FakeSurface;
use ecopulse_ui::{EventKind, Page, UiConfig, UiError, UiSurface};

#[test]
fn init_stamps_the_footer_year() {
    let l = initialized(1);
    assert_eq!(l.dom.text(l.year), "2025");
}

#[test]
fn reinitializing_never_double_binds() {
    let mut l = initialized(3);
    let listeners = l.dom.listener_count();
    let watchers = l.dom.media_watcher_count();
    let bindings = l.page.binding_count();
    assert_eq!(watchers, 2);
    assert_eq!(l.dom.observer_count(), 1);

    l.page.init().unwrap();
    l.page.init().unwrap();
    assert_eq!(l.dom.listener_count(), listeners);
    assert_eq!(l.dom.media_watcher_count(), watchers);
    assert_eq!(l.dom.observer_count(), 1);
    assert_eq!(l.page.binding_count(), bindings);

    // A single toggle per click proves the trigger holds one listener.
    l.dom.click(l.menu_btn);
    assert!(!has(&l.dom, l.menu, "hidden"));
}

#[test]
fn reinit_skips_already_revealed_elements() {
    let mut l = initialized(1);
    l.dom.set_visibility(l.reveals[0], 1.0);
    l.page.init().unwrap();
    assert!(!l.dom.is_observed(l.reveals[0]));
    assert!(l.dom.is_observed(l.reveals[1]));
}

#[test]
fn teardown_releases_everything_and_keeps_dom_state() {
    let mut l = initialized(2);
    l.dom.set_media(HIGH_CONTRAST_QUERY, true);
    l.page.teardown();

    assert!(!l.page.is_initialized());
    assert_eq!(l.page.binding_count(), 0);
    assert_eq!(l.dom.listener_count(), 0);
    assert_eq!(l.dom.media_watcher_count(), 0);
    assert_eq!(l.dom.observer_count(), 0);
    assert!(has(&l.dom, l.dom.root(), "high-contrast"));

    l.dom.click(l.menu_btn);
    assert!(has(&l.dom, l.menu, "hidden"));
}

#[test]
fn empty_page_initializes_quietly() {
    let mut page = Page::new(FakeSurface::new(), UiConfig::default());
    page.init().unwrap();
    assert!(page.is_initialized());
    // Only the document-level keyboard and focus handlers plus the two media watchers.
    assert_eq!(page.surface().listener_count(), 5);
    assert_eq!(page.binding_count(), 7);
}

#[test]
fn config_overrides_rename_hooks() {
    let config =
        UiConfig::from_json(r#"{"selectors": {"year_id": "copyright"}}"#).unwrap();
    let l = landing(1);
    let span = l.dom.append(l.dom.root(), "span").id("copyright").node();
    let mut page = Page::with_surface(l.dom.clone(), config);
    page.init().unwrap();
    assert_eq!(l.dom.text(span), "2025");
    assert_eq!(l.dom.text(l.year), "");
}

#[test]
fn failed_click_binding_leaves_keyboard_and_preferences_wired() {
    let mut l = landing(2);
    l.dom.fail_listen(EventKind::Click);
    l.dom.preset_media(HIGH_CONTRAST_QUERY, true);

    let err = l.page.init().unwrap_err();
    assert!(matches!(err, UiError::Bind { kind: EventKind::Click, .. }));
    assert!(l.page.is_initialized());

    // The skip link failed first; focus management after it still runs.
    let body = l.dom.root();
    l.dom.key_down(l.outside, "Tab");
    assert!(has(&l.dom, body, "keyboard-navigation"));
    assert!(has(&l.dom, body, "high-contrast"));
    l.dom.set_media(REDUCED_MOTION_QUERY, true);
    assert!(has(&l.dom, body, "reduce-motion"));

    l.dom.key_down(l.slider, "ArrowUp");
    assert_eq!(l.dom.input_value(&l.slider).as_deref(), Some("6"));
    l.dom.key_down(l.menu_btn, "Enter");
    assert!(!has(&l.dom, l.menu, "hidden"));
}

#[test]
fn unwatchable_preference_still_applies_its_state_at_load() {
    let mut l = landing(1);
    l.dom.fail_media(REDUCED_MOTION_QUERY);
    l.dom.preset_media(REDUCED_MOTION_QUERY, true);

    let err = l.page.init().unwrap_err();
    assert!(matches!(err, UiError::Media { ref query, .. } if query == REDUCED_MOTION_QUERY));

    let body = l.dom.root();
    assert!(has(&l.dom, body, "reduce-motion"));
    assert_eq!(l.dom.media_watcher_count(), 1);
    l.dom.set_media(HIGH_CONTRAST_QUERY, true);
    assert!(has(&l.dom, body, "high-contrast"));
}
