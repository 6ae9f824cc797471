mod common;

use common::{has, initialized, landing};
use ecopulse_ui::config::{HIGH_CONTRAST_QUERY, REDUCED_MOTION_QUERY};
use ecopulse_ui::fake::ScrollRequest;

#[test]
fn skip_link_focuses_and_scrolls_to_target() {
    let l = initialized(1);
    let event = l.dom.click(l.skip_link);
    assert!(event.default_prevented());
    assert_eq!(l.dom.focused(), Some(l.main));
    assert_eq!(l.dom.scroll_requests(), vec![ScrollRequest::IntoView(l.main)]);
}

#[test]
fn skip_link_with_unknown_target_only_prevents_navigation() {
    let mut l = landing(1);
    l.dom.set_attribute(l.skip_link, "href", "#nowhere");
    l.page.init().unwrap();

    let event = l.dom.click(l.skip_link);
    assert!(event.default_prevented());
    assert_eq!(l.dom.focused(), None);
    assert!(l.dom.scroll_requests().is_empty());
}

#[test]
fn tab_enters_keyboard_mode_and_mouse_leaves_it() {
    let l = initialized(1);
    let body = l.dom.root();

    l.dom.key_down(l.outside, "Tab");
    assert!(has(&l.dom, body, "keyboard-navigation"));
    l.dom.key_down(l.outside, "a");
    assert!(has(&l.dom, body, "keyboard-navigation"));
    l.dom.mouse_down(l.outside);
    assert!(!has(&l.dom, body, "keyboard-navigation"));
}

#[test]
fn focus_outline_follows_focus_on_controls() {
    let l = initialized(2);

    ecopulse_ui::UiSurface::focus(l.dom.as_ref(), &l.menu_btn);
    assert!(has(&l.dom, l.menu_btn, "focus-outline"));

    ecopulse_ui::UiSurface::focus(l.dom.as_ref(), &l.links[0]);
    assert!(!has(&l.dom, l.menu_btn, "focus-outline"));
    assert!(has(&l.dom, l.links[0], "focus-outline"));

    ecopulse_ui::UiSurface::focus(l.dom.as_ref(), &l.slider);
    assert!(has(&l.dom, l.slider, "focus-outline"));
}

#[test]
fn plain_elements_get_no_focus_outline() {
    let l = initialized(1);
    ecopulse_ui::UiSurface::focus(l.dom.as_ref(), &l.outside);
    assert!(!has(&l.dom, l.outside, "focus-outline"));
}

#[test]
fn preferences_apply_at_load() {
    let mut l = landing(1);
    l.dom.preset_media(REDUCED_MOTION_QUERY, true);
    l.dom.preset_media(HIGH_CONTRAST_QUERY, false);
    l.page.init().unwrap();

    let body = l.dom.root();
    assert!(has(&l.dom, body, "reduce-motion"));
    assert!(!has(&l.dom, body, "high-contrast"));
}

#[test]
fn preferences_follow_live_changes() {
    let l = initialized(1);
    let body = l.dom.root();

    l.dom.set_media(HIGH_CONTRAST_QUERY, true);
    assert!(has(&l.dom, body, "high-contrast"));
    l.dom.set_media(REDUCED_MOTION_QUERY, true);
    assert!(has(&l.dom, body, "reduce-motion"));

    l.dom.set_media(HIGH_CONTRAST_QUERY, false);
    assert!(!has(&l.dom, body, "high-contrast"));
    l.dom.set_media(REDUCED_MOTION_QUERY, false);
    assert!(!has(&l.dom, body, "reduce-motion"));
}
