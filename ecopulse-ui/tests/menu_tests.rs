mod common;

use common::{has, initialized};
use ecopulse_ui::fake::FakeSurface;
use ecopulse_ui::{Page, UiConfig, UiSurface};

#[test]
fn clicking_trigger_opens_menu_and_focuses_first_link() {
    let l = initialized(3);
    assert!(has(&l.dom, l.menu, "hidden"));

    let event = l.dom.click(l.menu_btn);
    assert!(!has(&l.dom, l.menu, "hidden"));
    assert!(event.propagation_stopped());
    assert_eq!(l.dom.focused(), Some(l.links[0]));
}

#[test]
fn clicking_trigger_again_closes_menu() {
    let l = initialized(3);
    l.dom.click(l.menu_btn);
    l.dom.click(l.menu_btn);
    assert!(has(&l.dom, l.menu, "hidden"));
}

#[test]
fn clicking_outside_closes_open_menu() {
    let l = initialized(3);
    l.dom.click(l.menu_btn);
    l.dom.click(l.outside);
    assert!(has(&l.dom, l.menu, "hidden"));
}

#[test]
fn clicking_inside_menu_keeps_it_open() {
    let l = initialized(3);
    l.dom.click(l.menu_btn);
    l.dom.click(l.links[1]);
    assert!(!has(&l.dom, l.menu, "hidden"));
}

#[test]
fn enter_and_space_toggle_from_keyboard() {
    let l = initialized(2);

    let event = l.dom.key_down(l.menu_btn, "Enter");
    assert!(event.default_prevented());
    assert!(!has(&l.dom, l.menu, "hidden"));
    assert_eq!(l.dom.focused(), Some(l.links[0]));

    l.dom.key_down(l.menu_btn, " ");
    assert!(has(&l.dom, l.menu, "hidden"));
}

#[test]
fn other_keys_on_trigger_do_nothing() {
    let l = initialized(2);
    let event = l.dom.key_down(l.menu_btn, "a");
    assert!(!event.default_prevented());
    assert!(has(&l.dom, l.menu, "hidden"));
}

#[test]
fn escape_on_link_closes_and_returns_focus() {
    let l = initialized(3);
    l.dom.click(l.menu_btn);
    l.dom.focus(&l.links[1]);

    l.dom.key_down(l.links[1], "Escape");
    assert!(has(&l.dom, l.menu, "hidden"));
    assert_eq!(l.dom.focused(), Some(l.menu_btn));
}

#[test]
fn escape_anywhere_closes_open_menu() {
    let l = initialized(3);
    l.dom.click(l.menu_btn);
    l.dom.focus(&l.outside);

    l.dom.key_down(l.outside, "Esc");
    assert!(has(&l.dom, l.menu, "hidden"));
    assert_eq!(l.dom.focused(), Some(l.menu_btn));
}

#[test]
fn escape_with_closed_menu_leaves_focus_alone() {
    let l = initialized(3);
    l.dom.focus(&l.outside);
    l.dom.key_down(l.outside, "Escape");
    assert_eq!(l.dom.focused(), Some(l.outside));
}

#[test]
fn escape_ignores_a_panel_without_its_trigger() {
    let dom = FakeSurface::new();
    let panel = dom.append(dom.root(), "nav").id("mobile-menu").node();
    let field = dom.append(dom.root(), "input").node();
    let mut page = Page::new(dom, UiConfig::default());
    page.init().unwrap();

    page.surface().key_down(field, "Escape");
    assert!(!has(page.surface(), panel, "hidden"));
}

#[test]
fn tab_trap_is_a_closed_loop_for_every_size() {
    for size in 1..=5 {
        let l = initialized(size);
        l.dom.click(l.menu_btn);
        let last = l.links[size - 1];

        l.dom.focus(&last);
        let event = l.dom.key_down(last, "Tab");
        assert!(event.default_prevented(), "size {size}");
        assert_eq!(l.dom.focused(), Some(l.links[0]), "size {size}");

        let event = l.dom.press(l.links[0], "Tab", true);
        assert!(event.default_prevented(), "size {size}");
        assert_eq!(l.dom.focused(), Some(last), "size {size}");
    }
}

#[test]
fn tab_inside_the_list_uses_default_traversal() {
    let l = initialized(3);
    l.dom.click(l.menu_btn);
    l.dom.focus(&l.links[1]);

    let forward = l.dom.key_down(l.links[1], "Tab");
    assert!(!forward.default_prevented());
    let backward = l.dom.press(l.links[1], "Tab", true);
    assert!(!backward.default_prevented());
    assert_eq!(l.dom.focused(), Some(l.links[1]));
}

#[test]
fn missing_menu_hooks_disable_menu_features() {
    let dom = ecopulse_ui::fake::FakeSurface::new();
    let btn = dom.append(dom.root(), "button").id("mobile-menu-btn").node();
    let mut page = ecopulse_ui::Page::new(dom, ecopulse_ui::UiConfig::default());
    page.init().unwrap();

    let dom = page.surface();
    let event = dom.click(btn);
    assert!(!event.propagation_stopped());
    assert!(!event.default_prevented());
}
