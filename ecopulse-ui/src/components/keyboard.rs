//! Keyboard affordances: slider stepping, Escape handling and the menu tab trap.

use std::rc::Rc;

use log::debug;

use super::menu::MenuHandles;
use super::{Wire, wire_all};
use crate::config::UiConfig;
use crate::error::Result;
use crate::event::{DomEvent, EventKind, Target};
use crate::focus_trap::wrap_target;
use crate::keys::Key;
use crate::slider::{RangeSpec, format_value};
use crate::subscription::Bindings;
use crate::surface::UiSurface;

/// Wire slider, Escape and menu keyboard handling.
///
/// # Errors
/// Returns the first keydown listener that could not be bound; the other
/// parts are still wired.
pub fn init<S: UiSurface>(
    surface: &Rc<S>,
    config: &Rc<UiConfig>,
    bindings: &mut Bindings,
) -> Result<()> {
    let parts: [(&str, Wire<S>); 3] = [
        ("slider keys", setup_slider_navigation::<S>),
        ("escape to close", setup_modal_navigation::<S>),
        ("menu keys", setup_menu_navigation::<S>),
    ];
    wire_all(surface, config, bindings, &parts)
}

/// Step every range input with the arrow keys and announce the change.
///
/// # Errors
/// Fails when a keydown listener cannot be bound.
pub fn setup_slider_navigation<S: UiSurface>(
    surface: &Rc<S>,
    config: &Rc<UiConfig>,
    bindings: &mut Bindings,
) -> Result<()> {
    let sliders = surface.query_all(&config.selectors.range_input);
    debug!("binding arrow keys on {} range inputs", sliders.len());

    for slider in sliders {
        let handler = {
            let surface = Rc::clone(surface);
            let slider = slider.clone();
            move |event: &mut DomEvent<S::Element>| {
                if !event.key.is_arrow() {
                    return;
                }
                event.prevent_default();
                let spec = RangeSpec::from_attributes(
                    surface.attribute(&slider, "min").as_deref(),
                    surface.attribute(&slider, "max").as_deref(),
                    surface.attribute(&slider, "step").as_deref(),
                );
                let current = spec.value_or_default(surface.input_value(&slider).as_deref());
                if let Some(next) = spec.step(current, event.key) {
                    surface.set_input_value(&slider, &format_value(next));
                    surface.dispatch_input(&slider);
                }
            }
        };
        bindings.push(surface.listen(
            Target::Element(&slider),
            EventKind::KeyDown,
            Box::new(handler),
        )?);
    }
    Ok(())
}

/// Escape anywhere closes an open menu and hands focus back to its trigger.
///
/// # Errors
/// Fails when the document listener cannot be bound.
pub fn setup_modal_navigation<S: UiSurface>(
    surface: &Rc<S>,
    config: &Rc<UiConfig>,
    bindings: &mut Bindings,
) -> Result<()> {
    let handler = {
        let surface = Rc::clone(surface);
        let config = Rc::clone(config);
        move |event: &mut DomEvent<S::Element>| {
            if event.key != Key::Escape {
                return;
            }
            // Resolved per event; the menu may appear after init.
            let Some(menu) = MenuHandles::find(surface.as_ref(), &config) else {
                return;
            };
            if menu.is_open(surface.as_ref(), &config) {
                menu.close(surface.as_ref(), &config);
                surface.focus(&menu.button);
            }
        }
    };
    bindings.push(surface.listen(Target::Document, EventKind::KeyDown, Box::new(handler))?);
    Ok(())
}

/// Enter/Space on the trigger, Escape inside the menu, and a closed Tab loop
/// over the menu links.
///
/// # Errors
/// Fails when a keydown listener cannot be bound.
pub fn setup_menu_navigation<S: UiSurface>(
    surface: &Rc<S>,
    config: &Rc<UiConfig>,
    bindings: &mut Bindings,
) -> Result<()> {
    let Some(menu) = MenuHandles::find(surface.as_ref(), config) else {
        debug!("mobile menu hooks absent; menu keyboard navigation disabled");
        return Ok(());
    };

    let on_trigger = {
        let surface = Rc::clone(surface);
        let config = Rc::clone(config);
        let menu = menu.clone();
        move |event: &mut DomEvent<S::Element>| {
            if !event.key.is_activation() {
                return;
            }
            event.prevent_default();
            if menu.toggle(surface.as_ref(), &config) {
                menu.focus_first_item(surface.as_ref(), &config);
            }
        }
    };
    bindings.push(surface.listen(
        Target::Element(&menu.button),
        EventKind::KeyDown,
        Box::new(on_trigger),
    )?);

    let items = Rc::new(menu.items(surface.as_ref(), config));
    for (index, item) in items.iter().enumerate() {
        let handler = {
            let surface = Rc::clone(surface);
            let config = Rc::clone(config);
            let menu = menu.clone();
            let items = Rc::clone(&items);
            move |event: &mut DomEvent<S::Element>| match event.key {
                Key::Escape => {
                    menu.close(surface.as_ref(), &config);
                    surface.focus(&menu.button);
                }
                Key::Tab => {
                    if let Some(next) = wrap_target(index, items.len(), event.shift_key) {
                        event.prevent_default();
                        surface.focus(&items[next]);
                    }
                }
                _ => {}
            }
        };
        bindings.push(surface.listen(
            Target::Element(item),
            EventKind::KeyDown,
            Box::new(handler),
        )?);
    }
    Ok(())
}
