//! Click toggling for the mobile menu.

use std::rc::Rc;

use log::debug;

use super::menu::MenuHandles;
use crate::config::UiConfig;
use crate::error::Result;
use crate::event::{DomEvent, EventKind, Target};
use crate::subscription::Bindings;
use crate::surface::UiSurface;

/// Toggle the panel from its trigger and close it on any click outside both.
///
/// # Errors
/// Fails when a click listener cannot be bound.
pub fn init<S: UiSurface>(
    surface: &Rc<S>,
    config: &Rc<UiConfig>,
    bindings: &mut Bindings,
) -> Result<()> {
    let Some(menu) = MenuHandles::find(surface.as_ref(), config) else {
        debug!("mobile menu hooks absent; click toggling disabled");
        return Ok(());
    };

    let toggle = {
        let surface = Rc::clone(surface);
        let config = Rc::clone(config);
        let menu = menu.clone();
        move |event: &mut DomEvent<S::Element>| {
            event.stop_propagation();
            if menu.toggle(surface.as_ref(), &config) {
                menu.focus_first_item(surface.as_ref(), &config);
            }
        }
    };
    bindings.push(surface.listen(
        Target::Element(&menu.button),
        EventKind::Click,
        Box::new(toggle),
    )?);

    let dismiss = {
        let surface = Rc::clone(surface);
        let config = Rc::clone(config);
        move |event: &mut DomEvent<S::Element>| {
            let inside = event.target.as_ref().is_some_and(|target| {
                surface.contains(&menu.button, target) || surface.contains(&menu.panel, target)
            });
            if !inside {
                menu.close(surface.as_ref(), &config);
            }
        }
    };
    bindings.push(surface.listen(Target::Document, EventKind::Click, Box::new(dismiss))?);
    Ok(())
}
