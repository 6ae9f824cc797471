//! Page components. Each wires its own listeners into a [`Bindings`](crate::Bindings)
//! set and silently does nothing when its hooks are missing from the page.

use std::rc::Rc;

use log::warn;

use crate::config::UiConfig;
use crate::error::{Result, UiError};
use crate::subscription::Bindings;
use crate::surface::UiSurface;

pub mod accessibility;
pub mod footer;
pub mod keyboard;
pub mod menu;
pub mod mobile_menu;
pub mod scroll;

/// A wiring routine for one component or sub-feature.
pub type Wire<S> = fn(&Rc<S>, &Rc<UiConfig>, &mut Bindings) -> Result<()>;

/// Run every named wiring routine, even after one fails.
///
/// # Errors
/// Returns the first failure once every part has been attempted.
pub fn wire_all<S: UiSurface>(
    surface: &Rc<S>,
    config: &Rc<UiConfig>,
    bindings: &mut Bindings,
    parts: &[(&str, Wire<S>)],
) -> Result<()> {
    let mut first_error: Option<UiError> = None;
    for (name, wire) in parts {
        if let Err(err) = wire(surface, config, bindings) {
            warn!("{name} disabled: {err}");
            first_error.get_or_insert(err);
        }
    }
    first_error.map_or(Ok(()), Err)
}
