use std::rc::Rc;

use crate::config::UiConfig;
use crate::error::Result;
use crate::subscription::Bindings;
use crate::surface::UiSurface;

/// Stamp the current year into the footer.
///
/// # Errors
/// Never fails; the signature matches the other components.
pub fn init<S: UiSurface>(
    surface: &Rc<S>,
    config: &Rc<UiConfig>,
    _bindings: &mut Bindings,
) -> Result<()> {
    if let Some(year) = surface.element_by_id(&config.selectors.year_id) {
        surface.set_text(&year, &surface.current_year().to_string());
    }
    Ok(())
}
