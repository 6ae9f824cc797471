//! Scroll-to-top button, hero scroll indicator and reveal-on-scroll.

use std::rc::Rc;

use log::debug;

use crate::config::UiConfig;
use crate::error::Result;
use crate::event::{DomEvent, EventKind, IntersectionEntry, Observation, Target};
use crate::subscription::Bindings;
use crate::surface::UiSurface;

/// The button shows strictly past the threshold.
#[must_use]
pub fn scroll_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Whether an intersection report is enough to reveal its target.
#[must_use]
pub fn should_reveal(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio >= threshold
}

/// Show the scroll-to-top button past the threshold; click scrolls home.
///
/// # Errors
/// Fails when the scroll or click listener cannot be bound.
pub fn init_scroll_to_top<S: UiSurface>(
    surface: &Rc<S>,
    config: &Rc<UiConfig>,
    bindings: &mut Bindings,
) -> Result<()> {
    let Some(button) = surface.element_by_id(&config.selectors.scroll_top_id) else {
        debug!("no scroll-to-top button on page");
        return Ok(());
    };

    let refresh = {
        let surface = Rc::clone(surface);
        let config = Rc::clone(config);
        let button = button.clone();
        move || {
            let hidden = !scroll_top_visible(surface.scroll_y(), config.scroll_top_threshold);
            for class in &config.classes.scroll_top_hidden {
                surface.set_class(&button, class, hidden);
            }
        }
    };

    let on_scroll = {
        let refresh = refresh.clone();
        move |_: &mut DomEvent<S::Element>| refresh()
    };
    bindings.push(surface.listen(Target::Window, EventKind::Scroll, Box::new(on_scroll))?);

    let on_click = {
        let surface = Rc::clone(surface);
        move |_: &mut DomEvent<S::Element>| surface.scroll_to_top()
    };
    bindings.push(surface.listen(Target::Element(&button), EventKind::Click, Box::new(on_click))?);

    refresh();
    Ok(())
}

/// Clicking the indicator scrolls to the first section that directly follows
/// a hero section.
///
/// # Errors
/// Fails when the click listener cannot be bound.
pub fn init_scroll_indicator<S: UiSurface>(
    surface: &Rc<S>,
    config: &Rc<UiConfig>,
    bindings: &mut Bindings,
) -> Result<()> {
    let Some(indicator) = surface.element_by_id(&config.selectors.scroll_indicator_id) else {
        debug!("no scroll indicator on page");
        return Ok(());
    };

    let handler = {
        let surface = Rc::clone(surface);
        let config = Rc::clone(config);
        move |_: &mut DomEvent<S::Element>| {
            let next = surface
                .query_all(&config.selectors.hero_section)
                .iter()
                .filter_map(|hero| surface.next_sibling_element(hero))
                .find(|next| surface.tag_name(next).eq_ignore_ascii_case("section"));
            if let Some(next) = next {
                surface.scroll_into_view(&next);
            }
        }
    };
    bindings.push(surface.listen(
        Target::Element(&indicator),
        EventKind::Click,
        Box::new(handler),
    )?);
    Ok(())
}

/// Reveal each element once it is sufficiently visible, then stop watching it.
///
/// # Errors
/// Fails when the intersection observer cannot be created.
pub fn init_scroll_reveal<S: UiSurface>(
    surface: &Rc<S>,
    config: &Rc<UiConfig>,
    bindings: &mut Bindings,
) -> Result<()> {
    let pending: Vec<_> = surface
        .query_all(&config.selectors.reveal)
        .into_iter()
        .filter(|el| !surface.has_class(el, &config.classes.reveal_active))
        .collect();
    if pending.is_empty() {
        return Ok(());
    }
    debug!("observing {} reveal elements", pending.len());

    let handler = {
        let surface = Rc::clone(surface);
        let config = Rc::clone(config);
        move |entry: &IntersectionEntry<S::Element>| {
            if should_reveal(entry.is_intersecting, entry.ratio, config.reveal_threshold) {
                surface.add_class(&entry.target, &config.classes.reveal_active);
                Observation::Unobserve
            } else {
                Observation::Keep
            }
        }
    };
    bindings.push(surface.observe_intersection(
        &pending,
        config.reveal_threshold,
        Box::new(handler),
    )?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        assert!(!scroll_top_visible(299.0, 300.0));
        assert!(!scroll_top_visible(300.0, 300.0));
        assert!(scroll_top_visible(301.0, 300.0));
    }

    #[test]
    fn reveal_needs_intersection_and_ratio() {
        assert!(should_reveal(true, 0.15, 0.15));
        assert!(should_reveal(true, 1.0, 0.15));
        assert!(!should_reveal(true, 0.1, 0.15));
        assert!(!should_reveal(false, 0.5, 0.15));
    }
}
