//! Skip links, input-modality tracking and OS preference mirroring.

use std::rc::Rc;

use log::debug;

use crate::config::UiConfig;
use crate::error::Result;
use crate::event::{DomEvent, EventKind, Target};
use super::{Wire, wire_all};
use crate::keys::Key;
use crate::subscription::Bindings;
use crate::surface::UiSurface;

const FOCUS_OUTLINE_TAGS: [&str; 3] = ["BUTTON", "A", "INPUT"];

/// Wire every accessibility helper. A helper that fails to bind does not
/// stop the others.
///
/// # Errors
/// Returns the first listener or media watcher failure.
pub fn init<S: UiSurface>(
    surface: &Rc<S>,
    config: &Rc<UiConfig>,
    bindings: &mut Bindings,
) -> Result<()> {
    let parts: [(&str, Wire<S>); 4] = [
        ("skip links", setup_skip_links::<S>),
        ("focus management", setup_focus_management::<S>),
        ("reduced motion", setup_reduced_motion::<S>),
        ("high contrast", setup_high_contrast::<S>),
    ];
    wire_all(surface, config, bindings, &parts)
}

/// Element id named by the fragment of `href`, if any.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.split_once('#')
        .map(|(_, fragment)| fragment)
        .filter(|fragment| !fragment.is_empty())
}

/// Whether an element should carry the visible focus marker while focused.
#[must_use]
pub fn wants_focus_outline(tag_name: &str, has_trigger_class: bool) -> bool {
    has_trigger_class
        || FOCUS_OUTLINE_TAGS
            .iter()
            .any(|tag| tag.eq_ignore_ascii_case(tag_name))
}

/// Move focus to the skip link's target instead of jumping to it.
///
/// # Errors
/// Fails when the click listener cannot be bound.
pub fn setup_skip_links<S: UiSurface>(
    surface: &Rc<S>,
    config: &Rc<UiConfig>,
    bindings: &mut Bindings,
) -> Result<()> {
    let Some(link) = surface.query(&config.selectors.skip_link) else {
        debug!("no skip link on page");
        return Ok(());
    };

    let handler = {
        let surface = Rc::clone(surface);
        let link = link.clone();
        move |event: &mut DomEvent<S::Element>| {
            event.prevent_default();
            let target = surface
                .attribute(&link, "href")
                .as_deref()
                .and_then(fragment_id)
                .and_then(|id| surface.element_by_id(id));
            if let Some(target) = target {
                surface.focus(&target);
                surface.scroll_into_view(&target);
            }
        }
    };
    bindings.push(surface.listen(Target::Element(&link), EventKind::Click, Box::new(handler))?);
    Ok(())
}

/// Track keyboard vs. mouse modality on `<body>` and mark focused controls.
///
/// # Errors
/// Fails when a document listener cannot be bound.
pub fn setup_focus_management<S: UiSurface>(
    surface: &Rc<S>,
    config: &Rc<UiConfig>,
    bindings: &mut Bindings,
) -> Result<()> {
    let on_key = {
        let surface = Rc::clone(surface);
        let config = Rc::clone(config);
        move |event: &mut DomEvent<S::Element>| {
            if event.key == Key::Tab
                && let Some(body) = surface.body()
            {
                surface.add_class(&body, &config.classes.keyboard_navigation);
            }
        }
    };
    bindings.push(surface.listen(Target::Document, EventKind::KeyDown, Box::new(on_key))?);

    let on_mouse = {
        let surface = Rc::clone(surface);
        let config = Rc::clone(config);
        move |_: &mut DomEvent<S::Element>| {
            if let Some(body) = surface.body() {
                surface.remove_class(&body, &config.classes.keyboard_navigation);
            }
        }
    };
    bindings.push(surface.listen(Target::Document, EventKind::MouseDown, Box::new(on_mouse))?);

    let on_focus_in = {
        let surface = Rc::clone(surface);
        let config = Rc::clone(config);
        move |event: &mut DomEvent<S::Element>| {
            let Some(target) = event.target.as_ref() else {
                return;
            };
            let marked = surface.has_class(target, &config.classes.focus_outline_trigger);
            if wants_focus_outline(&surface.tag_name(target), marked) {
                surface.add_class(target, &config.classes.focus_outline);
            }
        }
    };
    bindings.push(surface.listen(Target::Document, EventKind::FocusIn, Box::new(on_focus_in))?);

    let on_focus_out = {
        let surface = Rc::clone(surface);
        let config = Rc::clone(config);
        move |event: &mut DomEvent<S::Element>| {
            if let Some(target) = event.target.as_ref() {
                surface.remove_class(target, &config.classes.focus_outline);
            }
        }
    };
    bindings.push(surface.listen(Target::Document, EventKind::FocusOut, Box::new(on_focus_out))?);
    Ok(())
}

/// Mirror `prefers-reduced-motion` into a body class.
///
/// # Errors
/// Fails when the media query cannot be watched. The state at load is
/// applied regardless.
pub fn setup_reduced_motion<S: UiSurface>(
    surface: &Rc<S>,
    config: &Rc<UiConfig>,
    bindings: &mut Bindings,
) -> Result<()> {
    mirror_media(
        surface,
        &config.media.reduced_motion,
        &config.classes.reduce_motion,
        bindings,
    )
}

/// Mirror `prefers-contrast` into a body class.
///
/// # Errors
/// Fails when the media query cannot be watched.
pub fn setup_high_contrast<S: UiSurface>(
    surface: &Rc<S>,
    config: &Rc<UiConfig>,
    bindings: &mut Bindings,
) -> Result<()> {
    mirror_media(
        surface,
        &config.media.high_contrast,
        &config.classes.high_contrast,
        bindings,
    )
}

fn mirror_media<S: UiSurface>(
    surface: &Rc<S>,
    query: &str,
    class: &str,
    bindings: &mut Bindings,
) -> Result<()> {
    let apply = {
        let surface = Rc::clone(surface);
        let class = class.to_owned();
        move |matches: bool| {
            if let Some(body) = surface.body() {
                surface.set_class(&body, &class, matches);
            }
        }
    };
    apply(surface.media_matches(query));
    bindings.push(surface.watch_media(query, Box::new(apply))?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_ids() {
        assert_eq!(fragment_id("#main"), Some("main"));
        assert_eq!(fragment_id("/about#team"), Some("team"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("/plain"), None);
    }

    #[test]
    fn focus_outline_tags() {
        assert!(wants_focus_outline("BUTTON", false));
        assert!(wants_focus_outline("a", false));
        assert!(wants_focus_outline("INPUT", false));
        assert!(wants_focus_outline("DIV", true));
        assert!(!wants_focus_outline("DIV", false));
        assert!(!wants_focus_outline("SELECT", false));
    }
}
