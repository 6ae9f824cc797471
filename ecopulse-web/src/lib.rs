#![forbid(unsafe_code)]
//! EcoPulse page behaviour for the browser.
//!
//! The wasm start hook waits for the document to finish parsing, then wires
//! every component through a single [`Page`]. `init` is also exported to
//! JavaScript for pages that swap markup in and need the wiring redone.

use std::cell::RefCell;

use ecopulse_ui::Page;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, prelude::*};

pub mod config;
pub mod dom;
pub mod surface;

pub use surface::WebSurface;

thread_local! {
    static PAGE: RefCell<Option<Page<WebSurface>>> = const { RefCell::new(None) };
}

/// Wire (or re-wire) the page. Safe to call any number of times.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = init))]
pub fn init_page() {
    PAGE.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            let Some(surface) = WebSurface::new() else {
                dom::console_error("no browser window available");
                return;
            };
            *slot = Some(Page::new(surface, config::load_page_config()));
        }
        if let Some(page) = slot.as_mut()
            && let Err(err) = page.init()
        {
            log::error!("ecopulse: page partially initialized: {err}");
        }
    });
}

/// Release every listener the page holds.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = teardown))]
pub fn teardown_page() {
    PAGE.with(|slot| {
        if let Some(page) = slot.borrow_mut().as_mut() {
            page.teardown();
        }
    });
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    let Some(document) = dom::document() else {
        return;
    };
    if document.ready_state() != "loading" {
        init_page();
        return;
    }

    // Wait for DOMContentLoaded; the listener removes itself after one call.
    let options = web_sys::AddEventListenerOptions::new();
    options.set_once(true);
    let on_ready = Closure::once_into_js(init_page);
    if let Err(err) = document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        on_ready.unchecked_ref(),
        &options,
    ) {
        dom::console_error(&dom::js_error_message(&err));
    }
}
