use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document of the global window.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Readable text for a rejected DOM call.
///
/// Binding failures usually arrive as `DOMException`s, whose name
/// (`SyntaxError`, `NotSupportedError`, ...) says more than the message alone.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => {
            let name = String::from(err.name());
            let message = String::from(err.message());
            if name.is_empty() || name == "Error" {
                message
            } else {
                format!("{name}: {message}")
            }
        }
        None => format!("{value:?}"),
    }
}

/// Log straight to the browser console, bypassing `log`.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(format!("ecopulse: {message}")));
}
