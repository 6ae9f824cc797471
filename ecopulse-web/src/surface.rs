//! [`UiSurface`] backed by the browser DOM through `web-sys`.

use ecopulse_ui::{
    DomEvent, EventKind, Handler, IntersectionEntry, IntersectionHandler, Key, MediaHandler,
    Observation, Result, Subscription, Target, UiError, UiSurface,
};
use js_sys::Array;
use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventInit, EventTarget, HtmlElement,
    HtmlInputElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    KeyboardEvent, MediaQueryList, MediaQueryListEvent, Node, NodeList, ScrollBehavior,
    ScrollIntoViewOptions, ScrollToOptions, Window,
};

use crate::dom::{self, js_error_message};

pub struct WebSurface {
    window: Window,
    document: Document,
}

impl WebSurface {
    /// Bind to the global window; `None` outside a browser.
    #[must_use]
    pub fn new() -> Option<Self> {
        let window = dom::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    fn event_target(&self, target: Target<'_, Element>) -> EventTarget {
        match target {
            Target::Window => self.window.clone().into(),
            Target::Document => self.document.clone().into(),
            Target::Element(element) => element.clone().into(),
        }
    }
}

fn warn_js(context: &str, err: &JsValue) {
    warn!("{context}: {}", js_error_message(err));
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|idx| list.get(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn to_dom_event(kind: EventKind, event: &Event) -> DomEvent<Element> {
    let target = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok());
    let dom_event = DomEvent::new(kind, target);
    match event.dyn_ref::<KeyboardEvent>() {
        Some(key_event) => dom_event.with_key(Key::parse(&key_event.key()), key_event.shift_key()),
        None => dom_event,
    }
}

impl UiSurface for WebSurface {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document
            .query_selector(selector)
            .inspect_err(|err| warn_js(selector, err))
            .ok()
            .flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        self.document
            .query_selector_all(selector)
            .inspect_err(|err| warn_js(selector, err))
            .map(|list| elements(&list))
            .unwrap_or_default()
    }

    fn query_within(&self, root: &Element, selector: &str) -> Vec<Element> {
        root.query_selector_all(selector)
            .inspect_err(|err| warn_js(selector, err))
            .map(|list| elements(&list))
            .unwrap_or_default()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Into::into)
    }

    fn tag_name(&self, element: &Element) -> String {
        element.tag_name()
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn add_class(&self, element: &Element, class: &str) {
        if let Err(err) = element.class_list().add_1(class) {
            warn_js("classList.add", &err);
        }
    }

    fn remove_class(&self, element: &Element, class: &str) {
        if let Err(err) = element.class_list().remove_1(class) {
            warn_js("classList.remove", &err);
        }
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        let node: &Node = node;
        ancestor.contains(Some(node))
    }

    fn next_sibling_element(&self, element: &Element) -> Option<Element> {
        element.next_element_sibling()
    }

    fn focus(&self, element: &Element) {
        if let Some(el) = element.dyn_ref::<HtmlElement>()
            && let Err(err) = el.focus()
        {
            warn_js("focus", &err);
        }
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn input_value(&self, element: &Element) -> Option<String> {
        element.dyn_ref::<HtmlInputElement>().map(HtmlInputElement::value)
    }

    fn set_input_value(&self, element: &Element, value: &str) {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        }
    }

    fn dispatch_input(&self, element: &Element) {
        let init = EventInit::new();
        init.set_bubbles(true);
        let dispatched = Event::new_with_event_init_dict("input", &init)
            .and_then(|event| element.dispatch_event(&event));
        if let Err(err) = dispatched {
            warn_js("dispatch input", &err);
        }
    }

    fn scroll_into_view(&self, element: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn current_year(&self) -> i32 {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or_default()
    }

    fn media_matches(&self, query: &str) -> bool {
        self.window
            .match_media(query)
            .ok()
            .flatten()
            .is_some_and(|list| list.matches())
    }

    fn listen(
        &self,
        target: Target<'_, Element>,
        kind: EventKind,
        mut handler: Handler<Element>,
    ) -> Result<Subscription> {
        let target = self.event_target(target);
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let mut dom_event = to_dom_event(kind, &event);
            handler(&mut dom_event);
            if dom_event.default_prevented() {
                event.prevent_default();
            }
            if dom_event.propagation_stopped() {
                event.stop_propagation();
            }
        });

        let options = AddEventListenerOptions::new();
        options.set_passive(kind.is_passive());
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind.as_str(),
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|err| UiError::Bind {
                kind,
                message: js_error_message(&err),
            })?;

        Ok(Subscription::new(move || {
            if let Err(err) = target
                .remove_event_listener_with_callback(kind.as_str(), callback.as_ref().unchecked_ref())
            {
                warn_js("removeEventListener", &err);
            }
        }))
    }

    fn watch_media(&self, query: &str, mut handler: MediaHandler) -> Result<Subscription> {
        let media_error = |message: String| UiError::Media {
            query: query.to_owned(),
            message,
        };
        let list = self
            .window
            .match_media(query)
            .map_err(|err| media_error(js_error_message(&err)))?
            .ok_or_else(|| media_error("matchMedia returned no list".into()))?;

        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let matches = match event.dyn_ref::<MediaQueryListEvent>() {
                Some(change) => change.matches(),
                None => event
                    .target()
                    .and_then(|target| target.dyn_into::<MediaQueryList>().ok())
                    .is_some_and(|list| list.matches()),
            };
            handler(matches);
        });
        list.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
            .map_err(|err| media_error(js_error_message(&err)))?;

        Ok(Subscription::new(move || {
            if let Err(err) =
                list.remove_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
            {
                warn_js("MediaQueryList.removeEventListener", &err);
            }
        }))
    }

    fn observe_intersection(
        &self,
        targets: &[Element],
        threshold: f64,
        mut handler: IntersectionHandler<Element>,
    ) -> Result<Subscription> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let report = IntersectionEntry {
                        target: entry.target(),
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    };
                    if handler(&report) == Observation::Unobserve {
                        observer.unobserve(&report.target);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|err| UiError::Observe(js_error_message(&err)))?;
        for target in targets {
            observer.observe(target);
        }

        Ok(Subscription::new(move || {
            observer.disconnect();
            drop(callback);
        }))
    }
}
