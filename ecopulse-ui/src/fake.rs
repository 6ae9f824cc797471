//! In-memory [`UiSurface`] for exercising components without a browser.
//!
//! The fake models a small element tree rooted at `<body>`, bubbling event
//! dispatch (element, ancestors, then document), focus transfer with
//! `focusin`/`focusout`, media query state, and intersection observers that
//! report whatever visibility a test sets. Bindings can be made to fail so
//! partial wiring is observable.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::error::{Result, UiError};
use crate::event::{
    DomEvent, EventKind, Handler, IntersectionEntry, IntersectionHandler, MediaHandler,
    Observation, Target,
};
use crate::keys::Key;
use crate::subscription::Subscription;
use crate::surface::UiSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

/// A smooth scroll the page asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRequest {
    Top,
    IntoView(NodeId),
}

#[derive(Debug, Default)]
struct Node {
    tag: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    text: String,
    value: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Window,
    Document,
    Node(NodeId),
}

struct Listener {
    id: u64,
    slot: Slot,
    kind: EventKind,
    passive: bool,
    handler: Rc<RefCell<Handler<NodeId>>>,
}

struct MediaWatcher {
    id: u64,
    query: String,
    handler: Rc<RefCell<MediaHandler>>,
}

struct Observer {
    id: u64,
    targets: Vec<NodeId>,
    threshold: f64,
    handler: Rc<RefCell<IntersectionHandler<NodeId>>>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<Listener>,
    media: Vec<MediaWatcher>,
    observers: Vec<Observer>,
}

impl Registry {
    fn issue_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

pub struct FakeSurface {
    nodes: RefCell<Vec<Node>>,
    registry: Rc<RefCell<Registry>>,
    focused: Cell<Option<NodeId>>,
    scroll_y: Cell<f64>,
    year: Cell<i32>,
    media: RefCell<BTreeMap<String, bool>>,
    scrolls: RefCell<Vec<ScrollRequest>>,
    failing_kinds: RefCell<Vec<EventKind>>,
    failing_queries: RefCell<Vec<String>>,
}

impl Default for FakeSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeSurface {
    /// An empty page holding only `<body>`.
    #[must_use]
    pub fn new() -> Self {
        let body = Node {
            tag: "BODY".into(),
            ..Node::default()
        };
        Self {
            nodes: RefCell::new(vec![body]),
            registry: Rc::new(RefCell::new(Registry::default())),
            focused: Cell::new(None),
            scroll_y: Cell::new(0.0),
            year: Cell::new(2024),
            media: RefCell::new(BTreeMap::new()),
            scrolls: RefCell::new(Vec::new()),
            failing_kinds: RefCell::new(Vec::new()),
            failing_queries: RefCell::new(Vec::new()),
        }
    }

    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a child element and return a builder for it.
    pub fn append(&self, parent: NodeId, tag: &str) -> NodeBuilder<'_> {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(Node {
            tag: tag.to_ascii_uppercase(),
            parent: Some(parent),
            ..Node::default()
        });
        nodes[parent.0].children.push(id);
        NodeBuilder {
            surface: self,
            node: id,
        }
    }

    pub fn set_attribute(&self, node: NodeId, name: &str, value: &str) {
        self.nodes.borrow_mut()[node.0]
            .attrs
            .insert(name.to_owned(), value.to_owned());
    }

    #[must_use]
    pub fn text(&self, node: NodeId) -> String {
        self.nodes.borrow()[node.0].text.clone()
    }

    #[must_use]
    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.nodes.borrow()[node.0].classes.clone()
    }

    #[must_use]
    pub fn focused(&self) -> Option<NodeId> {
        self.focused.get()
    }

    pub fn set_year(&self, year: i32) {
        self.year.set(year);
    }

    #[must_use]
    pub fn scroll_requests(&self) -> Vec<ScrollRequest> {
        self.scrolls.borrow().clone()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    #[must_use]
    pub fn media_watcher_count(&self) -> usize {
        self.registry.borrow().media.len()
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.registry.borrow().observers.len()
    }

    /// Passive flag of every live listener for `kind`, in registration order.
    #[must_use]
    pub fn passive_flags(&self, kind: EventKind) -> Vec<bool> {
        self.registry
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.kind == kind)
            .map(|l| l.passive)
            .collect()
    }

    /// Threshold each live observer was created with.
    #[must_use]
    pub fn observer_thresholds(&self) -> Vec<f64> {
        self.registry
            .borrow()
            .observers
            .iter()
            .map(|o| o.threshold)
            .collect()
    }

    /// Make every later `listen` for `kind` fail.
    pub fn fail_listen(&self, kind: EventKind) {
        self.failing_kinds.borrow_mut().push(kind);
    }

    /// Make every later `watch_media` for `query` fail.
    pub fn fail_media(&self, query: &str) {
        self.failing_queries.borrow_mut().push(query.to_owned());
    }

    /// Whether any live observer still watches `node`.
    #[must_use]
    pub fn is_observed(&self, node: NodeId) -> bool {
        self.registry
            .borrow()
            .observers
            .iter()
            .any(|o| o.targets.contains(&node))
    }

    /// Set the initial state of a media query without notifying watchers.
    pub fn preset_media(&self, query: &str, matches: bool) {
        self.media.borrow_mut().insert(query.to_owned(), matches);
    }

    /// Change a media query's state, notifying watchers when it flips.
    pub fn set_media(&self, query: &str, matches: bool) {
        let previous = self.media.borrow_mut().insert(query.to_owned(), matches);
        if previous == Some(matches) {
            return;
        }
        let handlers: Vec<_> = self
            .registry
            .borrow()
            .media
            .iter()
            .filter(|w| w.query == query)
            .map(|w| Rc::clone(&w.handler))
            .collect();
        for handler in handlers {
            (handler.borrow_mut())(matches);
        }
    }

    /// Move the window and fire `scroll` at window listeners.
    pub fn scroll_to(&self, y: f64) {
        self.scroll_y.set(y);
        let mut event = DomEvent::new(EventKind::Scroll, None);
        self.run_slot(Slot::Window, &mut event);
    }

    /// Report `node` as `ratio` visible to every observer watching it.
    pub fn set_visibility(&self, node: NodeId, ratio: f64) {
        let observers: Vec<_> = self
            .registry
            .borrow()
            .observers
            .iter()
            .filter(|o| o.targets.contains(&node))
            .map(|o| (o.id, Rc::clone(&o.handler)))
            .collect();
        let entry = IntersectionEntry {
            target: node,
            is_intersecting: ratio > 0.0,
            ratio,
        };
        for (id, handler) in observers {
            if (handler.borrow_mut())(&entry) == Observation::Unobserve {
                let mut registry = self.registry.borrow_mut();
                if let Some(observer) = registry.observers.iter_mut().find(|o| o.id == id) {
                    observer.targets.retain(|t| *t != node);
                }
            }
        }
    }

    pub fn click(&self, node: NodeId) -> DomEvent<NodeId> {
        self.dispatch(node, DomEvent::new(EventKind::Click, Some(node)))
    }

    pub fn mouse_down(&self, node: NodeId) -> DomEvent<NodeId> {
        self.dispatch(node, DomEvent::new(EventKind::MouseDown, Some(node)))
    }

    pub fn key_down(&self, node: NodeId, key: &str) -> DomEvent<NodeId> {
        self.press(node, key, false)
    }

    pub fn press(&self, node: NodeId, key: &str, shift: bool) -> DomEvent<NodeId> {
        let event = DomEvent::new(EventKind::KeyDown, Some(node)).with_key(Key::parse(key), shift);
        self.dispatch(node, event)
    }

    /// Bubble `event` from `node` through its ancestors to the document.
    pub fn dispatch(&self, node: NodeId, mut event: DomEvent<NodeId>) -> DomEvent<NodeId> {
        let mut path = vec![Slot::Node(node)];
        let mut cursor = self.nodes.borrow()[node.0].parent;
        while let Some(parent) = cursor {
            path.push(Slot::Node(parent));
            cursor = self.nodes.borrow()[parent.0].parent;
        }
        path.push(Slot::Document);

        for slot in path {
            self.run_slot(slot, &mut event);
            if event.propagation_stopped() {
                break;
            }
        }
        event
    }

    fn run_slot(&self, slot: Slot, event: &mut DomEvent<NodeId>) {
        let handlers: Vec<_> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.slot == slot && l.kind == event.kind)
            .map(|l| Rc::clone(&l.handler))
            .collect();
        for handler in handlers {
            (handler.borrow_mut())(event);
        }
    }

    fn preorder(&self, from: NodeId, out: &mut Vec<NodeId>) {
        let children = self.nodes.borrow()[from.0].children.clone();
        for child in children {
            out.push(child);
            self.preorder(child, out);
        }
    }

    fn matches(&self, node: NodeId, selector: &Selector) -> bool {
        let nodes = self.nodes.borrow();
        let n = &nodes[node.0];
        selector
            .tag
            .as_ref()
            .is_none_or(|tag| tag.eq_ignore_ascii_case(&n.tag))
            && selector
                .id
                .as_ref()
                .is_none_or(|id| n.attrs.get("id") == Some(id))
            && selector.classes.iter().all(|c| n.classes.contains(c))
            && selector.attrs.iter().all(|(name, value)| match value {
                Some(value) => n.attrs.get(name) == Some(value),
                None => n.attrs.contains_key(name),
            })
    }

    fn select(&self, candidates: Vec<NodeId>, selector: &str) -> Vec<NodeId> {
        let Some(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        candidates
            .into_iter()
            .filter(|node| self.matches(*node, &selector))
            .collect()
    }

    fn all_nodes(&self) -> Vec<NodeId> {
        let mut out = vec![self.root()];
        self.preorder(self.root(), &mut out);
        out
    }
}

/// Fluent setup for a freshly appended element.
pub struct NodeBuilder<'a> {
    surface: &'a FakeSurface,
    node: NodeId,
}

impl NodeBuilder<'_> {
    #[must_use]
    pub fn id(self, id: &str) -> Self {
        self.surface.set_attribute(self.node, "id", id);
        self
    }

    #[must_use]
    pub fn class(self, class: &str) -> Self {
        self.surface.add_class(&self.node, class);
        self
    }

    #[must_use]
    pub fn attr(self, name: &str, value: &str) -> Self {
        self.surface.set_attribute(self.node, name, value);
        self
    }

    #[must_use]
    pub fn value(self, value: &str) -> Self {
        self.surface.set_input_value(&self.node, value);
        self
    }

    #[must_use]
    pub const fn node(&self) -> NodeId {
        self.node
    }
}

/// A single compound selector: `tag#id.class[attr="value"]`.
#[derive(Debug, Default)]
struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, Option<String>)>,
}

impl Selector {
    fn parse(raw: &str) -> Option<Self> {
        let chars: Vec<char> = raw.trim().chars().collect();
        let mut out = Self::default();
        let mut i = 0;

        let tag = take_ident(&chars, &mut i);
        if !tag.is_empty() {
            out.tag = Some(tag);
        }
        while i < chars.len() {
            let sigil = chars[i];
            i += 1;
            match sigil {
                '#' => out.id = Some(take_ident(&chars, &mut i)),
                '.' => out.classes.push(take_ident(&chars, &mut i)),
                '[' => {
                    let end = chars[i..].iter().position(|c| *c == ']')? + i;
                    let body: String = chars[i..end].iter().collect();
                    i = end + 1;
                    let attr = match body.split_once('=') {
                        Some((name, value)) => (
                            name.trim().to_owned(),
                            Some(value.trim().trim_matches(['"', '\'']).to_owned()),
                        ),
                        None => (body.trim().to_owned(), None),
                    };
                    out.attrs.push(attr);
                }
                _ => return None,
            }
        }
        Some(out)
    }
}

fn take_ident(chars: &[char], i: &mut usize) -> String {
    let start = *i;
    while *i < chars.len() && (chars[*i].is_ascii_alphanumeric() || matches!(chars[*i], '-' | '_'))
    {
        *i += 1;
    }
    chars[start..*i].iter().collect()
}

impl UiSurface for FakeSurface {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let nodes = self.nodes.borrow();
        self.all_nodes()
            .into_iter()
            .find(|node| nodes[node.0].attrs.get("id").map(String::as_str) == Some(id))
    }

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.select(self.all_nodes(), selector)
    }

    fn query_within(&self, root: &NodeId, selector: &str) -> Vec<NodeId> {
        let mut descendants = Vec::new();
        self.preorder(*root, &mut descendants);
        self.select(descendants, selector)
    }

    fn body(&self) -> Option<NodeId> {
        Some(self.root())
    }

    fn tag_name(&self, element: &NodeId) -> String {
        self.nodes.borrow()[element.0].tag.clone()
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[element.0].attrs.get(name).cloned()
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.nodes.borrow()[element.0]
            .classes
            .iter()
            .any(|c| c == class)
    }

    fn add_class(&self, element: &NodeId, class: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[element.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
    }

    fn remove_class(&self, element: &NodeId, class: &str) {
        self.nodes.borrow_mut()[element.0]
            .classes
            .retain(|c| c != class);
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        let mut cursor = Some(*node);
        while let Some(current) = cursor {
            if current == *ancestor {
                return true;
            }
            cursor = self.nodes.borrow()[current.0].parent;
        }
        false
    }

    fn next_sibling_element(&self, element: &NodeId) -> Option<NodeId> {
        let nodes = self.nodes.borrow();
        let parent = nodes[element.0].parent?;
        let siblings = &nodes[parent.0].children;
        let pos = siblings.iter().position(|s| s == element)?;
        siblings.get(pos + 1).copied()
    }

    fn focus(&self, element: &NodeId) {
        let previous = self.focused.get();
        if previous == Some(*element) {
            return;
        }
        if let Some(previous) = previous {
            self.dispatch(previous, DomEvent::new(EventKind::FocusOut, Some(previous)));
        }
        self.focused.set(Some(*element));
        self.dispatch(*element, DomEvent::new(EventKind::FocusIn, Some(*element)));
    }

    fn set_text(&self, element: &NodeId, text: &str) {
        self.nodes.borrow_mut()[element.0].text = text.to_owned();
    }

    fn input_value(&self, element: &NodeId) -> Option<String> {
        self.nodes.borrow()[element.0].value.clone()
    }

    fn set_input_value(&self, element: &NodeId, value: &str) {
        self.nodes.borrow_mut()[element.0].value = Some(value.to_owned());
    }

    fn dispatch_input(&self, element: &NodeId) {
        self.dispatch(*element, DomEvent::new(EventKind::Input, Some(*element)));
    }

    fn scroll_into_view(&self, element: &NodeId) {
        self.scrolls
            .borrow_mut()
            .push(ScrollRequest::IntoView(*element));
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn scroll_to_top(&self) {
        self.scrolls.borrow_mut().push(ScrollRequest::Top);
    }

    fn current_year(&self) -> i32 {
        self.year.get()
    }

    fn media_matches(&self, query: &str) -> bool {
        self.media.borrow().get(query).copied().unwrap_or(false)
    }

    fn listen(
        &self,
        target: Target<'_, NodeId>,
        kind: EventKind,
        handler: Handler<NodeId>,
    ) -> Result<Subscription> {
        if self.failing_kinds.borrow().contains(&kind) {
            return Err(UiError::Bind {
                kind,
                message: "listener rejected".into(),
            });
        }
        let slot = match target {
            Target::Window => Slot::Window,
            Target::Document => Slot::Document,
            Target::Element(node) => Slot::Node(*node),
        };
        let mut registry = self.registry.borrow_mut();
        let id = registry.issue_id();
        registry.listeners.push(Listener {
            id,
            slot,
            kind,
            passive: kind.is_passive(),
            handler: Rc::new(RefCell::new(handler)),
        });
        let weak = Rc::downgrade(&self.registry);
        Ok(Subscription::new(move || {
            detach(&weak, |r| r.listeners.retain(|l| l.id != id));
        }))
    }

    fn watch_media(&self, query: &str, handler: MediaHandler) -> Result<Subscription> {
        if self.failing_queries.borrow().iter().any(|q| q == query) {
            return Err(UiError::Media {
                query: query.to_owned(),
                message: "matchMedia unavailable".into(),
            });
        }
        let mut registry = self.registry.borrow_mut();
        let id = registry.issue_id();
        registry.media.push(MediaWatcher {
            id,
            query: query.to_owned(),
            handler: Rc::new(RefCell::new(handler)),
        });
        let weak = Rc::downgrade(&self.registry);
        Ok(Subscription::new(move || {
            detach(&weak, |r| r.media.retain(|w| w.id != id));
        }))
    }

    fn observe_intersection(
        &self,
        targets: &[NodeId],
        threshold: f64,
        handler: IntersectionHandler<NodeId>,
    ) -> Result<Subscription> {
        let mut registry = self.registry.borrow_mut();
        let id = registry.issue_id();
        registry.observers.push(Observer {
            id,
            targets: targets.to_vec(),
            threshold,
            handler: Rc::new(RefCell::new(handler)),
        });
        let weak = Rc::downgrade(&self.registry);
        Ok(Subscription::new(move || {
            detach(&weak, |r| r.observers.retain(|o| o.id != id));
        }))
    }
}

fn detach(registry: &Weak<RefCell<Registry>>, remove: impl FnOnce(&mut Registry)) {
    if let Some(registry) = registry.upgrade() {
        remove(&mut registry.borrow_mut());
    }
}
