//! In-memory document.
//!
//! A small element tree with a root class set, a `<body>`, a keydown listener
//! registry and counters for mutations and clicks. Cloning shares the same
//! tree, so a test (or the playground inspector) can keep a concrete handle
//! while components hold a `DocumentHandle` to the same document.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::{Rc, Weak};

use super::{DocumentAdapter, ElementSpec, KeyEvent, KeyListener, ListenerGuard, NodeRef, Selector};
use crate::error::{DocumentError, DocumentResult};

/// Index of a node in a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

type ClickAction = Rc<dyn Fn(&MemoryDocument)>;

struct Node {
    tag: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    clicks: usize,
}

#[derive(Default)]
struct Inner {
    nodes: Vec<Node>,
    body: Option<NodeId>,
    root_classes: Vec<String>,
    listeners: BTreeMap<u64, Rc<RefCell<KeyListener>>>,
    next_listener: u64,
    click_actions: HashMap<NodeId, ClickAction>,
    mutations: u64,
}

impl Inner {
    fn create(&mut self, spec: &ElementSpec, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            tag: spec.tag.clone(),
            attributes: spec.attributes.clone(),
            text: spec.text.clone(),
            parent,
            children: Vec::new(),
            clicks: 0,
        });
        id
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Descendants of `scope` in document order, excluding `scope` itself.
    fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = match self.node(scope) {
            Some(node) => node.children.iter().rev().copied().collect(),
            None => return out,
        };
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(node) = self.node(id) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    /// Whether `id` is reachable from the body.
    fn is_attached(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(cur) = current {
            if Some(cur) == self.body {
                return true;
            }
            current = self.node(cur).and_then(|n| n.parent);
        }
        false
    }
}

/// In-memory [`DocumentAdapter`].
#[derive(Clone)]
pub struct MemoryDocument {
    inner: Rc<RefCell<Inner>>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// An empty document with a `<body>`.
    pub fn new() -> Self {
        let doc = Self::without_body();
        {
            let mut inner = doc.inner.borrow_mut();
            let body = inner.create(&ElementSpec::new("body"), None);
            inner.body = Some(body);
        }
        doc
    }

    /// A document whose `<body>` has not been parsed yet.
    pub fn without_body() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner::default())),
        }
    }

    fn id_of(node: &NodeRef) -> Option<NodeId> {
        node.downcast_ref::<NodeId>().copied()
    }

    /// Append an element as the last child of `<body>`.
    pub fn append_to_body(&self, spec: ElementSpec) -> DocumentResult<NodeRef> {
        let body = self.inner.borrow().body.ok_or(DocumentError::MissingBody)?;
        self.insert_child(body, spec, false)
    }

    /// Append an element as the last child of `parent`.
    pub fn append_child(&self, parent: &NodeRef, spec: ElementSpec) -> DocumentResult<NodeRef> {
        let parent = Self::id_of(parent)
            .ok_or_else(|| DocumentError::Dom("foreign node handle".to_string()))?;
        self.insert_child(parent, spec, false)
    }

    fn insert_child(&self, parent: NodeId, spec: ElementSpec, first: bool) -> DocumentResult<NodeRef> {
        let mut inner = self.inner.borrow_mut();
        if inner.node(parent).is_none() {
            return Err(DocumentError::Dom(format!("unknown node {:?}", parent)));
        }
        let id = inner.create(&spec, Some(parent));
        let children = &mut inner.nodes[parent.0].children;
        if first {
            children.insert(0, id);
        } else {
            children.push(id);
        }
        inner.mutations += 1;
        Ok(NodeRef::new(id))
    }

    /// Detach a node (and its subtree) from its parent.
    pub fn remove(&self, node: &NodeRef) {
        let Some(id) = Self::id_of(node) else { return };
        let mut inner = self.inner.borrow_mut();
        let Some(parent) = inner.node(id).and_then(|n| n.parent) else {
            return;
        };
        inner.nodes[parent.0].children.retain(|c| *c != id);
        inner.nodes[id.0].parent = None;
        inner.mutations += 1;
    }

    /// Set (or overwrite) an attribute.
    pub fn set_attribute(&self, node: &NodeRef, name: &str, value: &str) {
        let Some(id) = Self::id_of(node) else { return };
        let mut inner = self.inner.borrow_mut();
        let Some(n) = inner.nodes.get_mut(id.0) else { return };
        match n.attributes.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value.to_string(),
            None => n.attributes.push((name.to_string(), value.to_string())),
        }
        inner.mutations += 1;
    }

    /// Remove an attribute if present.
    pub fn remove_attribute(&self, node: &NodeRef, name: &str) {
        let Some(id) = Self::id_of(node) else { return };
        let mut inner = self.inner.borrow_mut();
        let Some(n) = inner.nodes.get_mut(id.0) else { return };
        let before = n.attributes.len();
        n.attributes.retain(|(k, _)| k != name);
        if n.attributes.len() != before {
            inner.mutations += 1;
        }
    }

    pub fn attribute(&self, node: &NodeRef, name: &str) -> Option<String> {
        let id = Self::id_of(node)?;
        let inner = self.inner.borrow();
        inner
            .node(id)?
            .attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }

    pub fn tag(&self, node: &NodeRef) -> Option<String> {
        let id = Self::id_of(node)?;
        self.inner.borrow().node(id).map(|n| n.tag.clone())
    }

    pub fn text(&self, node: &NodeRef) -> Option<String> {
        let id = Self::id_of(node)?;
        self.inner.borrow().node(id).and_then(|n| n.text.clone())
    }

    /// Whether the node is still part of the document.
    pub fn is_attached(&self, node: &NodeRef) -> bool {
        Self::id_of(node).is_some_and(|id| self.inner.borrow().is_attached(id))
    }

    /// Direct children of `<body>`, in order.
    pub fn body_children(&self) -> Vec<NodeRef> {
        let inner = self.inner.borrow();
        inner
            .body
            .and_then(|b| inner.node(b))
            .map(|b| b.children.iter().copied().map(NodeRef::new).collect())
            .unwrap_or_default()
    }

    pub fn root_classes(&self) -> Vec<String> {
        self.inner.borrow().root_classes.clone()
    }

    /// Run `action` whenever `node` is clicked.
    pub fn on_click(&self, node: &NodeRef, action: impl Fn(&MemoryDocument) + 'static) {
        if let Some(id) = Self::id_of(node) {
            self.inner
                .borrow_mut()
                .click_actions
                .insert(id, Rc::new(action));
        }
    }

    pub fn click_count(&self, node: &NodeRef) -> usize {
        Self::id_of(node)
            .and_then(|id| self.inner.borrow().node(id).map(|n| n.clicks))
            .unwrap_or(0)
    }

    /// Deliver a `keydown` to every live listener. Returns how many ran.
    ///
    /// Listeners released by an earlier listener during the same dispatch are
    /// skipped, as is a listener already running further up the stack.
    pub fn dispatch_key(&self, key: &str) -> usize {
        let event = KeyEvent::new(key);
        // Snapshot so listeners may touch the document (or unsubscribe) while running.
        let listeners: Vec<_> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect();

        let mut ran = 0;
        for (id, listener) in listeners {
            if !self.inner.borrow().listeners.contains_key(&id) {
                continue;
            }
            let Ok(mut listener) = listener.try_borrow_mut() else {
                continue;
            };
            (*listener)(&event);
            ran += 1;
        }
        ran
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Number of structural, attribute and root-class changes so far.
    pub fn mutation_count(&self) -> u64 {
        self.inner.borrow().mutations
    }

    /// Indented one-line-per-element view of the body, for inspection.
    pub fn outline(&self) -> Vec<String> {
        let inner = self.inner.borrow();
        let Some(body) = inner.body else {
            return Vec::new();
        };
        let mut lines = Vec::new();
        let mut stack: Vec<(NodeId, usize)> = inner
            .node(body)
            .map(|b| b.children.iter().rev().map(|c| (*c, 0)).collect())
            .unwrap_or_default();
        while let Some((id, depth)) = stack.pop() {
            let Some(node) = inner.node(id) else { continue };
            let mut line = format!("{}<{}", "  ".repeat(depth), node.tag);
            for (k, v) in &node.attributes {
                if v.is_empty() {
                    line.push_str(&format!(" {}", k));
                } else {
                    line.push_str(&format!(" {}=\"{}\"", k, v));
                }
            }
            line.push('>');
            if let Some(text) = &node.text {
                line.push_str(text);
            }
            lines.push(line);
            stack.extend(node.children.iter().rev().map(|c| (*c, depth + 1)));
        }
        lines
    }
}

impl DocumentAdapter for MemoryDocument {
    fn add_root_class(&self, class: &str) {
        let mut inner = self.inner.borrow_mut();
        if !inner.root_classes.iter().any(|c| c == class) {
            inner.root_classes.push(class.to_string());
            inner.mutations += 1;
        }
    }

    fn remove_root_class(&self, class: &str) {
        let mut inner = self.inner.borrow_mut();
        let before = inner.root_classes.len();
        inner.root_classes.retain(|c| c != class);
        if inner.root_classes.len() != before {
            inner.mutations += 1;
        }
    }

    fn has_root_class(&self, class: &str) -> bool {
        self.inner.borrow().root_classes.iter().any(|c| c == class)
    }

    fn query_all(&self, selector: &Selector) -> Vec<NodeRef> {
        let inner = self.inner.borrow();
        let Some(body) = inner.body else {
            return Vec::new();
        };
        inner
            .descendants(body)
            .into_iter()
            .filter(|id| {
                inner
                    .node(*id)
                    .is_some_and(|n| selector.matches(&n.attributes))
            })
            .map(NodeRef::new)
            .collect()
    }

    fn query_within(&self, scope: &NodeRef, selector: &Selector) -> Option<NodeRef> {
        let scope = Self::id_of(scope)?;
        let inner = self.inner.borrow();
        inner
            .descendants(scope)
            .into_iter()
            .find(|id| {
                inner
                    .node(*id)
                    .is_some_and(|n| selector.matches(&n.attributes))
            })
            .map(NodeRef::new)
    }

    fn prepend_to_body(&self, spec: &ElementSpec) -> DocumentResult<NodeRef> {
        let body = self.inner.borrow().body.ok_or(DocumentError::MissingBody)?;
        self.insert_child(body, spec.clone(), true)
    }

    fn click(&self, node: &NodeRef) {
        let Some(id) = Self::id_of(node) else { return };
        let action = {
            let mut inner = self.inner.borrow_mut();
            let Some(n) = inner.nodes.get_mut(id.0) else { return };
            n.clicks += 1;
            inner.click_actions.get(&id).cloned()
        };
        if let Some(action) = action {
            action(self);
        }
    }

    fn add_key_listener(&self, listener: KeyListener) -> ListenerGuard {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_listener;
            inner.next_listener += 1;
            inner.listeners.insert(id, Rc::new(RefCell::new(listener)));
            id
        };
        let weak: Weak<RefCell<Inner>> = Rc::downgrade(&self.inner);
        ListenerGuard::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.remove(&id);
            }
        })
    }
}
