//! Document adapter capability.
//!
//! Components never reach for an ambient `window`/`document`. They are handed a
//! [`DocumentAdapter`] and talk to the host page only through it:
//!
//! - [`MemoryDocument`]: in-memory tree used by tests and the desktop playground
//! - `WebDocument`: the browser document via `web-sys` (wasm32 only)
//!
//! Everything here is single threaded. Handles are `Rc`, listeners are
//! `FnMut`, and there are no suspension points.

mod memory;
mod selector;
#[cfg(target_arch = "wasm32")]
mod web;

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::error::DocumentResult;

pub use memory::{MemoryDocument, NodeId};
pub use selector::Selector;
#[cfg(target_arch = "wasm32")]
pub use web::WebDocument;

/// Shared handle to the document capability.
pub type DocumentHandle = Rc<dyn DocumentAdapter>;

/// Callback invoked for every `keydown` on the document.
pub type KeyListener = Box<dyn FnMut(&KeyEvent)>;

/// The operations PageKit performs on a host document.
pub trait DocumentAdapter {
    /// Add a class to the document root (`<html>`).
    fn add_root_class(&self, class: &str);

    /// Remove a class from the document root.
    fn remove_root_class(&self, class: &str);

    /// Whether the document root carries `class`.
    fn has_root_class(&self, class: &str) -> bool;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &Selector) -> Vec<NodeRef>;

    /// First descendant of `scope` matching `selector`.
    fn query_within(&self, scope: &NodeRef, selector: &Selector) -> Option<NodeRef>;

    /// Whether any element matches `selector`.
    fn contains(&self, selector: &Selector) -> bool {
        !self.query_all(selector).is_empty()
    }

    /// Create an element from `spec` and insert it as the first child of `<body>`.
    fn prepend_to_body(&self, spec: &ElementSpec) -> DocumentResult<NodeRef>;

    /// Invoke the element's primary activation.
    fn click(&self, node: &NodeRef);

    /// Subscribe to document-scoped `keydown` events until the guard is dropped.
    fn add_key_listener(&self, listener: KeyListener) -> ListenerGuard;
}

/// Opaque element handle, meaningful only to the adapter that produced it.
#[derive(Clone)]
pub struct NodeRef(Rc<dyn Any>);

impl NodeRef {
    pub fn new<T: Any>(node: T) -> Self {
        Self(Rc::new(node))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.downcast_ref::<NodeId>() {
            Some(id) => f.debug_tuple("NodeRef").field(id).finish(),
            None => f.write_str("NodeRef(..)"),
        }
    }
}

/// Description of an element to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSpec {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
}

impl ElementSpec {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            text: None,
        }
    }

    /// Add an attribute. Later values for the same name win.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// A `keydown` event as seen by listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// `Escape`, or the legacy `Esc` some older engines report.
    pub fn is_escape(&self) -> bool {
        self.key == "Escape" || self.key == "Esc"
    }
}

/// Scoped ownership of a document event subscription.
///
/// Dropping the guard releases the subscription. Release happens exactly once.
#[must_use = "dropping the guard immediately removes the listener"]
pub struct ListenerGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl ListenerGuard {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A guard with nothing to release.
    pub fn noop() -> Self {
        Self { release: None }
    }

    /// Release the subscription now.
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("active", &self.release.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn escape_detection() {
        assert!(KeyEvent::new("Escape").is_escape());
        assert!(KeyEvent::new("Esc").is_escape());
        assert!(!KeyEvent::new("Enter").is_escape());
        assert!(!KeyEvent::new("escape").is_escape());
    }

    #[test]
    fn element_spec_attr_overwrites() {
        let spec = ElementSpec::new("a")
            .attr("href", "#a")
            .attr("tabindex", "0")
            .attr("href", "#b");
        assert_eq!(
            spec.attributes,
            vec![
                ("href".to_string(), "#b".to_string()),
                ("tabindex".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn guard_releases_once() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let guard = ListenerGuard::new(move || c.set(c.get() + 1));
        guard.release();
        assert_eq!(count.get(), 1);

        let c = count.clone();
        drop(ListenerGuard::new(move || c.set(c.get() + 1)));
        assert_eq!(count.get(), 2);
    }
}
