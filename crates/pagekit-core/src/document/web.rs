//! Browser document adapter (wasm32).

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

use super::{DocumentAdapter, ElementSpec, KeyEvent, KeyListener, ListenerGuard, NodeRef, Selector};
use crate::error::{DocumentError, DocumentResult};

/// [`DocumentAdapter`] over `window.document`.
#[derive(Clone)]
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    /// The current window's document, if there is one.
    pub fn current() -> Option<Self> {
        web_sys::window()
            .and_then(|w| w.document())
            .map(|document| Self { document })
    }

    fn root(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn element(node: &NodeRef) -> Option<&Element> {
        node.downcast_ref::<Element>()
    }
}

fn collect(list: web_sys::NodeList) -> Vec<NodeRef> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .map(NodeRef::new)
        .collect()
}

impl DocumentAdapter for WebDocument {
    fn add_root_class(&self, class: &str) {
        if let Some(root) = self.root() {
            let _ = root.class_list().add_1(class);
        }
    }

    fn remove_root_class(&self, class: &str) {
        if let Some(root) = self.root() {
            let _ = root.class_list().remove_1(class);
        }
    }

    fn has_root_class(&self, class: &str) -> bool {
        self.root()
            .map(|r| r.class_list().contains(class))
            .unwrap_or(false)
    }

    fn query_all(&self, selector: &Selector) -> Vec<NodeRef> {
        if selector.is_empty() {
            return Vec::new();
        }
        self.document
            .query_selector_all(&selector.to_css())
            .map(collect)
            .unwrap_or_default()
    }

    fn query_within(&self, scope: &NodeRef, selector: &Selector) -> Option<NodeRef> {
        if selector.is_empty() {
            return None;
        }
        Self::element(scope)?
            .query_selector(&selector.to_css())
            .ok()
            .flatten()
            .map(NodeRef::new)
    }

    fn prepend_to_body(&self, spec: &ElementSpec) -> DocumentResult<NodeRef> {
        let body = self.document.body().ok_or(DocumentError::MissingBody)?;
        let element = self
            .document
            .create_element(&spec.tag)
            .map_err(|e| DocumentError::Dom(format!("{:?}", e)))?;
        for (name, value) in &spec.attributes {
            element
                .set_attribute(name, value)
                .map_err(|e| DocumentError::Dom(format!("{:?}", e)))?;
        }
        if let Some(text) = &spec.text {
            element.set_text_content(Some(text));
        }
        body.insert_before(&element, body.first_child().as_ref())
            .map_err(|e| DocumentError::Dom(format!("{:?}", e)))?;
        Ok(NodeRef::new(element))
    }

    fn click(&self, node: &NodeRef) {
        if let Some(el) = Self::element(node).and_then(|e| e.dyn_ref::<HtmlElement>()) {
            el.click();
        }
    }

    fn add_key_listener(&self, mut listener: KeyListener) -> ListenerGuard {
        let subscription = EventListener::new(&self.document, "keydown", move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                listener(&KeyEvent::new(event.key()));
            }
        });
        // gloo unregisters the listener when it is dropped.
        ListenerGuard::new(move || drop(subscription))
    }
}
