//! Accessibility injector.
//!
//! Two behaviors installed together on mount:
//!
//! 1. **Skip link**: a "skip to main content" anchor inserted as the first
//!    child of `<body>`, at most once per document.
//! 2. **Escape closes dialogs**: a document-scoped `keydown` listener that, on
//!    Escape, activates the close control of every open dialog.
//!
//! The listener is owned by [`AccessibilityInjector`]; dropping it releases the
//! listener. The skip link belongs to the document once inserted and is never
//! removed.

use std::rc::Rc;

use crate::config::{DialogConfig, PageKitConfig, SkipLinkConfig};
use crate::document::{DocumentAdapter, DocumentHandle, ElementSpec, ListenerGuard, Selector};
use crate::error::DocumentError;

/// Result of [`ensure_skip_link`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipLinkOutcome {
    Inserted,
    AlreadyPresent,
    /// The document has no `<body>` yet
    NoBody,
    /// The host document rejected the insertion
    Failed,
}

/// Insert the skip link unless one pointing at the same target already exists.
pub fn ensure_skip_link(doc: &dyn DocumentAdapter, config: &SkipLinkConfig) -> SkipLinkOutcome {
    let href = config.href();
    if doc.contains(&Selector::attr_eq("href", href.as_str())) {
        return SkipLinkOutcome::AlreadyPresent;
    }

    let spec = ElementSpec::new("a")
        .attr("href", href.as_str())
        .attr("class", config.class.as_str())
        .attr("tabindex", "0")
        .text(config.label.as_str());

    match doc.prepend_to_body(&spec) {
        Ok(_) => {
            tracing::debug!(%href, "skip link inserted");
            SkipLinkOutcome::Inserted
        }
        Err(DocumentError::MissingBody) => SkipLinkOutcome::NoBody,
        Err(e) => {
            tracing::debug!(error = %e, "skip link insertion failed");
            SkipLinkOutcome::Failed
        }
    }
}

/// Activate the close control of every dialog. Returns the number activated.
///
/// Dialogs without a close control are skipped.
pub fn close_open_dialogs(doc: &dyn DocumentAdapter, config: &DialogConfig) -> usize {
    let mut activated = 0;
    for dialog in doc.query_all(&config.dialog) {
        if let Some(control) = doc.query_within(&dialog, &config.close_control) {
            doc.click(&control);
            activated += 1;
        }
    }
    if activated > 0 {
        tracing::debug!(activated, "escape closed dialogs");
    }
    activated
}

/// Installed accessibility behaviors.
///
/// Holds the Escape listener for as long as it lives.
#[derive(Debug)]
pub struct AccessibilityInjector {
    skip_link: SkipLinkOutcome,
    listener: Option<ListenerGuard>,
}

impl AccessibilityInjector {
    /// Ensure the skip link and subscribe the Escape handler.
    pub fn install(doc: &DocumentHandle, config: &PageKitConfig) -> Self {
        let skip_link = ensure_skip_link(doc.as_ref(), &config.skip_link);

        // The listener holds the document while registered in it; releasing the
        // guard breaks that cycle.
        let target = Rc::clone(doc);
        let dialogs = config.dialogs.clone();
        let listener = doc.add_key_listener(Box::new(move |event| {
            if event.is_escape() {
                close_open_dialogs(target.as_ref(), &dialogs);
            }
        }));
        tracing::debug!(?skip_link, "accessibility injector installed");

        Self {
            skip_link,
            listener: Some(listener),
        }
    }

    pub fn skip_link(&self) -> SkipLinkOutcome {
        self.skip_link
    }

    pub fn is_installed(&self) -> bool {
        self.listener.is_some()
    }

    /// Release the Escape listener now. Dropping does the same.
    pub fn uninstall(&mut self) {
        if let Some(listener) = self.listener.take() {
            listener.release();
            tracing::debug!("accessibility injector uninstalled");
        }
    }
}

impl Drop for AccessibilityInjector {
    fn drop(&mut self) {
        self.uninstall();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{KeyListener, MemoryDocument, NodeRef};
    use crate::error::DocumentResult;

    fn handle(doc: &MemoryDocument) -> DocumentHandle {
        Rc::new(doc.clone())
    }

    #[test]
    fn skip_link_is_first_and_focusable() {
        let doc = MemoryDocument::new();
        doc.append_to_body(ElementSpec::new("main").attr("id", "main-content"))
            .unwrap();

        let outcome = ensure_skip_link(&doc, &SkipLinkConfig::default());
        assert_eq!(outcome, SkipLinkOutcome::Inserted);

        let first = doc.body_children().remove(0);
        assert_eq!(doc.tag(&first).as_deref(), Some("a"));
        assert_eq!(doc.attribute(&first, "href").as_deref(), Some("#main-content"));
        assert_eq!(doc.attribute(&first, "tabindex").as_deref(), Some("0"));
        assert_eq!(doc.text(&first).as_deref(), Some("Skip to main content"));
    }

    #[test]
    fn existing_link_anywhere_suppresses_insertion() {
        let doc = MemoryDocument::new();
        let nav = doc.append_to_body(ElementSpec::new("nav")).unwrap();
        doc.append_child(&nav, ElementSpec::new("a").attr("href", "#main-content"))
            .unwrap();
        let before = doc.mutation_count();

        let outcome = ensure_skip_link(&doc, &SkipLinkConfig::default());
        assert_eq!(outcome, SkipLinkOutcome::AlreadyPresent);
        assert_eq!(doc.mutation_count(), before);
    }

    #[test]
    fn missing_body_is_a_noop() {
        let doc = MemoryDocument::without_body();
        assert_eq!(
            ensure_skip_link(&doc, &SkipLinkConfig::default()),
            SkipLinkOutcome::NoBody
        );
        assert_eq!(doc.mutation_count(), 0);
    }

    /// Delegates to a memory document but refuses every insertion.
    struct RejectingDocument(MemoryDocument);

    impl DocumentAdapter for RejectingDocument {
        fn add_root_class(&self, class: &str) {
            self.0.add_root_class(class)
        }
        fn remove_root_class(&self, class: &str) {
            self.0.remove_root_class(class)
        }
        fn has_root_class(&self, class: &str) -> bool {
            self.0.has_root_class(class)
        }
        fn query_all(&self, selector: &Selector) -> Vec<NodeRef> {
            self.0.query_all(selector)
        }
        fn query_within(&self, scope: &NodeRef, selector: &Selector) -> Option<NodeRef> {
            self.0.query_within(scope, selector)
        }
        fn prepend_to_body(&self, _spec: &ElementSpec) -> DocumentResult<NodeRef> {
            Err(DocumentError::Dom("HierarchyRequestError".to_string()))
        }
        fn click(&self, node: &NodeRef) {
            self.0.click(node)
        }
        fn add_key_listener(&self, listener: KeyListener) -> ListenerGuard {
            self.0.add_key_listener(listener)
        }
    }

    #[test]
    fn rejected_insertion_is_reported_as_failed() {
        let doc = RejectingDocument(MemoryDocument::new());
        assert_eq!(
            ensure_skip_link(&doc, &SkipLinkConfig::default()),
            SkipLinkOutcome::Failed
        );
        assert_eq!(doc.0.mutation_count(), 0);
    }

    #[test]
    fn dialog_without_close_control_is_skipped() {
        let doc = MemoryDocument::new();
        let bare = doc
            .append_to_body(ElementSpec::new("div").attr("role", "dialog"))
            .unwrap();
        doc.append_child(&bare, ElementSpec::new("button").attr("aria-label", "Open"))
            .unwrap();
        let marked = doc
            .append_to_body(ElementSpec::new("div").attr("data-dialog", ""))
            .unwrap();
        let close = doc
            .append_child(&marked, ElementSpec::new("span").attr("data-dialog-close", ""))
            .unwrap();

        assert_eq!(close_open_dialogs(&doc, &DialogConfig::default()), 1);
        assert_eq!(doc.click_count(&close), 1);
    }

    #[test]
    fn only_first_close_control_is_activated() {
        let doc = MemoryDocument::new();
        let dialog = doc
            .append_to_body(ElementSpec::new("div").attr("role", "dialog"))
            .unwrap();
        let first = doc
            .append_child(&dialog, ElementSpec::new("button").attr("aria-label", "Close"))
            .unwrap();
        let second = doc
            .append_child(&dialog, ElementSpec::new("button").attr("data-dialog-close", ""))
            .unwrap();

        assert_eq!(close_open_dialogs(&doc, &DialogConfig::default()), 1);
        assert_eq!(doc.click_count(&first), 1);
        assert_eq!(doc.click_count(&second), 0);
    }

    #[test]
    fn non_escape_keys_are_ignored() {
        let doc = MemoryDocument::new();
        let dialog = doc
            .append_to_body(ElementSpec::new("div").attr("role", "dialog"))
            .unwrap();
        let close = doc
            .append_child(&dialog, ElementSpec::new("button").attr("aria-label", "Close"))
            .unwrap();
        let _injector = AccessibilityInjector::install(&handle(&doc), &PageKitConfig::default());

        doc.dispatch_key("Enter");
        assert_eq!(doc.click_count(&close), 0);
        doc.dispatch_key("Esc");
        assert_eq!(doc.click_count(&close), 1);
    }

    #[test]
    fn uninstall_is_idempotent() {
        let doc = MemoryDocument::new();
        let mut injector = AccessibilityInjector::install(&handle(&doc), &PageKitConfig::default());
        assert!(injector.is_installed());
        assert_eq!(doc.listener_count(), 1);

        injector.uninstall();
        injector.uninstall();
        assert!(!injector.is_installed());
        assert_eq!(doc.listener_count(), 0);
    }
}
