//! Accessibility Components
//!
//! - AccessibilityEnhancer: skip link + Escape-closes-dialogs, installed on
//!   mount and released on unmount
//! - MainContent: the landmark the skip link points at

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use pagekit_core::AccessibilityInjector;

use crate::components::mount::use_gated_document;
use crate::context::use_pagekit_config;

/// Installs document-level accessibility behavior for as long as it is mounted.
///
/// Renders nothing. Mounting it more than once never duplicates the skip link;
/// each mounted instance owns exactly one Escape listener.
#[component]
pub fn AccessibilityEnhancer() -> Element {
    let config = use_pagekit_config();
    let document = use_gated_document();
    let installed: Rc<RefCell<Option<AccessibilityInjector>>> =
        use_hook(|| Rc::new(RefCell::new(None)));

    let slot = installed.clone();
    use_effect(move || {
        let Some(doc) = document.cloned() else {
            return;
        };
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = Some(AccessibilityInjector::install(&doc, &config));
        }
    });

    use_drop(move || {
        let injector = installed.borrow_mut().take();
        drop(injector);
    });

    rsx! {}
}

/// `<main>` landmark with the id the skip link targets.
///
/// `tabindex="-1"` lets the skip link move focus here in every browser.
#[component]
pub fn MainContent(children: Element, #[props(default)] class: Option<String>) -> Element {
    let config = use_pagekit_config();
    let id = config.skip_link.target_id.clone();

    rsx! {
        main {
            id: "{id}",
            class: class.unwrap_or_default(),
            tabindex: "-1",
            {children}
        }
    }
}
