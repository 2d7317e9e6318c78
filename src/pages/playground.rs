//! Playground page.
//!
//! Mounts every PageKit component against the in-memory document and mirrors
//! that document back onto the page: its root classes style the page, its
//! dialogs render as real dialogs, and key presses are forwarded to it.

use dioxus::prelude::*;
use pagekit_ui::{
    AccessibilityEnhancer, Button, ButtonVariant, MainContent, NoSsr, ThemeToggle,
};

use crate::components::{DialogLauncher, DialogStack, DomInspector};
use crate::context::{use_document_revision, use_playground_document};

/// Playground page component.
#[component]
pub fn Playground() -> Element {
    let doc = use_playground_document();
    let revision = use_document_revision();
    let mut enhancer_mounted = use_signal(|| true);

    // Re-read on every document change
    let _ = revision();
    let root_class = doc.root_classes().join(" ");

    let key_doc = doc.clone();
    let on_keydown = move |evt: KeyboardEvent| {
        let handled = key_doc.dispatch_key(&evt.key().to_string());
        tracing::trace!(key = %evt.key(), handled, "key forwarded to document");
    };

    let escape_doc = doc.clone();

    rsx! {
        div {
            class: "playground {root_class}",
            tabindex: "0",
            onkeydown: on_keydown,

            if enhancer_mounted() {
                AccessibilityEnhancer {}
            }

            header { class: "playground-header",
                h1 { class: "page-title", "PageKit Playground" }
                ThemeToggle { class: "header-action".to_string() }
            }

            MainContent { class: "playground-main".to_string(),
                section { class: "playground-controls",
                    h2 { class: "section-header", "Controls" }
                    div { class: "control-row",
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| {
                                let mounted = enhancer_mounted();
                                enhancer_mounted.set(!mounted);
                            },
                            if enhancer_mounted() { "Unmount enhancer" } else { "Mount enhancer" }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| {
                                escape_doc.dispatch_key("Escape");
                            },
                            "Press Escape"
                        }
                        DialogLauncher {}
                    }
                    NoSsr {
                        fallback: rsx! { p { class: "body-text muted", "Waiting for mount\u{2026}" } },
                        p { class: "body-text", "Mounted: effects may now touch the document." }
                    }
                }

                DialogStack {}
                DomInspector {}
            }
        }
    }
}
