//! Dialog Stack
//!
//! Renders every dialog in the playground document as a real [`Dialog`].
//! Dismissing one goes back through the document: its close control is
//! clicked, exactly what the Escape handler does.

use dioxus::prelude::*;
use pagekit_core::{DocumentAdapter, MemoryDocument, NodeId, NodeRef, Selector};
use pagekit_ui::{use_pagekit_config, Dialog};

use crate::context::{use_document_revision, use_playground_document};

/// Dialogs currently in the document, as (key, title, node).
fn open_dialogs(doc: &MemoryDocument, dialog: &Selector) -> Vec<(usize, String, NodeRef)> {
    doc.query_all(dialog)
        .into_iter()
        .filter_map(|node| {
            let key = node.downcast_ref::<NodeId>()?.0;
            let title = doc
                .attribute(&node, "aria-label")
                .unwrap_or_else(|| "Dialog".to_string());
            Some((key, title, node))
        })
        .collect()
}

#[component]
pub fn DialogStack() -> Element {
    let doc = use_playground_document();
    let config = use_pagekit_config();
    let revision = use_document_revision();

    let _ = revision();
    let dialogs = open_dialogs(&doc, &config.dialogs.dialog);

    rsx! {
        for (key, title, node) in dialogs {
            {
                let doc = doc.clone();
                let config = config.clone();
                let closable = doc.query_within(&node, &config.dialogs.close_control).is_some();
                rsx! {
                    Dialog {
                        key: "{key}",
                        show: true,
                        title: title.clone(),
                        on_close: move |_| {
                            match doc.query_within(&node, &config.dialogs.close_control) {
                                Some(close) => doc.click(&close),
                                None => doc.remove(&node),
                            }
                        },
                        p { class: "body-text",
                            if closable {
                                "Press Escape to close this dialog."
                            } else {
                                "This dialog has no close control, so Escape leaves it open."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::dialog_launcher::open_dialog;
    use pagekit_core::DialogConfig;

    #[test]
    fn lists_dialogs_in_document_order() {
        let doc = MemoryDocument::new();
        open_dialog(&doc, "First", true).unwrap();
        open_dialog(&doc, "Second", false).unwrap();

        let titles: Vec<_> = open_dialogs(&doc, &DialogConfig::default().dialog)
            .into_iter()
            .map(|(_, title, _)| title)
            .collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }
}
