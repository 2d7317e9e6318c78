//! Dialog Launcher
//!
//! Opens dialogs inside the playground document, shaped the way the Escape
//! handler expects to find them.

use dioxus::prelude::*;
use pagekit_core::{DocumentResult, ElementSpec, MemoryDocument};
use pagekit_ui::{Button, ButtonVariant};

use crate::context::use_playground_document;

/// Append a dialog to the document body.
///
/// With `closable`, the dialog gets a close control that removes it when
/// clicked. Without one, Escape has nothing to activate and the dialog stays.
pub fn open_dialog(doc: &MemoryDocument, title: &str, closable: bool) -> DocumentResult<()> {
    let dialog = doc.append_to_body(
        ElementSpec::new("div")
            .attr("role", "dialog")
            .attr("aria-modal", "true")
            .attr("aria-label", title),
    )?;
    doc.append_child(&dialog, ElementSpec::new("p").text(title))?;

    if closable {
        let close = doc.append_child(
            &dialog,
            ElementSpec::new("button").attr("aria-label", "Close").text("\u{00D7}"),
        )?;
        let target = dialog.clone();
        doc.on_click(&close, move |d| d.remove(&target));
    }

    Ok(())
}

fn launch(doc: &MemoryDocument, mut opened: Signal<u32>, closable: bool) {
    let n = opened() + 1;
    opened.set(n);
    let title = if closable {
        format!("Dialog {}", n)
    } else {
        format!("Dialog {} (no close control)", n)
    };
    match open_dialog(doc, &title, closable) {
        Ok(()) => tracing::debug!(%title, "dialog opened"),
        Err(e) => tracing::warn!("Failed to open dialog: {}", e),
    }
}

/// Buttons that open closable and non-closable dialogs.
#[component]
pub fn DialogLauncher() -> Element {
    let doc = use_playground_document();
    let opened = use_signal(|| 0u32);

    let closable_doc = doc.clone();

    rsx! {
        Button {
            variant: ButtonVariant::Primary,
            onclick: move |_| launch(&closable_doc, opened, true),
            "Open dialog"
        }
        Button {
            variant: ButtonVariant::Ghost,
            onclick: move |_| launch(&doc, opened, false),
            "Open dialog without close"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagekit_core::{close_open_dialogs, DialogConfig, DocumentAdapter};

    #[test]
    fn closable_dialog_is_removed_by_escape_handling() {
        let doc = MemoryDocument::new();
        open_dialog(&doc, "Settings", true).unwrap();
        let config = DialogConfig::default();
        assert_eq!(doc.query_all(&config.dialog).len(), 1);

        assert_eq!(close_open_dialogs(&doc, &config), 1);
        assert!(doc.query_all(&config.dialog).is_empty());
    }

    #[test]
    fn dialog_without_close_control_stays_open() {
        let doc = MemoryDocument::new();
        open_dialog(&doc, "Sticky", false).unwrap();
        let config = DialogConfig::default();

        assert_eq!(close_open_dialogs(&doc, &config), 0);
        assert_eq!(doc.query_all(&config.dialog).len(), 1);
    }

    #[test]
    fn opening_without_body_fails() {
        let doc = MemoryDocument::without_body();
        assert!(open_dialog(&doc, "Nowhere", true).is_err());
    }
}
