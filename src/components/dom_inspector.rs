//! DOM Inspector
//!
//! Live view of the playground document and the stored preference.

use dioxus::prelude::*;
use pagekit_core::read_stored_theme;
use pagekit_ui::{use_pagekit_config, use_preferences};

use crate::context::{use_document_revision, use_playground_document};

#[component]
pub fn DomInspector() -> Element {
    let doc = use_playground_document();
    let store = use_preferences();
    let config = use_pagekit_config();
    let revision = use_document_revision();

    let (mutations, listeners) = revision();
    let root_classes = doc.root_classes();
    let root_label = if root_classes.is_empty() {
        "(none)".to_string()
    } else {
        root_classes.join(" ")
    };
    let stored = match read_stored_theme(store.as_ref(), &config.theme.storage_key) {
        Some(theme) => theme.to_string(),
        None => "(unset)".to_string(),
    };
    let outline = doc.outline().join("\n");

    rsx! {
        section { class: "dom-inspector",
            h2 { class: "section-header", "Document" }
            dl { class: "inspector-stats",
                dt { "html class" }
                dd { "{root_label}" }
                dt { "stored {config.theme.storage_key}" }
                dd { "{stored}" }
                dt { "keydown listeners" }
                dd { "{listeners}" }
                dt { "mutations" }
                dd { "{mutations}" }
            }
            pre { class: "inspector-outline", "<body>\n{outline}" }
        }
    }
}
