use std::rc::Rc;

use dioxus::prelude::*;
use pagekit_core::{MemoryDocument, MemoryStore, RedbStore, StoreHandle};
use pagekit_ui::{PageKitProvider, Platform};

use crate::context::{get_config, get_data_dir};
use crate::pages::Playground;
use crate::theme::GLOBAL_STYLES;

/// Open the persistent preference store, falling back to memory.
fn open_store() -> StoreHandle {
    let path = get_data_dir().join("preferences.redb");
    match RedbStore::open(&path) {
        Ok(store) => {
            tracing::info!("Preference store opened at {:?}", path);
            Rc::new(store)
        }
        Err(e) => {
            tracing::warn!("Preference store unavailable ({}), using memory", e);
            Rc::new(MemoryStore::new())
        }
    }
}

/// Root application component.
///
/// Provides global styles, the playground document and the PageKit platform.
#[component]
pub fn App() -> Element {
    let doc = use_hook(MemoryDocument::new);
    let platform = use_hook(|| Platform::new(Rc::new(doc.clone()), open_store(), get_config()));

    use_context_provider(|| doc.clone());

    rsx! {
        style { {GLOBAL_STYLES} }
        PageKitProvider { platform, Playground {} }
    }
}
