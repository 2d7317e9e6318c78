//! Playground context.
//!
//! The playground renders everything from one in-memory document. Components
//! reach it through the `Platform` as a `DocumentHandle`; the inspector needs
//! the concrete `MemoryDocument`, provided here alongside a revision signal.

use std::path::PathBuf;
use std::time::Duration;

use dioxus::prelude::*;
use pagekit_core::{MemoryDocument, PageKitConfig};

/// How often the inspector checks the document for changes.
const POLL_INTERVAL: Duration = Duration::from_millis(150);

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Get the component configuration set from command line args.
pub fn get_config() -> PageKitConfig {
    crate::get_config()
}

/// Hook to access the playground's document.
pub fn use_playground_document() -> MemoryDocument {
    use_context::<MemoryDocument>()
}

/// Changes whenever the document is mutated or gains/loses a listener.
///
/// The document itself is not reactive, so this polls.
pub fn use_document_revision() -> ReadOnlySignal<(u64, usize)> {
    let doc = use_playground_document();
    let mut revision = use_signal(|| (doc.mutation_count(), doc.listener_count()));

    use_effect(move || {
        let doc = doc.clone();
        spawn(async move {
            loop {
                tokio::time::sleep(POLL_INTERVAL).await;
                let current = (doc.mutation_count(), doc.listener_count());
                if *revision.peek() != current {
                    revision.set(current);
                }
            }
        });
    });

    revision.into()
}
