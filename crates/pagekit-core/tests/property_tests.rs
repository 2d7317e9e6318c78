//! Property-based tests for the theme controller and the accessibility injector
//!
//! Uses proptest to check that the persisted preference, the document root
//! flag and the in-memory theme never drift apart, and that repeated mounts
//! never duplicate document-level effects.

use std::rc::Rc;

use pagekit_core::{
    AccessibilityInjector, DocumentAdapter, DocumentHandle, MemoryDocument, MemoryStore,
    PageKitConfig, PreferenceStore, Selector, Theme, ThemeController,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Whatever might already sit under the `theme` key
fn stored_value_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("dark".to_string())),
        Just(Some("light".to_string())),
        prop::string::string_regex("[a-zA-Z ]{0,12}")
            .expect("valid regex")
            .prop_map(Some),
    ]
}

/// One step of a mount history; `Unmount` drops the oldest live injector
#[derive(Debug, Clone)]
enum MountOp {
    Mount,
    Unmount,
}

fn mount_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<MountOp>> {
    prop::collection::vec(
        prop_oneof![
            2 => Just(MountOp::Mount),
            1 => Just(MountOp::Unmount),
        ],
        0..max_ops,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// After any number of toggles, storage, root flag and state agree
    #[test]
    fn prop_settle_keeps_state_consistent(
        stored in stored_value_strategy(),
        toggles in 0usize..20,
    ) {
        let doc = MemoryDocument::new();
        let store = match &stored {
            Some(v) => MemoryStore::with_entries([("theme", v.as_str())]),
            None => MemoryStore::new(),
        };

        let mut controller = ThemeController::hydrate(&store, PageKitConfig::default().theme);
        controller.settle(&doc, &store);
        for _ in 0..toggles {
            controller.toggle();
            controller.settle(&doc, &store);
        }

        let theme = controller.theme();
        let stored = store.get("theme").unwrap();
        prop_assert_eq!(stored.as_deref(), Some(theme.as_str()));
        prop_assert_eq!(doc.has_root_class("light"), theme == Theme::Light);
    }

    /// Hydration only honours the two recognized literals
    #[test]
    fn prop_hydrate_defaults_unless_recognized(stored in stored_value_strategy()) {
        let store = match &stored {
            Some(v) => MemoryStore::with_entries([("theme", v.as_str())]),
            None => MemoryStore::new(),
        };
        let controller = ThemeController::hydrate(&store, PageKitConfig::default().theme);

        let expected = match stored.as_deref() {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        };
        prop_assert_eq!(controller.theme(), expected);
    }

    /// An even number of toggles returns to the starting theme
    #[test]
    fn prop_even_toggles_are_identity(pairs in 0usize..10, start_light in any::<bool>()) {
        let store = if start_light {
            MemoryStore::with_entries([("theme", "light")])
        } else {
            MemoryStore::new()
        };
        let mut controller = ThemeController::hydrate(&store, PageKitConfig::default().theme);
        let start = controller.theme();
        for _ in 0..pairs * 2 {
            controller.toggle();
        }
        prop_assert_eq!(controller.theme(), start);
    }

    /// Any mount/unmount history leaves one skip link and one listener per live mount
    #[test]
    fn prop_mount_history_never_duplicates(ops in mount_ops_strategy(30)) {
        let doc = MemoryDocument::new();
        let handle: DocumentHandle = Rc::new(doc.clone());
        let config = PageKitConfig::default();
        let mut live: Vec<AccessibilityInjector> = Vec::new();

        for op in ops {
            match op {
                MountOp::Mount => live.push(AccessibilityInjector::install(&handle, &config)),
                MountOp::Unmount => {
                    if !live.is_empty() {
                        live.remove(0);
                    }
                }
            }
            prop_assert_eq!(doc.listener_count(), live.len());
        }

        let links = doc.query_all(&Selector::attr_eq("href", "#main-content"));
        prop_assert!(links.len() <= 1);
    }
}
