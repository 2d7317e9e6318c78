//! PageKit Core Library
//!
//! Mount-gated document side effects for web front-ends, independent of any
//! UI framework.
//!
//! ## Overview
//!
//! - **Mount gate**: nothing touches the document until the first client
//!   render has committed ([`MountGate`])
//! - **Theme preference**: a `dark`/`light` choice persisted under one key and
//!   reflected as a class on the document root ([`ThemeController`])
//! - **Accessibility injector**: an idempotent skip link plus an Escape
//!   listener that closes dialogs ([`AccessibilityInjector`])
//!
//! The host document and the preference store are injected capabilities
//! ([`DocumentAdapter`], [`PreferenceStore`]), so every behavior runs against
//! [`MemoryDocument`] and [`MemoryStore`] in tests.
//!
//! ## Quick Start
//!
//! ```
//! use std::rc::Rc;
//! use pagekit_core::{
//!     AccessibilityInjector, DocumentAdapter, DocumentHandle, MemoryDocument, MemoryStore,
//!     PageKitConfig, Theme, ThemeController,
//! };
//!
//! let config = PageKitConfig::default();
//! let doc = MemoryDocument::new();
//! let handle: DocumentHandle = Rc::new(doc.clone());
//! let store = MemoryStore::with_entries([("theme", "light")]);
//!
//! let controller = ThemeController::hydrate(&store, config.theme.clone());
//! controller.settle(&doc, &store);
//! assert_eq!(controller.theme(), Theme::Light);
//! assert!(doc.has_root_class("light"));
//!
//! let injector = AccessibilityInjector::install(&handle, &config);
//! assert_eq!(doc.listener_count(), 1);
//! drop(injector);
//! assert_eq!(doc.listener_count(), 0);
//! ```

pub mod a11y;
pub mod config;
pub mod document;
pub mod error;
pub mod gate;
pub mod storage;
pub mod theme;

// Re-exports
pub use a11y::{close_open_dialogs, ensure_skip_link, AccessibilityInjector, SkipLinkOutcome};
pub use config::{DialogConfig, PageKitConfig, SkipLinkConfig, ThemeConfig};
pub use document::{
    DocumentAdapter, DocumentHandle, ElementSpec, KeyEvent, KeyListener, ListenerGuard,
    MemoryDocument, NodeId, NodeRef, Selector,
};
#[cfg(target_arch = "wasm32")]
pub use document::WebDocument;
pub use error::{
    ConfigError, DocumentError, DocumentResult, PageKitError, PageKitResult, StoreError,
    StoreResult, ThemeParseError,
};
pub use gate::MountGate;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorageStore;
pub use storage::{MemoryStore, PreferenceStore, RedbStore, StoreHandle, UnavailableStore};
pub use theme::{apply_theme, read_stored_theme, theme_bootstrap_script, Theme, ThemeController};
