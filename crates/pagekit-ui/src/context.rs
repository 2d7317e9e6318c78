//! Platform context for PageKit components.
//!
//! Provides the document adapter, preference store and configuration to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```rust,ignore
//! // In the root component
//! PageKitProvider { platform: Platform::memory(),
//!     ThemeToggle {}
//! }
//!
//! // In child components
//! let platform = use_platform();
//! ```

use std::rc::Rc;

use dioxus::prelude::*;
use pagekit_core::{
    DocumentHandle, MemoryDocument, MemoryStore, PageKitConfig, StoreHandle,
};

/// The capabilities components act through.
///
/// Cloning is cheap; every field is reference counted.
#[derive(Clone)]
pub struct Platform {
    pub document: DocumentHandle,
    pub store: StoreHandle,
    pub config: Rc<PageKitConfig>,
}

impl Platform {
    pub fn new(document: DocumentHandle, store: StoreHandle, config: PageKitConfig) -> Self {
        Self {
            document,
            store,
            config: Rc::new(config),
        }
    }

    /// Fresh in-memory document and store with the default configuration.
    pub fn memory() -> Self {
        Self::new(
            Rc::new(MemoryDocument::new()),
            Rc::new(MemoryStore::new()),
            PageKitConfig::default(),
        )
    }

    /// The browser's document and `localStorage`.
    #[cfg(target_arch = "wasm32")]
    pub fn browser(config: PageKitConfig) -> Option<Self> {
        let document = pagekit_core::WebDocument::current()?;
        Some(Self::new(
            Rc::new(document),
            Rc::new(pagekit_core::LocalStorageStore),
            config,
        ))
    }
}

impl PartialEq for Platform {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.document, &other.document)
            && Rc::ptr_eq(&self.store, &other.store)
            && Rc::ptr_eq(&self.config, &other.config)
    }
}

/// Makes `platform` available to every descendant.
#[component]
pub fn PageKitProvider(platform: Platform, children: Element) -> Element {
    use_context_provider(|| platform);
    rsx! {
        {children}
    }
}

/// Hook to access the platform from context.
///
/// Panics outside a [`PageKitProvider`].
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

/// Hook to access the configuration from context.
pub fn use_pagekit_config() -> Rc<PageKitConfig> {
    use_platform().config
}

/// Hook to access the preference store from context.
pub fn use_preferences() -> StoreHandle {
    use_platform().store
}
