//! PageKit UI Components
//!
//! Dioxus components over [`pagekit_core`]:
//! - **NoSsr** / `use_mounted`: client-only rendering behind a mount gate
//! - **ThemeToggle**: dark/light switch persisted under the `theme` key
//! - **AccessibilityEnhancer**: skip link and Escape-to-close for dialogs
//! - **Dialog**, **MainContent**: markup that meets the conventions the
//!   enhancer relies on
//!
//! Wrap the tree in a [`PageKitProvider`] so components can reach the
//! document and preference store:
//!
//! ```rust,ignore
//! rsx! {
//!     PageKitProvider { platform: Platform::memory(),
//!         AccessibilityEnhancer {}
//!         header { ThemeToggle {} }
//!         MainContent { "..." }
//!     }
//! }
//! ```

pub mod components;
pub mod context;

pub use components::*;
pub use context::{
    use_pagekit_config, use_platform, use_preferences, PageKitProvider, PageKitProviderProps,
    Platform,
};
