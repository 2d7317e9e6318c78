//! Theme preference controller.
//!
//! Two states, `Dark` (default) and `Light`. The controller:
//! - hydrates from the preference store once the mount gate opens
//! - flips on toggle
//! - on every settle, persists the theme and reflects it on the document root
//!
//! Storage is best effort. A missing, unreadable or unrecognized value means
//! `Dark`; a failed write leaves the in-memory state and the root flag intact.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ThemeConfig;
use crate::document::DocumentAdapter;
use crate::error::ThemeParseError;
use crate::storage::PreferenceStore;

/// Color scheme preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The persisted literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

/// In-memory theme state plus the conventions used to persist and apply it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeController {
    theme: Theme,
    config: ThemeConfig,
}

impl ThemeController {
    /// A controller at the default theme, before any stored value is known.
    pub fn new(config: ThemeConfig) -> Self {
        Self {
            theme: Theme::default(),
            config,
        }
    }

    /// A controller initialised from the stored preference.
    pub fn hydrate(store: &dyn PreferenceStore, config: ThemeConfig) -> Self {
        let theme = read_stored_theme(store, &config.storage_key).unwrap_or_default();
        tracing::trace!(%theme, key = %config.storage_key, "theme hydrated");
        Self { theme, config }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Flip to the complement and return the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Persist the current theme and reflect it on the document root.
    pub fn settle(&self, doc: &dyn DocumentAdapter, store: &dyn PreferenceStore) {
        let _ = store.set(&self.config.storage_key, self.theme.as_str());
        apply_theme(doc, self.theme, &self.config);
    }
}

/// Read and parse the stored theme. `None` for missing or unusable values.
pub fn read_stored_theme(store: &dyn PreferenceStore, key: &str) -> Option<Theme> {
    store.get(key).ok().flatten()?.parse().ok()
}

/// Put the root presentation flag in the state `theme` requires.
pub fn apply_theme(doc: &dyn DocumentAdapter, theme: Theme, config: &ThemeConfig) {
    match theme {
        Theme::Light => doc.add_root_class(&config.light_class),
        Theme::Dark => doc.remove_root_class(&config.light_class),
    }
}

/// Inline script for a server-rendered `<head>` that applies the stored theme
/// before first paint, using the same key and class as [`ThemeController`].
///
/// Anything other than a stored `light` clears the class, matching what
/// hydration will settle on, so a shell rendered light for a dark reader is
/// corrected before paint.
pub fn theme_bootstrap_script(config: &ThemeConfig) -> String {
    let key = serde_json::to_string(&config.storage_key).unwrap_or_default();
    let class = serde_json::to_string(&config.light_class).unwrap_or_default();
    format!(
        "(function(){{try{{var c=document.documentElement.classList;if(localStorage.getItem({key})===\"light\"){{c.add({class});}}else{{c.remove({class});}}}}catch(e){{}}}})();"
    )
}
