//! Configuration for the PageKit components.
//!
//! Every field has a default matching the page conventions PageKit was built
//! around, so an empty JSON object (or no config file at all) is valid.
//!
//! ```json
//! {
//!   "theme": { "storage_key": "theme", "light_class": "light" },
//!   "skip_link": { "target_id": "main-content", "label": "Skip to main content" }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::document::Selector;
use crate::error::ConfigError;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageKitConfig {
    pub theme: ThemeConfig,
    pub skip_link: SkipLinkConfig,
    pub dialogs: DialogConfig,
}

impl PageKitConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> String {
        // Serializing plain strings and enums cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Theme preference settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Persistent key holding `dark` or `light`
    pub storage_key: String,
    /// Class placed on the document root while the light theme is active
    pub light_class: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            light_class: "light".to_string(),
        }
    }
}

/// Skip-navigation link settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkipLinkConfig {
    /// Id of the main content landmark (without `#`)
    pub target_id: String,
    pub label: String,
    pub class: String,
}

impl SkipLinkConfig {
    /// The fragment the link points at, e.g. `#main-content`.
    pub fn href(&self) -> String {
        format!("#{}", self.target_id)
    }
}

impl Default for SkipLinkConfig {
    fn default() -> Self {
        Self {
            target_id: "main-content".to_string(),
            label: "Skip to main content".to_string(),
            class: "skip-link".to_string(),
        }
    }
}

/// How dialogs and their close controls are found
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    pub dialog: Selector,
    pub close_control: Selector,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            dialog: Selector::any([
                Selector::attr_eq("role", "dialog"),
                Selector::has_attr("data-dialog"),
            ]),
            close_control: Selector::any([
                Selector::attr_eq("aria-label", "Close"),
                Selector::has_attr("data-dialog-close"),
            ]),
        }
    }
}
