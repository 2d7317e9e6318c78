//! `window.localStorage` backend (wasm32).

use super::PreferenceStore;
use crate::error::{StoreError, StoreResult};

/// [`PreferenceStore`] over the browser's `localStorage`.
///
/// Values are stored raw (not JSON-encoded) so other page scripts, such as the
/// pre-paint theme bootstrap, can read them directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageStore;

fn raw() -> StoreResult<web_sys::Storage> {
    // Access throws in sandboxed frames and some private modes.
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StoreError::Unavailable)
}

fn js_err(e: wasm_bindgen::JsValue) -> StoreError {
    StoreError::Storage(format!("{:?}", e))
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        raw()?.get_item(key).map_err(js_err)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        raw()?.set_item(key, value).map_err(js_err)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        raw()?.remove_item(key).map_err(js_err)
    }
}
