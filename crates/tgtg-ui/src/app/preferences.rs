//! Persistence and environment helpers for the app shell.

use crate::core::theme::{StorageError, ThemeStorage};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

/// `localStorage` holding raw, non-JSON values.
pub(crate) struct BrowserStorage;

impl ThemeStorage for BrowserStorage {
    fn read(&self, key: &'static str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn write(&mut self, key: &'static str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key,
                detail: format!("{err:?}"),
            })
    }
}

/// Page origin; endpoints are posted relative to it.
pub(crate) fn api_base_url() -> String {
    window().location().origin().unwrap_or_default()
}

pub(crate) fn log_storage_error(err: &StorageError) {
    let StorageError::Write { key, detail } = err;
    console::error!("storage operation failed", "set", *key, detail.as_str());
}
