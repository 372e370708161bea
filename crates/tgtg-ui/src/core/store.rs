//! App-wide yewdux store.
//!
//! # Design
//! - The theme preference is the only process-wide state; forms own their own submitters.
//! - The store is seeded once from storage at boot and mutated only through [`apply_toggle`].

use crate::core::theme::{StorageError, ThemeMode, ThemeStorage, toggle};
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct AppStore {
    /// Active display theme.
    pub theme: ThemeMode,
}

/// Flip the theme held in `store` and persist it.
///
/// # Errors
/// Returns the storage failure after the in-memory theme has been flipped.
pub fn apply_toggle(
    store: &mut AppStore,
    storage: &mut impl ThemeStorage,
) -> Result<(), StorageError> {
    match toggle(store.theme, storage) {
        Ok(next) => {
            store.theme = next;
            Ok(())
        }
        Err((next, err)) => {
            store.theme = next;
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::tests::MemoryStorage;
    use crate::core::theme::{THEME_KEY, load_on_start};

    #[test]
    fn store_defaults_to_dark() {
        assert_eq!(AppStore::default().theme, ThemeMode::Dark);
    }

    #[test]
    fn toggle_updates_store_and_storage_together() {
        let mut storage = MemoryStorage::default();
        let mut store = AppStore {
            theme: load_on_start(&storage),
        };

        assert!(apply_toggle(&mut store, &mut storage).is_ok());
        assert_eq!(store.theme, ThemeMode::Light);
        assert!(apply_toggle(&mut store, &mut storage).is_ok());
        assert_eq!(store.theme, ThemeMode::Dark);
        assert_eq!(storage.read(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn storage_failure_still_updates_store() {
        let mut storage = MemoryStorage {
            fail_writes: true,
            ..MemoryStorage::default()
        };
        let mut store = AppStore::default();

        assert!(apply_toggle(&mut store, &mut storage).is_err());
        assert_eq!(store.theme, ThemeMode::Light);
    }
}
