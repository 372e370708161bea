//! Light/dark display preference and its persistence contract.
//!
//! # Design
//! - Persisted storage is the source of truth; the DOM only mirrors it.
//! - Anything other than a stored `"light"` resolves to the dark default.
//! - The toggle control advertises the mode a click switches to, in both modes.

use thiserror::Error;

/// Storage key holding the persisted theme value.
pub const THEME_KEY: &str = "theme";

/// Body attribute mirroring the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    /// Light theme mode.
    Light,
    /// Dark theme mode (page default).
    #[default]
    Dark,
}

impl ThemeMode {
    /// String identifier written to storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Resolve a persisted value; missing or unknown values fall back to dark.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    /// The opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value for [`THEME_ATTRIBUTE`]; dark mode removes the attribute.
    #[must_use]
    pub const fn body_attribute(self) -> Option<&'static str> {
        match self {
            Self::Light => Some("light"),
            Self::Dark => None,
        }
    }

    /// Icon shown on the toggle control.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }

    /// Label shown on the toggle control.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "DARK MODE",
            Self::Dark => "LIGHT MODE",
        }
    }
}

/// Errors raised by a [`ThemeStorage`] backend.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    /// The backend refused the write (quota, private mode, ...).
    #[error("theme storage write failed")]
    Write {
        /// Key being written.
        key: &'static str,
        /// Backend-provided detail.
        detail: String,
    },
}

/// Key/value backend persisting the theme flag across sessions.
pub trait ThemeStorage {
    /// Read a raw value; read failures are reported as absent.
    fn read(&self, key: &'static str) -> Option<String>;

    /// Persist a raw value.
    ///
    /// # Errors
    /// Returns [`StorageError::Write`] when the backend rejects the value.
    fn write(&mut self, key: &'static str, value: &str) -> Result<(), StorageError>;
}

/// Read the persisted preference once at startup.
#[must_use]
pub fn load_on_start(storage: &impl ThemeStorage) -> ThemeMode {
    ThemeMode::from_stored(storage.read(THEME_KEY).as_deref())
}

/// Flip `current`, persist the result, and return it.
///
/// The in-memory mode always flips; a failed write only means the next
/// session starts from the previous value.
///
/// # Errors
/// Returns the new mode alongside the storage failure so the caller can still
/// apply it.
pub fn toggle(
    current: ThemeMode,
    storage: &mut impl ThemeStorage,
) -> Result<ThemeMode, (ThemeMode, StorageError)> {
    let next = current.toggled();
    storage
        .write(THEME_KEY, next.as_str())
        .map(|()| next)
        .map_err(|err| (next, err))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    pub(crate) struct MemoryStorage {
        pub(crate) values: HashMap<&'static str, String>,
        pub(crate) fail_writes: bool,
    }

    impl ThemeStorage for MemoryStorage {
        fn read(&self, key: &'static str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn write(&mut self, key: &'static str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::Write {
                    key,
                    detail: "quota exceeded".to_string(),
                });
            }
            self.values.insert(key, value.to_string());
            Ok(())
        }
    }

    #[test]
    fn absent_value_defaults_to_dark() {
        let storage = MemoryStorage::default();
        assert_eq!(load_on_start(&storage), ThemeMode::Dark);
    }

    #[test]
    fn only_light_selects_light() {
        assert_eq!(ThemeMode::from_stored(Some("light")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored(Some("dark")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored(Some("\"light\"")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored(Some("")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored(Some(" light\n")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored(Some("Light")), ThemeMode::Dark);
    }

    #[test]
    fn toggling_twice_round_trips_and_persists() {
        let mut storage = MemoryStorage::default();
        let start = load_on_start(&storage);

        let once = toggle(start, &mut storage).map_err(|(_, err)| err);
        assert_eq!(once, Ok(ThemeMode::Light));
        assert_eq!(storage.read(THEME_KEY).as_deref(), Some("light"));

        let twice = toggle(ThemeMode::Light, &mut storage).map_err(|(_, err)| err);
        assert_eq!(twice, Ok(start));
        assert_eq!(
            load_on_start(&storage),
            start,
            "persisted value must match the in-memory mode"
        );
    }

    #[test]
    fn failed_write_still_flips_mode() {
        let mut storage = MemoryStorage {
            fail_writes: true,
            ..MemoryStorage::default()
        };
        match toggle(ThemeMode::Dark, &mut storage) {
            Err((mode, StorageError::Write { key, .. })) => {
                assert_eq!(mode, ThemeMode::Light);
                assert_eq!(key, THEME_KEY);
            }
            Ok(mode) => panic!("expected write failure, got {mode:?}"),
        }
        assert!(storage.read(THEME_KEY).is_none());
    }

    #[test]
    fn control_advertises_the_other_mode() {
        assert_eq!(ThemeMode::Dark.label(), "LIGHT MODE");
        assert_eq!(ThemeMode::Dark.icon(), "☀️");
        assert_eq!(ThemeMode::Light.label(), "DARK MODE");
        assert_eq!(ThemeMode::Light.icon(), "🌙");
    }

    #[test]
    fn dark_mode_clears_body_attribute() {
        assert_eq!(ThemeMode::Light.body_attribute(), Some("light"));
        assert_eq!(ThemeMode::Dark.body_attribute(), None);
    }
}
