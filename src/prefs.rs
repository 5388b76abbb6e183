//! The persisted preference entry and the store it lives in.
//!
//! The browser gives us a string key-value store (localStorage); the store is
//! behind a trait so the core tests against [`MemoryStore`] and the wasm
//! adapter plugs in the real thing.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

use crate::theme::Theme;

/// localStorage key for the theme preference.
pub const THEME_KEY: &str = "gv-theme";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("preference store unavailable")]
    Unavailable,
    #[error("preference write rejected: {0}")]
    Write(String),
}

/// String key-value persistence as the browser exposes it.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// The site's persisted preferences. Currently a single theme entry.
pub struct Preferences<S> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored theme, if present and well-formed. A malformed entry reads as
    /// absent; it is not repaired or removed.
    pub fn theme(&self) -> Option<Theme> {
        self.store.get(THEME_KEY).as_deref().and_then(Theme::parse)
    }

    pub fn set_theme(&self, theme: Theme) -> Result<(), StoreError> {
        self.store.set(THEME_KEY, theme.as_str())
    }
}

/// In-memory store double.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_round_trips_through_the_store() {
        let prefs = Preferences::new(MemoryStore::default());
        assert_eq!(prefs.theme(), None);

        prefs.set_theme(Theme::Light).unwrap();
        assert_eq!(prefs.theme(), Some(Theme::Light));

        prefs.set_theme(Theme::Dark).unwrap();
        assert_eq!(prefs.theme(), Some(Theme::Dark));
    }

    #[test]
    fn malformed_stored_value_reads_as_absent() {
        let store = MemoryStore::default();
        store.set(THEME_KEY, "solarized").unwrap();

        let prefs = Preferences::new(store);
        assert_eq!(prefs.theme(), None);
    }

    #[test]
    fn theme_is_stored_under_the_fixed_key() {
        let store = MemoryStore::default();
        let prefs = Preferences::new(store);
        prefs.set_theme(Theme::Light).unwrap();
        assert_eq!(prefs.store.get("gv-theme").as_deref(), Some("light"));
    }
}
