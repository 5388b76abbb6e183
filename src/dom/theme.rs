//! Theme persistence and application against the live document.

use web_sys::Document;

use crate::prefs::{KeyValueStore, Preferences, StoreError};
use crate::theme::{self, Theme, THEME_ATTR};

use super::query_all;

pub(crate) const TOGGLE_SELECTOR: &str = r#"[data-action="toggle-theme"]"#;

/// `window.localStorage` behind the store trait.
pub(crate) struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::Write(format!("{e:?}")))
    }
}

/// Apply the stored preference, or the system-derived default when it is
/// absent or malformed.
pub(crate) fn init(document: &Document) {
    let stored = Preferences::new(LocalStorage).theme();
    let initial = theme::initial_theme(stored, prefers_light());
    apply(document, initial);
}

/// Set `data-theme` on the document root and mirror the pressed state onto
/// every toggle control.
pub(crate) fn apply(document: &Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute(THEME_ATTR, theme.as_str());
    }
    let pressed = if theme == Theme::Dark { "true" } else { "false" };
    for button in query_all(document, TOGGLE_SELECTOR) {
        let _ = button.set_attribute("aria-pressed", pressed);
    }
}

/// Flip the applied theme, persist the choice, apply it. A failed write
/// still switches the theme for the current page view.
pub(crate) fn toggle(document: &Document) {
    let current = document
        .document_element()
        .and_then(|root| root.get_attribute(THEME_ATTR));
    let next = theme::next_theme(current.as_deref());
    if let Err(err) = Preferences::new(LocalStorage).set_theme(next) {
        web_sys::console::warn_1(&format!("theme preference not saved: {err}").into());
    }
    apply(document, next);
}

fn prefers_light() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: light)").ok().flatten())
        .is_some_and(|list| list.matches())
}
