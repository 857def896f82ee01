//! Theme preference handling.
//!
//! The preference lives in `localStorage` under the `"theme"` key and is
//! reflected on the page by a `dark` class on `<html>`. Both stores are
//! driven through the explicit [`set`] transition so callers control when
//! the effects run. Browser access is best-effort: without a window or
//! storage everything no-ops and [`load`] falls back to the default.

use log::debug;

/// `localStorage` key holding the serialized preference.
pub const STORAGE_KEY: &str = "theme";

/// Class toggled on the document root element.
const DARK_CLASS: &str = "dark";

/// The visitor's dark/light display choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    /// Serialized form written to storage. Only ever `"dark"` or `"light"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }

    /// Strict parse of a stored value. Anything unrecognized is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(ThemePreference::Dark),
            "light" => Some(ThemePreference::Light),
            _ => None,
        }
    }

    /// The opposite preference.
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemePreference::Dark)
    }
}

/// Read the stored preference, defaulting to dark when nothing usable is
/// stored or no storage exists.
pub fn load() -> ThemePreference {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|v| ThemePreference::parse(&v))
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        ThemePreference::default()
    }
}

/// Persist the preference. Skipped silently when storage is unavailable.
pub fn store(pref: ThemePreference) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, pref.as_str());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = pref;
    }
}

/// Add or remove the `dark` class on the document root element.
pub fn apply(pref: ThemePreference) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let classes = root.class_list();
            let _ = if pref.is_dark() {
                classes.add_1(DARK_CLASS)
            } else {
                classes.remove_1(DARK_CLASS)
            };
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = pref;
    }
}

/// State transition for the preference: apply it to the document, persist
/// it, and hand the new state back to the caller.
pub fn set(pref: ThemePreference) -> ThemePreference {
    apply(pref);
    store(pref);
    debug!("theme set to {}", pref.as_str());
    pref
}

/// Flip the preference and run the [`set`] transition on the result.
pub fn toggle(current: ThemePreference) -> ThemePreference {
    set(current.toggled())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(ThemePreference::default(), ThemePreference::Dark);
    }

    #[test]
    fn test_string_round_trip() {
        for pref in [ThemePreference::Dark, ThemePreference::Light] {
            assert_eq!(ThemePreference::parse(pref.as_str()), Some(pref));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        assert_eq!(ThemePreference::parse(""), None);
        assert_eq!(ThemePreference::parse("Dark"), None);
        assert_eq!(ThemePreference::parse("auto"), None);
    }

    #[test]
    fn test_toggled_is_an_involution() {
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(
            ThemePreference::Dark.toggled().toggled(),
            ThemePreference::Dark
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_load_defaults_dark_without_browser() {
        assert_eq!(load(), ThemePreference::Dark);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_transitions_are_noops_without_browser() {
        assert_eq!(set(ThemePreference::Light), ThemePreference::Light);
        assert_eq!(toggle(ThemePreference::Light), ThemePreference::Dark);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn storage() -> web_sys::Storage {
        web_sys::window()
            .expect("window")
            .local_storage()
            .expect("storage access")
            .expect("storage")
    }

    #[wasm_bindgen_test]
    fn load_defaults_dark_when_nothing_stored() {
        storage().remove_item(STORAGE_KEY).expect("remove");
        assert_eq!(load(), ThemePreference::Dark);
    }

    #[wasm_bindgen_test]
    fn apply_drives_the_root_class() {
        let root = web_sys::window()
            .expect("window")
            .document()
            .expect("document")
            .document_element()
            .expect("root element");
        apply(ThemePreference::Dark);
        assert!(root.class_list().contains("dark"));
        apply(ThemePreference::Light);
        assert!(!root.class_list().contains("dark"));
    }

    #[wasm_bindgen_test]
    fn set_persists_and_double_toggle_round_trips() {
        let first = set(ThemePreference::Dark);
        assert_eq!(
            storage().get_item(STORAGE_KEY).expect("read").as_deref(),
            Some("dark")
        );

        let flipped = toggle(first);
        assert_eq!(flipped, ThemePreference::Light);
        assert_eq!(
            storage().get_item(STORAGE_KEY).expect("read").as_deref(),
            Some("light")
        );
        assert_eq!(load(), ThemePreference::Light);

        let back = toggle(flipped);
        assert_eq!(back, first);
        assert_eq!(
            storage().get_item(STORAGE_KEY).expect("read").as_deref(),
            Some("dark")
        );
        assert_eq!(load(), first);
    }
}
