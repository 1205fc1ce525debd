use crate::constants::THEME_STORAGE_KEY;

/// Key-value persistence capability for user preferences. The site
/// backs this with browser local storage; the gateway ships a JSON-file
/// implementation and tests use an in-memory map.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Anything the resolved theme can be applied to. The original site
/// writes `data-theme` on the document element.
pub trait ThemeTarget {
    fn set_theme(&mut self, value: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

/// Explicit theme preference. Load order: stored value, then the
/// detected system preference, then dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreference {
    mode: ThemeMode,
}

impl ThemePreference {
    pub fn load(store: &dyn PreferenceStore, system_prefers_dark: bool) -> Self {
        let mode = store
            .get(THEME_STORAGE_KEY)
            .and_then(|stored| ThemeMode::from_stored(&stored))
            .unwrap_or(if system_prefers_dark { ThemeMode::Dark } else { ThemeMode::Light });

        ThemePreference { mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flips the mode and persists the new value.
    pub fn toggle(&mut self, store: &mut dyn PreferenceStore) {
        self.mode = match self.mode {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
        store.set(THEME_STORAGE_KEY, self.mode.as_str());
    }

    pub fn apply(&self, target: &mut dyn ThemeTarget) {
        target.set_theme(self.mode.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(HashMap<String, String>);

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }
        fn set(&mut self, key: &str, value: &str) {
            self.0.insert(key.to_string(), value.to_string());
        }
    }

    #[derive(Default)]
    struct FakeDocument {
        theme_attr: Option<String>,
    }

    impl ThemeTarget for FakeDocument {
        fn set_theme(&mut self, value: &str) {
            self.theme_attr = Some(value.to_string());
        }
    }

    #[test]
    fn stored_value_wins_over_system_preference() {
        let mut store = MemoryStore::default();
        store.set(THEME_STORAGE_KEY, "light");

        let pref = ThemePreference::load(&store, true);
        assert_eq!(pref.mode(), ThemeMode::Light);
    }

    #[test]
    fn missing_store_falls_back_to_system_preference() {
        let store = MemoryStore::default();

        assert_eq!(ThemePreference::load(&store, true).mode(), ThemeMode::Dark);
        assert_eq!(ThemePreference::load(&store, false).mode(), ThemeMode::Light);
    }

    #[test]
    fn corrupt_stored_value_falls_back_to_system_preference() {
        let mut store = MemoryStore::default();
        store.set(THEME_STORAGE_KEY, "sepia");

        assert_eq!(ThemePreference::load(&store, false).mode(), ThemeMode::Light);
    }

    #[test]
    fn toggle_flips_and_persists() {
        let mut store = MemoryStore::default();
        let mut pref = ThemePreference::load(&store, true);

        pref.toggle(&mut store);
        assert_eq!(pref.mode(), ThemeMode::Light);
        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("light"));

        pref.toggle(&mut store);
        assert_eq!(pref.mode(), ThemeMode::Dark);
        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn apply_writes_the_mode_to_the_target() {
        let store = MemoryStore::default();
        let mut doc = FakeDocument::default();

        ThemePreference::load(&store, true).apply(&mut doc);
        assert_eq!(doc.theme_attr.as_deref(), Some("dark"));
    }
}
