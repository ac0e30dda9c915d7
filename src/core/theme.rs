//! Persisted dark/light theme preference

use super::storage::{KeyValueStore, StorageError, THEME_KEY};

/// Body class applied while the dark theme is active
pub const DARK_THEME_CLASS: &str = "dark-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Only an explicit `"dark"` selects the dark theme
    pub fn from_stored(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

pub fn load_theme(store: &impl KeyValueStore) -> Result<Theme, StorageError> {
    Ok(store
        .get(THEME_KEY)?
        .map(|value| Theme::from_stored(&value))
        .unwrap_or_default())
}

pub fn save_theme(store: &impl KeyValueStore, theme: Theme) -> Result<(), StorageError> {
    store.set(THEME_KEY, theme.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;

    #[test]
    fn test_theme_persistence() {
        let store = MemoryStore::new();
        assert_eq!(load_theme(&store).unwrap(), Theme::Light);

        save_theme(&store, Theme::Light.toggled()).unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(load_theme(&store).unwrap(), Theme::Dark);
    }

    #[test]
    fn test_unknown_value_falls_back_to_light() {
        assert_eq!(Theme::from_stored("sepia"), Theme::Light);
    }
}
