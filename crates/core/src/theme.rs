//! Light/dark theme model

use crate::error::CoreResult;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Accessible label for a button that switches away from this theme
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }

    /// Initial theme: a saved choice wins, otherwise follow the system preference
    #[must_use]
    pub fn resolve(saved: Option<Self>, system_prefers_dark: bool) -> Self {
        saved.unwrap_or(if system_prefers_dark {
            Self::Dark
        } else {
            Self::Light
        })
    }

    /// Encode for local storage
    pub fn to_storage(self) -> CoreResult<String> {
        Ok(serde_json::to_string(&self)?)
    }

    /// Decode a value read from local storage
    pub fn from_storage(raw: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Persistence backend for the theme choice
pub trait ThemeStore {
    fn load(&self) -> Option<Theme>;
    fn save(&self, theme: Theme);
    fn system_prefers_dark(&self) -> bool;

    /// Saved theme, or the system preference when nothing has been saved
    fn initial_theme(&self) -> Theme {
        Theme::resolve(self.load(), self.system_prefers_dark())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStore {
        saved: RefCell<Option<Theme>>,
        system_dark: bool,
    }

    impl ThemeStore for MemoryStore {
        fn load(&self) -> Option<Theme> {
            *self.saved.borrow()
        }

        fn save(&self, theme: Theme) {
            *self.saved.borrow_mut() = Some(theme);
        }

        fn system_prefers_dark(&self) -> bool {
            self.system_dark
        }
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn test_saved_theme_beats_system_preference() {
        assert_eq!(Theme::resolve(Some(Theme::Light), true), Theme::Light);
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
    }

    #[test]
    fn test_store_initial_theme() {
        let store = MemoryStore {
            system_dark: true,
            ..MemoryStore::default()
        };
        assert_eq!(store.initial_theme(), Theme::Dark);
        store.save(Theme::Light);
        assert_eq!(store.initial_theme(), Theme::Light);
    }

    #[test]
    fn test_storage_encoding() {
        assert_eq!(Theme::Dark.to_storage().unwrap(), "\"Dark\"");
        assert_eq!(Theme::from_storage("\"Light\"").unwrap(), Theme::Light);
        assert!(matches!(
            Theme::from_storage("dark"),
            Err(CoreError::Serialization { .. })
        ));
    }

    #[test]
    fn test_toggle_labels() {
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark mode");
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light mode");
    }
}
