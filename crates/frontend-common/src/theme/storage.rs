//! Browser-backed theme persistence

use gloo_utils::window;
use softsell_core::{Theme, ThemeConfig, ThemeStore};
use wasm_bindgen::JsCast;

/// Persists the theme in `localStorage` and reads the system color scheme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalThemeStore;

impl LocalThemeStore {
    fn storage() -> Option<web_sys::Storage> {
        window().local_storage().ok().flatten()
    }
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<Theme> {
        let raw = Self::storage()?.get_item(ThemeConfig::STORAGE_KEY).ok()??;
        match Theme::from_storage(&raw) {
            Ok(theme) => Some(theme),
            Err(err) => {
                tracing::warn!(%err, "ignoring saved theme");
                None
            }
        }
    }

    fn save(&self, theme: Theme) {
        let Some(storage) = Self::storage() else {
            return;
        };
        match theme.to_storage() {
            Ok(value) => {
                if storage.set_item(ThemeConfig::STORAGE_KEY, &value).is_err() {
                    tracing::warn!("failed to persist theme");
                }
            }
            Err(err) => tracing::warn!(%err, "failed to encode theme"),
        }
    }

    fn system_prefers_dark(&self) -> bool {
        window()
            .match_media(ThemeConfig::DARK_MEDIA_QUERY)
            .ok()
            .flatten()
            .is_some_and(|query| query.matches())
    }
}

/// Toggle the `dark` class on `<html>`
pub fn update_document_theme(theme: Theme) {
    let Some(element) = window()
        .document()
        .and_then(|document| document.document_element())
    else {
        return;
    };
    let Ok(html_element) = element.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };

    let class_list = html_element.class_list();
    let result = if theme.is_dark() {
        class_list.add_1("dark")
    } else {
        class_list.remove_1("dark")
    };
    if result.is_err() {
        tracing::warn!(?theme, "failed to update document theme class");
    }
}
