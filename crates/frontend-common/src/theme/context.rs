//! Theme context definition

use super::storage::{LocalThemeStore, update_document_theme};
use softsell_core::{Theme, ThemeStore};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ThemeContext {
    pub theme: Theme,
}

pub enum ThemeAction {
    Set(Theme),
    Toggle,
    /// System preference changed; applied without persisting
    System(Theme),
}

impl ThemeContext {
    /// Build the context from persisted or system preference and apply it to the document
    pub fn init(store: &impl ThemeStore) -> Self {
        let theme = store.initial_theme();
        update_document_theme(theme);
        tracing::debug!(?theme, "theme initialised");
        Self { theme }
    }
}

impl Reducible for ThemeContext {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let (theme, persist) = match action {
            ThemeAction::Set(theme) => (theme, true),
            ThemeAction::Toggle => (self.theme.toggle(), true),
            ThemeAction::System(theme) => (theme, false),
        };

        if theme == self.theme {
            return self;
        }

        if persist {
            LocalThemeStore.save(theme);
        }
        update_document_theme(theme);
        tracing::info!(?theme, "theme changed");

        Rc::new(Self { theme })
    }
}
