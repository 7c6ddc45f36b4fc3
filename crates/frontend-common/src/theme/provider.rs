//! Theme provider component

use super::context::{ThemeAction, ThemeContext};
use super::storage::LocalThemeStore;
use gloo_events::EventListener;
use gloo_utils::window;
use softsell_core::{Theme, ThemeConfig, ThemeStore};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_reducer(|| ThemeContext::init(&LocalThemeStore));

    // Follow system preference changes until the visitor picks a theme
    {
        let theme = theme.dispatcher();
        use_effect_with((), move |_| {
            let listener = window()
                .match_media(ThemeConfig::DARK_MEDIA_QUERY)
                .ok()
                .flatten()
                .map(|media_query| {
                    EventListener::new(&media_query, "change", move |event| {
                        if LocalThemeStore.load().is_some() {
                            return;
                        }
                        if let Some(event) = event.dyn_ref::<web_sys::MediaQueryListEvent>() {
                            let system = if event.matches() { Theme::Dark } else { Theme::Light };
                            theme.dispatch(ThemeAction::System(system));
                        }
                    })
                });
            move || drop(listener)
        });
    }

    html! {
        <ContextProvider<UseReducerHandle<ThemeContext>> context={theme}>
            { props.children.clone() }
        </ContextProvider<UseReducerHandle<ThemeContext>>>
    }
}
