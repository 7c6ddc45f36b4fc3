//! Inline busy indicator

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub text: Option<AttrValue>,
}

#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    html! {
        <span class="inline-flex items-center gap-2" role="status">
            <span class="w-4 h-4 border-2 border-white/40 border-t-white rounded-full animate-spin"></span>
            if let Some(text) = &props.text {
                <span>{text.clone()}</span>
            }
        </span>
    }
}
