use crate::styles::{BOT_BUBBLE_COLORS, LIGHT_SHADOW};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct TypingIndicatorProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TypingIndicator)]
pub fn typing_indicator(props: &TypingIndicatorProps) -> Html {
    let TypingIndicatorProps { class } = props;

    html! {
        <div class={classes!("mb-4", "flex", class.clone())} aria-label="Assistant is typing">
            <div class={classes!("rounded-lg", "px-4", "py-2", LIGHT_SHADOW, BOT_BUBBLE_COLORS)}>
                <div class="flex space-x-1">
                    <div class="w-2 h-2 bg-gray-400 rounded-full animate-bounce"></div>
                    <div class="w-2 h-2 bg-gray-400 rounded-full animate-bounce" style="animation-delay: 0.2s;"></div>
                    <div class="w-2 h-2 bg-gray-400 rounded-full animate-bounce" style="animation-delay: 0.4s;"></div>
                </div>
            </div>
        </div>
    }
}
