use crate::styles::{BOT_BUBBLE_COLORS, LIGHT_SHADOW, USER_BUBBLE_COLORS};
use chrono::Local;
use softsell_core::ChatMessage;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct MessageProps {
    pub message: ChatMessage,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Message)]
pub fn message(props: &MessageProps) -> Html {
    let MessageProps { message, class } = props;

    let (row_class, bubble_class) = if message.is_user() {
        ("justify-end", USER_BUBBLE_COLORS)
    } else {
        ("justify-start", BOT_BUBBLE_COLORS)
    };

    let time = message
        .timestamp
        .with_timezone(&Local)
        .format("%H:%M")
        .to_string();

    html! {
        <div class={classes!("mb-4", "flex", row_class, class.clone())}>
            <div class={classes!("max-w-[80%]", "rounded-lg", "px-4", "py-2", LIGHT_SHADOW, bubble_class)}>
                <p class="text-sm">{&message.text}</p>
                <p class="text-xs mt-1 opacity-70 flex items-center gap-1">
                    <svg class="inline-block w-3 h-3" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z" />
                    </svg>
                    {time}
                </p>
            </div>
        </div>
    }
}
