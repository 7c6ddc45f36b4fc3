use crate::styles::{
    FLEX_CENTER, MUTED_TEXT, PANEL_BG, PRIMARY_BORDER, SEND_BUTTON, STANDARD_PADDING,
    combine_styles,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChatInputProps {
    pub on_send: Callback<String>,
    #[prop_or_default]
    pub placeholder: Option<String>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(ChatInput)]
pub fn chat_input(props: &ChatInputProps) -> Html {
    let input_value = use_state(String::new);

    let handle_input = {
        let input_value = input_value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            input_value.set(input.value());
        })
    };

    let handle_submit = {
        let input_value = input_value.clone();
        let on_send = props.on_send.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let text = (*input_value).clone();
            // Blank input never reaches the conversation
            if text.trim().is_empty() {
                return;
            }
            on_send.emit(text);
            input_value.set(String::new());
        })
    };

    let is_empty = input_value.trim().is_empty();
    let placeholder = props
        .placeholder
        .clone()
        .unwrap_or_else(|| "Type your question here...".to_string());

    html! {
        <form
            onsubmit={handle_submit}
            class={combine_styles(&["border-t", PRIMARY_BORDER, STANDARD_PADDING, PANEL_BG])}
        >
            <div class={FLEX_CENTER}>
                <input
                    type="text"
                    class={crate::styles::INPUT_BASE}
                    placeholder={placeholder}
                    value={(*input_value).clone()}
                    oninput={handle_input}
                    disabled={props.disabled}
                    aria-label="Chat message"
                />
                <button
                    type="submit"
                    class={SEND_BUTTON}
                    disabled={is_empty || props.disabled}
                    title="Send message"
                    aria-label="Send message"
                >
                    <svg class="w-5 h-5" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                        <path d="M22 2L11 13" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
                        <path d="M22 2L15 22L11 13L2 9L22 2Z" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
                    </svg>
                </button>
            </div>
            <div class={combine_styles(&["mt-2 text-xs text-center flex items-center justify-center gap-1", MUTED_TEXT])}>
                <svg class="w-3 h-3 text-primary-600 dark:text-primary-400" fill="currentColor" viewBox="0 0 24 24">
                    <path d="M12 17.27L18.18 21l-1.64-7.03L22 9.24l-7.19-.61L12 2 9.19 8.63 2 9.24l5.46 4.73L5.82 21z" />
                </svg>
                {"Try asking about selling licenses, legality, or pricing"}
            </div>
        </form>
    }
}
