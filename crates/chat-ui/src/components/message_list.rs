use crate::components::{Message, QuickQuestions, TypingIndicator};
use crate::styles::{LOG_BG, STANDARD_PADDING};
use softsell_core::ChatMessage;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct MessageListProps {
    pub messages: Vec<ChatMessage>,
    #[prop_or_default]
    pub is_typing: bool,
    #[prop_or_default]
    pub show_quick_questions: bool,
    pub on_quick_question: Callback<&'static str>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(MessageList)]
pub fn message_list(props: &MessageListProps) -> Html {
    let MessageListProps {
        messages,
        is_typing,
        show_quick_questions,
        on_quick_question,
        class,
    } = props;

    let end_ref = use_node_ref();

    // Keep the newest message in view
    use_effect_with((messages.len(), *is_typing), {
        let end_ref = end_ref.clone();
        move |_| {
            if let Some(element) = end_ref.cast::<Element>() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    });

    html! {
        <div class={classes!("h-80", "overflow-y-auto", STANDARD_PADDING, LOG_BG, class.clone())}>
            {for messages.iter().map(|message| {
                html! {
                    <Message key={message.id.to_string()} message={message.clone()} />
                }
            })}

            if *is_typing {
                <TypingIndicator />
            }

            if *show_quick_questions {
                <QuickQuestions on_select={on_quick_question.clone()} />
            }

            <div ref={end_ref}></div>
        </div>
    }
}
