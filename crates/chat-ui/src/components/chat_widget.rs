use crate::components::{ChatInput, MessageList};
use crate::hooks::{schedule_replies, use_cancellation_scope};
use crate::state::{ChatAction, ChatState, ReplySchedule};
use crate::styles::{
    BRAND_BG, FLEX_BETWEEN, FLEX_CENTER, LAUNCHER_BUTTON, PANEL_BG, PRIMARY_BORDER,
    ROUNDED_STANDARD, combine_styles,
};
use softsell_core::Timings;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ChatWidgetProps {
    #[prop_or_default]
    pub timings: Timings,
    #[prop_or_default]
    pub class: Classes,
}

/// Floating support chat: a launcher button plus the conversation panel
#[function_component(ChatWidget)]
pub fn chat_widget(props: &ChatWidgetProps) -> Html {
    let ChatWidgetProps { timings, class } = props;

    let state = use_reducer(ChatState::default);
    let scope = use_cancellation_scope();
    let schedule = use_mut_ref(ReplySchedule::default);

    {
        let dispatcher = state.dispatcher();
        let dispatch = Callback::from(move |action| dispatcher.dispatch(action));
        let delay_ms = timings.chat_reply_ms;

        use_effect_with(state.queued(), move |queued| {
            schedule_replies(&schedule, queued, delay_ms, &scope, &dispatch);
        });
    }

    let on_toggle = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ChatAction::Toggle))
    };

    let on_close = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ChatAction::Close))
    };

    let on_send = {
        let state = state.clone();
        Callback::from(move |text: String| {
            tracing::info!("chat question submitted");
            state.dispatch(ChatAction::Submit(text));
        })
    };

    let on_quick_question = {
        let on_send = on_send.clone();
        Callback::from(move |key: &'static str| on_send.emit(key.to_string()))
    };

    let conversation = &state.conversation;

    html! {
        <>
            <button
                class={classes!(LAUNCHER_BUTTON, class.clone())}
                onclick={on_toggle}
                aria-label="Chat with support"
            >
                if state.is_open {
                    <CloseIcon />
                } else {
                    <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M8 12h.01M12 12h.01M16 12h.01M21 12c0 4.418-4.03 8-9 8a9.863 9.863 0 01-4.255-.949L3 20l1.395-3.72C3.512 15.042 3 13.574 3 12c0-4.418 4.03-8 9-8s9 3.582 9 8z" />
                    </svg>
                }
            </button>

            if state.is_open {
                <div class={combine_styles(&["fixed z-50 bottom-20 right-6 w-80 sm:w-96 shadow-xl overflow-hidden border", PANEL_BG, ROUNDED_STANDARD, PRIMARY_BORDER])}>
                    <div class={combine_styles(&[BRAND_BG, "text-white p-4"])}>
                        <div class={FLEX_BETWEEN}>
                            <div class={FLEX_CENTER}>
                                <div class="mr-3 bg-white/20 w-10 h-10 rounded-full flex items-center justify-center">
                                    <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M18.364 5.636l-3.536 3.536m0 5.656l3.536 3.536M9.172 9.172L5.636 5.636m3.536 9.192l-3.536 3.536M21 12a9 9 0 11-18 0 9 9 0 0118 0zm-5 0a4 4 0 11-8 0 4 4 0 018 0z" />
                                    </svg>
                                </div>
                                <div>
                                    <h3 class="font-bold text-lg">{"SoftSell Assistant"}</h3>
                                    <p class="text-xs text-white/70">{"Ask me about software licenses"}</p>
                                </div>
                            </div>
                            <button
                                onclick={on_close}
                                class="rounded-full p-1 hover:bg-white/20 transition-colors"
                                aria-label="Close chat"
                            >
                                <CloseIcon />
                            </button>
                        </div>
                    </div>

                    <MessageList
                        messages={conversation.messages().to_vec()}
                        is_typing={conversation.is_typing()}
                        show_quick_questions={conversation.shows_quick_questions()}
                        on_quick_question={on_quick_question}
                    />

                    <ChatInput on_send={on_send} />
                </div>
            }
        </>
    }
}

#[function_component(CloseIcon)]
fn close_icon() -> Html {
    html! {
        <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
        </svg>
    }
}
