use crate::styles::{CHIP_BUTTON, MUTED_TEXT};
use softsell_core::faq::QUICK_QUESTIONS;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct QuickQuestionsProps {
    /// Receives the FAQ key of the chosen question
    pub on_select: Callback<&'static str>,
}

#[function_component(QuickQuestions)]
pub fn quick_questions(props: &QuickQuestionsProps) -> Html {
    html! {
        <div class="mt-4 space-y-2">
            <p class={classes!("text-xs", MUTED_TEXT)}>{"Frequently asked questions:"}</p>
            <div class="flex flex-wrap gap-2">
                {for QUICK_QUESTIONS.iter().map(|question| {
                    let on_select = props.on_select.clone();
                    let key = question.key;
                    html! {
                        <button
                            key={key}
                            type="button"
                            class={CHIP_BUTTON}
                            onclick={Callback::from(move |_| on_select.emit(key))}
                        >
                            <svg class="w-3 h-3" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M8 10h.01M12 10h.01M16 10h.01M9 16H5a2 2 0 01-2-2V6a2 2 0 012-2h14a2 2 0 012 2v8a2 2 0 01-2 2h-5l-5 5v-5z" />
                            </svg>
                            {question.label}
                        </button>
                    }
                })}
            </div>
        </div>
    }
}
