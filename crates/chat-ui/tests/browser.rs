#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use softsell_chat_ui::{ChatAction, ChatState, ReplySchedule, schedule_replies, spawn_after};
use softsell_core::{CancellationToken, Sender, Timings};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen_test::*;
use yew::prelude::{Callback, Reducible};

wasm_bindgen_test_configure!(run_in_browser);

/// Reducer state driven through a callback, the way the widget's dispatcher is
fn reducer(state: &Rc<RefCell<Rc<ChatState>>>) -> Callback<ChatAction> {
    let state = state.clone();
    Callback::from(move |action| {
        let current = state.borrow().clone();
        let next = current.reduce(action);
        *state.borrow_mut() = next;
    })
}

fn bot_replies(state: &ChatState) -> usize {
    state
        .conversation
        .messages()
        .iter()
        .skip(1)
        .filter(|message| message.sender == Sender::Bot)
        .count()
}

#[wasm_bindgen_test]
async fn elapsed_delay_runs_continuation() {
    let outcome = Rc::new(Cell::new("pending"));
    let (elapsed, cancelled) = (outcome.clone(), outcome.clone());
    spawn_after(
        0,
        CancellationToken::new(),
        move || elapsed.set("elapsed"),
        move || cancelled.set("cancelled"),
    );

    TimeoutFuture::new(20).await;
    assert_eq!(outcome.get(), "elapsed");
}

#[wasm_bindgen_test]
async fn cancelling_mid_delay_runs_cancel_branch() {
    let outcome = Rc::new(Cell::new("pending"));
    let (elapsed, cancelled) = (outcome.clone(), outcome.clone());
    let token = CancellationToken::new();
    spawn_after(
        1_000,
        token.clone(),
        move || elapsed.set("elapsed"),
        move || cancelled.set("cancelled"),
    );

    TimeoutFuture::new(10).await;
    assert_eq!(outcome.get(), "pending");
    token.cancel();
    TimeoutFuture::new(10).await;
    assert_eq!(outcome.get(), "cancelled");
}

#[wasm_bindgen_test]
async fn rapid_submissions_each_get_one_reply() {
    let state = Rc::new(RefCell::new(Rc::new(ChatState::default())));
    let dispatch = reducer(&state);
    let schedule = Rc::new(RefCell::new(ReplySchedule::default()));
    let scope = CancellationToken::new();
    let delay_ms = Timings::immediate().chat_reply_ms;

    // The widget effect runs after every outbox change and sees all queued replies
    for question in ["is it secure", "how long does it take"] {
        dispatch.emit(ChatAction::Submit(question.to_string()));
        let queued = state.borrow().queued();
        schedule_replies(&schedule, &queued, delay_ms, &scope, &dispatch);
    }
    assert_eq!(state.borrow().outbox.len(), 2);

    TimeoutFuture::new(20).await;

    let state = state.borrow().clone();
    assert_eq!(bot_replies(&state), 2);
    assert!(!state.conversation.is_typing());
    assert!(state.outbox.is_empty());
    assert!(schedule.borrow().is_empty());
}

#[wasm_bindgen_test]
async fn closing_scope_abandons_waiting_replies() {
    let state = Rc::new(RefCell::new(Rc::new(ChatState::default())));
    let dispatch = reducer(&state);
    let schedule = Rc::new(RefCell::new(ReplySchedule::default()));
    let scope = CancellationToken::new();

    dispatch.emit(ChatAction::Submit("is this legal".to_string()));
    let queued = state.borrow().queued();
    schedule_replies(&schedule, &queued, 1_000, &scope, &dispatch);

    scope.cancel();
    TimeoutFuture::new(20).await;

    let state = state.borrow().clone();
    assert_eq!(bot_replies(&state), 0);
    assert!(!state.conversation.is_typing());
    assert!(state.outbox.is_empty());
    assert!(schedule.borrow().is_empty());
}
