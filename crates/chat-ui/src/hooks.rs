//! Hooks for scheduling cancellable work from components

use crate::state::{ChatAction, ReplySchedule};
use gloo_timers::future::TimeoutFuture;
use softsell_core::{CancellationToken, MessageId, run_unless_cancelled};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Token owned by the calling component and cancelled when it unmounts.
///
/// Derive per-task tokens from it with `child_token()`.
#[hook]
pub fn use_cancellation_scope() -> CancellationToken {
    let token = use_memo((), |_| CancellationToken::new());

    {
        let token = (*token).clone();
        use_effect_with((), move |_| move || token.cancel());
    }

    (*token).clone()
}

/// Run `on_elapsed` after `delay_ms`, or `on_cancelled` if `token` fires first
pub fn spawn_after<E, C>(delay_ms: u32, token: CancellationToken, on_elapsed: E, on_cancelled: C)
where
    E: FnOnce() + 'static,
    C: FnOnce() + 'static,
{
    spawn_local(async move {
        if run_unless_cancelled(&token, TimeoutFuture::new(delay_ms)).await {
            on_elapsed();
        } else {
            on_cancelled();
        }
    });
}

/// Give each newly queued reply one delayed `Deliver`.
///
/// Replies still waiting when `scope` is cancelled are dispatched as `Abandon`.
pub fn schedule_replies(
    schedule: &Rc<RefCell<ReplySchedule>>,
    queued: &[MessageId],
    delay_ms: u32,
    scope: &CancellationToken,
    dispatch: &Callback<ChatAction>,
) {
    let fresh = schedule.borrow_mut().claim(queued);
    for id in fresh {
        let (delivered, deliver) = (schedule.clone(), dispatch.clone());
        let (abandoned, abandon) = (schedule.clone(), dispatch.clone());
        spawn_after(
            delay_ms,
            scope.child_token(),
            move || {
                delivered.borrow_mut().settle(id);
                deliver.emit(ChatAction::Deliver(id));
            },
            move || {
                abandoned.borrow_mut().settle(id);
                abandon.emit(ChatAction::Abandon(id));
            },
        );
    }
}
