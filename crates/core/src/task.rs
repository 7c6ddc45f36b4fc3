//! Cancellable delayed continuations.
//!
//! UI components schedule work "after N milliseconds" (a chat reply, the end
//! of a simulated submit). Each such task races its delay against a
//! [`CancellationToken`]; components cancel the token on teardown so no
//! continuation writes to state that no longer exists.

use futures::future::{Either, select};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::pin::pin;
pub use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Unique identifier for a scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub Uuid);

impl TaskId {
    /// Generate a new random task ID
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Wait for `delay` unless `token` is cancelled first.
///
/// Returns `true` when the delay elapsed and the caller should run its
/// continuation.
pub async fn run_unless_cancelled<F>(token: &CancellationToken, delay: F) -> bool
where
    F: Future<Output = ()>,
{
    if token.is_cancelled() {
        return false;
    }

    let cancelled = pin!(token.cancelled());
    let delay = pin!(delay);
    match select(cancelled, delay).await {
        Either::Left(_) => false,
        Either::Right(_) => !token.is_cancelled(),
    }
}

/// Holds at most one live task; starting another cancels the previous one
#[derive(Debug, Default)]
pub struct TaskSlot {
    current: Option<(TaskId, CancellationToken)>,
}

impl TaskSlot {
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Start a new task as a child of `parent`, cancelling whatever was running
    pub fn replace(&mut self, parent: &CancellationToken) -> (TaskId, CancellationToken) {
        self.cancel();
        let id = TaskId::new();
        let token = parent.child_token();
        self.current = Some((id, token.clone()));
        (id, token)
    }

    /// Cancel the running task, if any
    pub fn cancel(&mut self) {
        if let Some((id, token)) = self.current.take() {
            tracing::trace!(task_id = %id, "cancelling task");
            token.cancel();
        }
    }

    /// Forget a task that ran to completion; stale ids are ignored
    pub fn finish(&mut self, id: TaskId) -> bool {
        match &self.current {
            Some((current, _)) if *current == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }
}

impl Drop for TaskSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}
