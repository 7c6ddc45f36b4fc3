//! Reducer-backed chat widget state

use softsell_core::{Conversation, MessageId, PendingReply};
use std::collections::HashSet;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ChatState {
    pub conversation: Conversation,
    /// Replies decided at submit time and waiting for their typing delay
    pub outbox: Vec<PendingReply>,
    pub is_open: bool,
}

pub enum ChatAction {
    Toggle,
    Close,
    Submit(String),
    /// Typing delay elapsed for the reply to this user message
    Deliver(MessageId),
    /// Typing delay was cancelled for the reply to this user message
    Abandon(MessageId),
}

impl ChatState {
    /// User messages whose replies are still waiting, oldest first
    #[must_use]
    pub fn queued(&self) -> Vec<MessageId> {
        self.outbox.iter().map(|reply| reply.in_reply_to).collect()
    }

    fn take_reply(&mut self, in_reply_to: MessageId) -> Option<PendingReply> {
        let index = self
            .outbox
            .iter()
            .position(|reply| reply.in_reply_to == in_reply_to)?;
        Some(self.outbox.remove(index))
    }
}

impl Reducible for ChatState {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ChatAction::Toggle => next.is_open = !next.is_open,
            ChatAction::Close => next.is_open = false,
            ChatAction::Submit(text) => match next.conversation.submit(&text) {
                Some(reply) => next.outbox.push(reply),
                None => return self,
            },
            ChatAction::Deliver(id) => match next.take_reply(id) {
                Some(reply) => {
                    next.conversation.deliver(reply);
                }
                None => return self,
            },
            ChatAction::Abandon(id) => match next.take_reply(id) {
                Some(reply) => next.conversation.abandon(reply),
                None => return self,
            },
        }
        Rc::new(next)
    }
}

/// Queued replies that already have a delivery task.
///
/// The widget's effect sees the whole outbox on every change; claiming
/// through this set keeps it to one task per reply.
#[derive(Debug, Default)]
pub struct ReplySchedule {
    scheduled: HashSet<MessageId>,
}

impl ReplySchedule {
    /// Ids in `queued` that have no task yet, now marked as scheduled
    pub fn claim(&mut self, queued: &[MessageId]) -> Vec<MessageId> {
        queued
            .iter()
            .copied()
            .filter(|id| self.scheduled.insert(*id))
            .collect()
    }

    /// Forget `id` once its task has delivered or abandoned the reply
    pub fn settle(&mut self, id: MessageId) {
        self.scheduled.remove(&id);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scheduled.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use softsell_core::Sender;
    use softsell_core::faq::FAQ_ENTRIES;

    fn reduce(state: Rc<ChatState>, action: ChatAction) -> Rc<ChatState> {
        state.reduce(action)
    }

    #[test]
    fn test_toggle_and_close() {
        let state = Rc::new(ChatState::default());
        let state = reduce(state, ChatAction::Toggle);
        assert!(state.is_open);
        let state = reduce(state, ChatAction::Close);
        assert!(!state.is_open);
    }

    #[test]
    fn test_blank_submit_keeps_same_state() {
        let state = Rc::new(ChatState::default());
        let next = reduce(state.clone(), ChatAction::Submit("  ".to_string()));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_submit_queues_reply_until_delivered() {
        let state = reduce(
            Rc::new(ChatState::default()),
            ChatAction::Submit("How much can I sell for?".to_string()),
        );
        assert_eq!(state.outbox.len(), 1);
        assert!(state.conversation.is_typing());

        let id = state.outbox[0].in_reply_to;
        let state = reduce(state, ChatAction::Deliver(id));
        assert!(state.outbox.is_empty());
        assert!(!state.conversation.is_typing());

        let last = state.conversation.messages().last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert_eq!(last.text, FAQ_ENTRIES[2].response);
    }

    #[test]
    fn test_abandon_drops_reply() {
        let state = reduce(
            Rc::new(ChatState::default()),
            ChatAction::Submit("is it secure".to_string()),
        );
        let id = state.outbox[0].in_reply_to;
        let state = reduce(state, ChatAction::Abandon(id));
        assert!(state.outbox.is_empty());
        assert_eq!(state.conversation.messages().len(), 2);
    }

    #[test]
    fn test_unknown_delivery_is_ignored() {
        let state = Rc::new(ChatState::default());
        let next = reduce(state.clone(), ChatAction::Deliver(MessageId::new()));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_each_queued_reply_is_claimed_once() {
        let mut schedule = ReplySchedule::default();
        let state = reduce(
            Rc::new(ChatState::default()),
            ChatAction::Submit("is it secure".to_string()),
        );
        let first = schedule.claim(&state.queued());
        assert_eq!(first.len(), 1);

        let state = reduce(state, ChatAction::Submit("how long does it take".to_string()));
        let second = schedule.claim(&state.queued());
        assert_eq!(second.len(), 1);
        assert_ne!(first[0], second[0]);

        // Re-running with the same outbox schedules nothing new
        assert!(schedule.claim(&state.queued()).is_empty());
    }

    #[test]
    fn test_two_quick_submissions_get_two_replies() {
        let mut schedule = ReplySchedule::default();
        let mut state = Rc::new(ChatState::default());
        let mut claimed = Vec::new();
        for question in ["is this legal", "what software can i sell"] {
            state = reduce(state, ChatAction::Submit(question.to_string()));
            claimed.extend(schedule.claim(&state.queued()));
        }
        assert_eq!(claimed.len(), 2);
        assert!(state.conversation.is_typing());

        for id in claimed {
            schedule.settle(id);
            state = reduce(state, ChatAction::Deliver(id));
            assert!(schedule.claim(&state.queued()).is_empty());
        }

        let bot_replies = state
            .conversation
            .messages()
            .iter()
            .skip(1)
            .filter(|message| message.sender == Sender::Bot)
            .count();
        assert_eq!(bot_replies, 2);
        assert!(!state.conversation.is_typing());
        assert!(state.outbox.is_empty());
        assert!(schedule.is_empty());
    }
}
