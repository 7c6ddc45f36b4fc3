//! Chat widget conversation log

use crate::config::ChatConfig;
use crate::faq;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub const GREETING: &str =
    "Hello! How can I help you with your software license questions today? 👋";

/// Unique identifier for a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub Uuid);

impl MessageId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text)
    }

    #[must_use]
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// A bot reply that has been decided but not yet shown.
///
/// Returned by [`Conversation::submit`]; hand it back through
/// [`Conversation::deliver`] once the typing delay elapses, or
/// [`Conversation::abandon`] if the delay was cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct PendingReply {
    pub in_reply_to: MessageId,
    pub text: &'static str,
}

/// Append-only message log with a count of replies still being "typed"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    pending: usize,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    /// Start a conversation with the bot greeting
    #[must_use]
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::bot(GREETING)],
            pending: 0,
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub const fn pending_replies(&self) -> usize {
        self.pending
    }

    #[must_use]
    pub const fn is_typing(&self) -> bool {
        self.pending > 0
    }

    /// Quick questions are offered only at the start of a conversation
    #[must_use]
    pub fn shows_quick_questions(&self) -> bool {
        self.messages.len() <= ChatConfig::QUICK_QUESTION_LIMIT && !self.is_typing()
    }

    /// Record a user message and decide the reply.
    ///
    /// Blank input is ignored: nothing is appended and no reply is scheduled.
    pub fn submit(&mut self, input: &str) -> Option<PendingReply> {
        if input.trim().is_empty() {
            return None;
        }

        let message = ChatMessage::user(input);
        let reply = PendingReply {
            in_reply_to: message.id,
            text: faq::reply_for(input),
        };
        tracing::debug!(message_id = %message.id, "chat message submitted");

        self.messages.push(message);
        self.pending += 1;
        Some(reply)
    }

    /// Append the bot message for a reply returned by [`Self::submit`]
    pub fn deliver(&mut self, reply: PendingReply) -> &ChatMessage {
        self.pending = self.pending.saturating_sub(1);
        self.messages.push(ChatMessage::bot(reply.text));
        let message = &self.messages[self.messages.len() - 1];
        tracing::debug!(
            message_id = %message.id,
            in_reply_to = %reply.in_reply_to,
            "chat reply delivered"
        );
        message
    }

    /// Drop a reply whose delay was cancelled
    pub fn abandon(&mut self, reply: PendingReply) {
        self.pending = self.pending.saturating_sub(1);
        tracing::debug!(in_reply_to = %reply.in_reply_to, "chat reply abandoned");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faq::{FALLBACK_RESPONSE, FAQ_ENTRIES};

    #[test]
    fn test_new_conversation_has_greeting() {
        let conversation = Conversation::new();
        assert_eq!(conversation.messages().len(), 1);
        assert_eq!(conversation.messages()[0].text, GREETING);
        assert_eq!(conversation.messages()[0].sender, Sender::Bot);
        assert!(!conversation.is_typing());
    }

    #[test]
    fn test_blank_submission_is_noop() {
        let mut conversation = Conversation::new();
        assert!(conversation.submit("").is_none());
        assert!(conversation.submit("   \t").is_none());
        assert_eq!(conversation.messages().len(), 1);
        assert_eq!(conversation.pending_replies(), 0);
    }

    #[test]
    fn test_submit_then_deliver_appends_one_message_each() {
        let mut conversation = Conversation::new();
        let reply = conversation.submit("Is this legal?").unwrap();
        assert_eq!(conversation.messages().len(), 2);
        assert!(conversation.messages()[1].is_user());
        assert_eq!(conversation.messages()[1].text, "Is this legal?");
        assert!(conversation.is_typing());

        let user_id = conversation.messages()[1].id;
        assert_eq!(reply.in_reply_to, user_id);

        let delivered = conversation.deliver(reply);
        assert_eq!(delivered.sender, Sender::Bot);
        assert_eq!(delivered.text, FAQ_ENTRIES[1].response);
        assert_eq!(conversation.messages().len(), 3);
        assert!(!conversation.is_typing());
    }

    #[test]
    fn test_unmatched_input_gets_fallback() {
        let mut conversation = Conversation::new();
        let reply = conversation.submit("tell me a joke").unwrap();
        assert_eq!(reply.text, FALLBACK_RESPONSE);
    }

    #[test]
    fn test_overlapping_submissions_each_get_a_reply() {
        let mut conversation = Conversation::new();
        let first = conversation.submit("is it secure").unwrap();
        let second = conversation.submit("how long does it take").unwrap();
        assert_eq!(conversation.pending_replies(), 2);

        conversation.deliver(first);
        assert!(conversation.is_typing());
        conversation.deliver(second);
        assert!(!conversation.is_typing());

        let senders: Vec<Sender> = conversation.messages().iter().map(|m| m.sender).collect();
        assert_eq!(
            senders,
            vec![Sender::Bot, Sender::User, Sender::User, Sender::Bot, Sender::Bot]
        );
    }

    #[test]
    fn test_abandon_clears_typing_without_message() {
        let mut conversation = Conversation::new();
        let reply = conversation.submit("is it secure").unwrap();
        conversation.abandon(reply);
        assert!(!conversation.is_typing());
        assert_eq!(conversation.messages().len(), 2);
    }

    #[test]
    fn test_quick_questions_visibility() {
        let mut conversation = Conversation::new();
        assert!(conversation.shows_quick_questions());

        let reply = conversation.submit("is this legal").unwrap();
        assert!(!conversation.shows_quick_questions());

        conversation.deliver(reply);
        assert!(!conversation.shows_quick_questions());
    }

    #[test]
    fn test_message_ids_are_unique() {
        let mut conversation = Conversation::new();
        let reply = conversation.submit("hello").unwrap();
        conversation.deliver(reply);
        let ids: std::collections::HashSet<_> =
            conversation.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), conversation.messages().len());
    }
}
