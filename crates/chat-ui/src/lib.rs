pub mod components;
pub mod hooks;
pub mod state;
pub mod styles;

// Re-export main components
pub use components::{ChatInput, ChatWidget, Message, MessageList, QuickQuestions, TypingIndicator};
pub use hooks::{schedule_replies, spawn_after, use_cancellation_scope};
pub use state::{ChatAction, ChatState, ReplySchedule};
