//! SoftSell core logic, independent of the browser

pub mod carousel;
pub mod chat;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod faq;
pub mod scroll_spy;
pub mod task;
pub mod theme;

pub use carousel::Carousel;
pub use chat::{ChatMessage, Conversation, MessageId, PendingReply, Sender};
pub use config::{ChatConfig, ContactConfig, ScrollConfig, ThemeConfig, Timings};
pub use contact::{
    ContactField, ContactForm, ContactFormErrors, ContactFormState, LicenseType, SubmissionState,
    SubmitOutcome,
};
pub use error::{CoreError, CoreResult, ErrorContext};
pub use faq::{FaqEntry, QuickQuestion, reply_for};
pub use scroll_spy::{ScrollSpy, SectionBounds, SectionGeometry, SectionId, Throttle, ThrottleDecision};
pub use task::{CancellationToken, TaskId, TaskSlot, run_unless_cancelled};
pub use theme::{Theme, ThemeStore};
