//! Site configuration

use serde::{Deserialize, Serialize};

/// Chat widget configuration
pub struct ChatConfig;

impl ChatConfig {
    /// Simulated "typing" latency before a bot reply is shown
    pub const REPLY_DELAY_MS: u32 = 1_200;

    /// Quick questions stay visible while the log holds at most this many messages
    pub const QUICK_QUESTION_LIMIT: usize = 2;

    /// Address the fallback reply points users to
    pub const SUPPORT_EMAIL: &'static str = "support@softsell.com";
}

/// Contact form configuration
pub struct ContactConfig;

impl ContactConfig {
    /// Simulated network latency of a submission
    pub const SUBMIT_DELAY_MS: u32 = 1_000;

    /// How long the success banner stays up after a submission
    pub const SUCCESS_BANNER_MS: u32 = 5_000;
}

/// Header and scroll-spy configuration
pub struct ScrollConfig;

impl ScrollConfig {
    /// Fixed header height added to the scroll offset before hit-testing sections
    pub const HEADER_OFFSET_PX: f64 = 100.0;

    /// Header switches to its compact style past this offset
    pub const SCROLLED_THRESHOLD_PX: f64 = 10.0;

    /// Minimum spacing between two handled scroll events
    pub const THROTTLE_MS: f64 = 50.0;
}

/// Theme persistence configuration
pub struct ThemeConfig;

impl ThemeConfig {
    /// Local storage key holding the serialized theme
    pub const STORAGE_KEY: &'static str = "theme";

    /// Media query used when nothing has been saved yet
    pub const DARK_MEDIA_QUERY: &'static str = "(prefers-color-scheme: dark)";
}

/// Delays used by the interactive components.
///
/// Components take this as a prop so demos and tests can shorten the waits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub chat_reply_ms: u32,
    pub submit_ms: u32,
    pub success_banner_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            chat_reply_ms: ChatConfig::REPLY_DELAY_MS,
            submit_ms: ContactConfig::SUBMIT_DELAY_MS,
            success_banner_ms: ContactConfig::SUCCESS_BANNER_MS,
        }
    }
}

impl Timings {
    /// Timings with every delay set to zero
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            chat_reply_ms: 0,
            submit_ms: 0,
            success_banner_ms: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings_match_constants() {
        let timings = Timings::default();
        assert_eq!(timings.chat_reply_ms, 1_200);
        assert_eq!(timings.submit_ms, 1_000);
        assert_eq!(timings.success_banner_ms, 5_000);
    }

    #[test]
    fn test_partial_timings_fill_defaults() {
        let timings: Timings = serde_json::from_str(r#"{"chat_reply_ms": 10}"#).unwrap();
        assert_eq!(timings.chat_reply_ms, 10);
        assert_eq!(timings.submit_ms, ContactConfig::SUBMIT_DELAY_MS);
    }
}
