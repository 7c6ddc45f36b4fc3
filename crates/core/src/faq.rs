//! Canned-answer matching for the chat widget.
//!
//! The table is small and fixed, so matching is a linear scan in declaration
//! order. The first entry whose key is contained in the normalized input, or
//! which contains the normalized input, wins. Earlier entries therefore take
//! priority when an input mentions several topics.

/// A static (keyword, canned response) pair
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    /// Lowercase phrase matched against user input
    pub key: &'static str,
    pub response: &'static str,
}

/// A shortcut button offered in a fresh conversation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickQuestion {
    pub label: &'static str,
    /// Submitted verbatim as the user message
    pub key: &'static str,
}

pub const FALLBACK_RESPONSE: &str = "I don't have information on that specific topic. For detailed assistance, please contact our support team at support@softsell.com.";

pub const FAQ_ENTRIES: [FaqEntry; 6] = [
    FaqEntry {
        key: "how do i sell my license",
        response: "To sell your software license on SoftSell, follow these 3 simple steps: 1) Create an account and verify your identity, 2) List your license with all relevant details (purchase date, edition, seats available), 3) Once verified by our team, your license will be listed on our marketplace. When sold, we'll guide you through the secure transfer process.",
    },
    FaqEntry {
        key: "is this legal",
        response: "Yes, selling unused software licenses is legal in most cases, particularly for perpetual licenses. SoftSell ensures compliance with all applicable laws and software publisher policies. Our verification team confirms that each license is legitimate and transferable before listing.",
    },
    FaqEntry {
        key: "how much can i sell for",
        response: "License resale values typically range from 30-70% of the original retail price, depending on factors like software popularity, remaining subscription time, and number of seats. Our platform shows recent sale prices for similar licenses to help you price competitively.",
    },
    FaqEntry {
        key: "how long does it take",
        response: "The verification process typically takes 24-48 hours. Once verified, licenses are listed immediately. The time to sell varies by demand, but popular software often sells within a week. After a sale, the transfer process usually takes 1-3 business days to complete.",
    },
    FaqEntry {
        key: "is it secure",
        response: "Absolutely! Security is our top priority. We use bank-level encryption, secure our transactions through an escrow system, verify all licenses and users, and provide documentation for every transfer. Our platform is fully compliant with data protection regulations.",
    },
    FaqEntry {
        key: "what software can i sell",
        response: "SoftSell supports the transfer of most major enterprise and productivity software licenses, including Microsoft, Adobe, Autodesk, Oracle, SAP, and many others. Some restrictions apply for subscription-based services. Contact us if you're unsure about a specific product.",
    },
];

pub const QUICK_QUESTIONS: [QuickQuestion; 3] = [
    QuickQuestion {
        label: "How do I sell my license?",
        key: "how do i sell my license",
    },
    QuickQuestion {
        label: "Is it legal?",
        key: "is this legal",
    },
    QuickQuestion {
        label: "How much can I sell for?",
        key: "how much can i sell for",
    },
];

/// Lowercase and trim raw user input
#[must_use]
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Find the first entry matching `input`, if any
#[must_use]
pub fn find_entry(input: &str) -> Option<&'static FaqEntry> {
    let normalized = normalize(input);
    FAQ_ENTRIES
        .iter()
        .find(|entry| normalized.contains(entry.key) || entry.key.contains(normalized.as_str()))
}

/// Produce exactly one reply for `input`, falling back to the support message
#[must_use]
pub fn reply_for(input: &str) -> &'static str {
    find_entry(input).map_or(FALLBACK_RESPONSE, |entry| entry.response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_returns_its_response() {
        for entry in &FAQ_ENTRIES {
            assert_eq!(reply_for(entry.key), entry.response);
        }
    }

    #[test]
    fn test_pricing_question_with_punctuation() {
        assert_eq!(reply_for("How much can I sell for?"), FAQ_ENTRIES[2].response);
    }

    #[test]
    fn test_input_is_trimmed_and_lowercased() {
        assert_eq!(reply_for("   IS IT SECURE   "), FAQ_ENTRIES[4].response);
    }

    #[test]
    fn test_partial_input_contained_in_key() {
        // "long does" is a substring of "how long does it take"
        assert_eq!(reply_for("long does"), FAQ_ENTRIES[3].response);
    }

    #[test]
    fn test_unrelated_input_falls_back() {
        assert_eq!(reply_for("do you ship hardware?"), FALLBACK_RESPONSE);
        assert_eq!(reply_for("pricing for volume deals"), FALLBACK_RESPONSE);
        assert!(find_entry("xyz").is_none());
    }

    #[test]
    fn test_earliest_declared_key_wins() {
        let input = "what software can i sell and is this legal";
        assert_eq!(reply_for(input), FAQ_ENTRIES[1].response);

        let input = "is it secure? how do i sell my license";
        assert_eq!(reply_for(input), FAQ_ENTRIES[0].response);
    }

    #[test]
    fn test_short_fragment_matches_first_key_containing_it() {
        // "sell" appears in several keys; declaration order decides
        assert_eq!(reply_for("sell"), FAQ_ENTRIES[0].response);
    }

    #[test]
    fn test_fallback_mentions_support_address() {
        assert!(FALLBACK_RESPONSE.contains(crate::config::ChatConfig::SUPPORT_EMAIL));
    }

    #[test]
    fn test_quick_questions_resolve_to_table_entries() {
        for question in &QUICK_QUESTIONS {
            let entry = find_entry(question.key).unwrap();
            assert_eq!(entry.key, question.key);
        }
    }
}
