//! Scripted chat assistant.
//!
//! Replies are picked from fixed pools of canned text. The lower-cased input is scanned
//! against an ordered keyword table; the first keyword contained in the input selects its
//! pool, otherwise the general pool is used. Within a pool every reply is equally likely.
//!
//! `emergency` is checked before every other keyword so that a message such as
//! "emergency appointment" always gets the emergency advice.

use rand::Rng;

/// A keyword and the replies it triggers.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub keyword: &'static str,
    pub replies: &'static [&'static str],
}

pub const EMERGENCY_REPLIES: &[&str] = &[
    "If you're experiencing a medical emergency, please call emergency services immediately at 102 or visit your nearest emergency room.",
    "This sounds serious. Please seek immediate medical attention. Would you like me to show you the nearest emergency facilities?",
];

pub const HOSPITAL_REPLIES: &[&str] = &[
    "Based on your location, here are some recommended hospitals:\n1. Victoria Hospital\n2. Manipal Hospital\n3. Apollo Hospital\nWould you like more details about any of these?",
    "I can help you find the best hospital for your needs. What type of medical care are you looking for?",
];

pub const APPOINTMENT_REPLIES: &[&str] = &[
    "I can help you book an appointment. Would you like to:\n1. Book a new appointment\n2. Check existing appointments\n3. Cancel an appointment",
    "Sure, I can assist with appointments. Which specialist would you like to see?",
];

pub const SYMPTOMS_REPLIES: &[&str] = &[
    "I understand you're not feeling well. Could you please describe your symptoms in detail so I can better assist you?",
    "To help you better, please let me know:\n- How long have you had these symptoms?\n- Are they constant or intermittent?\n- Have you taken any medication?",
];

pub const PRESCRIPTION_REPLIES: &[&str] = &[
    "For prescription-related queries, please consult with your doctor. I can help you schedule an appointment if needed.",
    "While I can't provide medical advice, I can help you connect with a healthcare provider to discuss your prescription.",
];

pub const GENERAL_REPLIES: &[&str] = &[
    "I'm here to help with your healthcare needs. Could you please provide more details about your query?",
    "I can assist you with appointments, finding hospitals, or checking symptoms. What would you like to know?",
    "How can I assist you with your healthcare needs today?",
];

/// Keyword table in match order.
pub const HEALTHCARE_RULES: &[KeywordRule] = &[
    KeywordRule {
        keyword: "emergency",
        replies: EMERGENCY_REPLIES,
    },
    KeywordRule {
        keyword: "hospital",
        replies: HOSPITAL_REPLIES,
    },
    KeywordRule {
        keyword: "appointment",
        replies: APPOINTMENT_REPLIES,
    },
    KeywordRule {
        keyword: "symptoms",
        replies: SYMPTOMS_REPLIES,
    },
    KeywordRule {
        keyword: "prescription",
        replies: PRESCRIPTION_REPLIES,
    },
];

/// Keyword-to-canned-reply lookup.
#[derive(Debug, Clone, Copy)]
pub struct KeywordResponder {
    rules: &'static [KeywordRule],
    fallback: &'static [&'static str],
}

impl Default for KeywordResponder {
    fn default() -> Self {
        Self {
            rules: HEALTHCARE_RULES,
            fallback: GENERAL_REPLIES,
        }
    }
}

impl KeywordResponder {
    pub fn new() -> Self {
        Self::default()
    }

    /// First rule whose keyword occurs in the input, ignoring case.
    pub fn matching_rule(&self, input: &str) -> Option<&'static KeywordRule> {
        let lowered = input.to_lowercase();
        self.rules
            .iter()
            .find(|rule| lowered.contains(rule.keyword))
    }

    /// The pool a reply to `input` will be drawn from.
    pub fn pool_for(&self, input: &str) -> &'static [&'static str] {
        self.matching_rule(input)
            .map(|rule| rule.replies)
            .unwrap_or(self.fallback)
    }

    /// Pick a reply using the supplied random source.
    pub fn reply_with<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> &'static str {
        let pool = self.pool_for(input);
        pool[rng.gen_range(0..pool.len())]
    }

    /// Pick a reply using the thread-local RNG.
    pub fn reply(&self, input: &str) -> &'static str {
        self.reply_with(input, &mut rand::thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const UNMATCHED_INPUTS: &[&str] = &[
        "",
        "hello",
        "what are your opening hours?",
        "I need a doctor",
        "symptom",
        "appoint me",
    ];

    #[test]
    fn test_every_pool_is_non_empty() {
        assert!(!GENERAL_REPLIES.is_empty());
        for rule in HEALTHCARE_RULES {
            assert!(!rule.replies.is_empty(), "{} has no replies", rule.keyword);
            assert_eq!(rule.keyword, rule.keyword.to_lowercase());
        }
    }

    #[test]
    fn test_emergency_inputs_always_get_emergency_replies() {
        let responder = KeywordResponder::new();
        let mut rng = StdRng::seed_from_u64(7);
        let inputs = [
            "emergency",
            "EMERGENCY!!",
            "This is an Emergency",
            "emergency appointment please",
            "which hospital handles emergency cases",
            "my symptoms feel like an emergency",
            "prescription emergency",
        ];

        for input in inputs {
            for _ in 0..20 {
                let reply = responder.reply_with(input, &mut rng);
                assert!(EMERGENCY_REPLIES.contains(&reply), "{input:?} -> {reply:?}");
            }
        }
    }

    #[test]
    fn test_unmatched_inputs_get_general_replies() {
        let responder = KeywordResponder::new();
        let mut rng = StdRng::seed_from_u64(11);

        for input in UNMATCHED_INPUTS {
            assert!(responder.matching_rule(input).is_none());
            for _ in 0..20 {
                let reply = responder.reply_with(input, &mut rng);
                assert!(GENERAL_REPLIES.contains(&reply), "{input:?} -> {reply:?}");
            }
        }
    }

    #[test]
    fn test_keywords_match_case_insensitively_as_substrings() {
        let responder = KeywordResponder::new();
        assert_eq!(
            responder.matching_rule("Find me a HOSPITAL").map(|r| r.keyword),
            Some("hospital")
        );
        assert_eq!(
            responder.matching_rule("appointments tomorrow").map(|r| r.keyword),
            Some("appointment")
        );
        assert_eq!(
            responder.matching_rule("my Symptoms are bad").map(|r| r.keyword),
            Some("symptoms")
        );
        assert_eq!(
            responder.matching_rule("refill my prescription").map(|r| r.keyword),
            Some("prescription")
        );
    }

    #[test]
    fn test_first_rule_in_table_order_wins() {
        let responder = KeywordResponder::new();
        let rule = responder
            .matching_rule("hospital appointment for my symptoms")
            .unwrap();
        assert_eq!(rule.keyword, "hospital");
        assert_eq!(responder.pool_for("appointment symptoms"), APPOINTMENT_REPLIES);
    }

    #[test]
    fn test_selection_reaches_every_reply_in_a_pool() {
        let responder = KeywordResponder::new();
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            seen.insert(responder.reply_with("hi there", &mut rng));
        }

        assert_eq!(seen.len(), GENERAL_REPLIES.len());
    }

    #[test]
    fn test_thread_rng_reply_is_from_matched_pool() {
        let reply = KeywordResponder::new().reply("book an appointment");
        assert!(APPOINTMENT_REPLIES.contains(&reply));
    }
}
