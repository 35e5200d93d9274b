//! Intent Classifier
//!
//! Routes a raw user message into one of the coaching intents:
//! - EmotionalSupport: distress signals take priority over everything else
//! - MoneyOpportunities: income and opportunity requests
//! - CareerGuidance: career development and job-hunting requests
//! - ComprehensiveLifeCoaching: fallback when nothing matches
//!
//! `GeneralChat` is never produced here; it is reachable only through
//! callers that route explicitly (see `LifeCoach::respond_with_intent`).

use crate::models::Intent;

/// Static keyword lists — zero allocation
const EMOTIONAL_KEYWORDS: &[&str] = &[
    "sad", "depressed", "anxious", "worried", "stressed", "overwhelmed",
];

const MONEY_KEYWORDS: &[&str] = &[
    "money", "job", "income", "opportunity", "earning", "financial",
];

const CAREER_KEYWORDS: &[&str] = &[
    "career", "work", "remote", "skills", "interview", "resume",
];

/// Intent classifier
pub struct IntentClassifier;

impl IntentClassifier {
    /// Classify a raw message into exactly one intent.
    ///
    /// Priority order is fixed: emotional keywords win over money keywords,
    /// money over career. First matching category wins; no scoring. Unmatched
    /// input always yields `ComprehensiveLifeCoaching`. Never fails.
    pub fn classify(message: &str) -> Intent {
        let message = message.to_lowercase();

        if EMOTIONAL_KEYWORDS.iter().any(|kw| message.contains(kw)) {
            Intent::EmotionalSupport
        } else if MONEY_KEYWORDS.iter().any(|kw| message.contains(kw)) {
            Intent::MoneyOpportunities
        } else if CAREER_KEYWORDS.iter().any(|kw| message.contains(kw)) {
            Intent::CareerGuidance
        } else {
            Intent::ComprehensiveLifeCoaching
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emotional_messages() {
        let cases = vec![
            "I'm feeling really depressed about my financial situation",
            "so stressed right now",
            "I am worried about next month",
            "feeling overwhelmed by everything",
        ];

        for c in cases {
            assert_eq!(IntentClassifier::classify(c), Intent::EmotionalSupport);
        }
    }

    #[test]
    fn test_money_messages() {
        let cases = vec![
            "I need to find ways to make money online",
            "any income ideas for me?",
            "show me a good opportunity",
        ];

        for c in cases {
            assert_eq!(IntentClassifier::classify(c), Intent::MoneyOpportunities);
        }
    }

    #[test]
    fn test_career_messages() {
        let cases = vec![
            "help me prepare for an interview",
            "review my resume please",
            "how do I grow my career?",
        ];

        for c in cases {
            assert_eq!(IntentClassifier::classify(c), Intent::CareerGuidance);
        }
    }

    #[test]
    fn test_emotional_beats_money() {
        // "stressed" and "money" both present; emotional keywords have priority
        let msg = "I'm stressed about money";
        assert_eq!(IntentClassifier::classify(msg), Intent::EmotionalSupport);
    }

    #[test]
    fn test_money_beats_career() {
        let msg = "job search and interview prep";
        assert_eq!(IntentClassifier::classify(msg), Intent::MoneyOpportunities);
    }

    #[test]
    fn test_unmatched_falls_back() {
        let cases = vec!["hello there", "what a day", ""];

        for c in cases {
            assert_eq!(
                IntentClassifier::classify(c),
                Intent::ComprehensiveLifeCoaching
            );
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            IntentClassifier::classify("I FEEL DEPRESSED"),
            Intent::EmotionalSupport
        );
    }
}
