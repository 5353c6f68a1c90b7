//! Per-query outcome.

use serde::{Deserialize, Serialize};

/// What a single question resolved to.
///
/// `confidence` is always within `[0, 1]`. `matched_question` is only set when
/// an FAQ cleared the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub answer: String,
    pub confidence: f32,
    pub matched_question: Option<String>,
    pub category: Option<String>,
}

impl MatchResult {
    /// A reply that carries no FAQ metadata.
    pub fn reply(answer: impl Into<String>, confidence: f32) -> Self {
        Self {
            answer: answer.into(),
            confidence,
            matched_question: None,
            category: None,
        }
    }

    /// Attach a category tag.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// True when an FAQ entry answered the question.
    pub fn is_faq_match(&self) -> bool {
        self.matched_question.is_some()
    }
}

/// Round a similarity score to three decimals for display.
pub fn round_confidence(score: f32) -> f32 {
    (score * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_three_decimals() {
        assert_eq!(round_confidence(0.12345), 0.123);
        assert_eq!(round_confidence(0.9996), 1.0);
        assert_eq!(round_confidence(0.0), 0.0);
    }

    #[test]
    fn reply_has_no_metadata() {
        let r = MatchResult::reply("hello", 1.0).with_category("smalltalk:greeting");
        assert_eq!(r.matched_question, None);
        assert_eq!(r.category.as_deref(), Some("smalltalk:greeting"));
        assert!(!r.is_faq_match());
    }

    #[test]
    fn serializes_nulls_for_missing_metadata() {
        let r = MatchResult::reply("Please ask a question.", 0.0);
        let json = serde_json::to_value(&r).unwrap();
        assert!(json["matched_question"].is_null());
        assert!(json["category"].is_null());
    }
}
