//! Literal small-talk detection, checked before the similarity index.
//!
//! Short chit-chat is too sparse for TF-IDF to score reliably, so greetings and
//! goodbyes are matched as whole words against the raw question.

use regex::{Regex, RegexBuilder};

use crate::types::{GOODBYE_CATEGORY, GREETING_CATEGORY};

const GREETING_PHRASES: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "greetings",
    "good morning",
    "good afternoon",
    "good evening",
];

const GOODBYE_PHRASES: &[&str] = &["bye", "goodbye", "see you", "see ya", "take care", "farewell"];

/// A conversational intent answered without consulting the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SmallTalk {
    Greeting,
    Goodbye,
}

impl SmallTalk {
    /// Category tag reported alongside the canned reply.
    pub fn category(self) -> &'static str {
        match self {
            SmallTalk::Greeting => GREETING_CATEGORY,
            SmallTalk::Goodbye => GOODBYE_CATEGORY,
        }
    }
}

/// Case-insensitive whole-word matcher for greeting and goodbye phrases.
#[derive(Debug, Clone)]
pub struct IntentMatcher {
    greeting: Regex,
    goodbye: Regex,
}

impl IntentMatcher {
    pub fn new() -> Self {
        Self {
            greeting: phrase_pattern(GREETING_PHRASES),
            goodbye: phrase_pattern(GOODBYE_PHRASES),
        }
    }

    /// Greeting wins when both intents are present.
    pub fn detect(&self, raw: &str) -> Option<SmallTalk> {
        if self.greeting.is_match(raw) {
            Some(SmallTalk::Greeting)
        } else if self.goodbye.is_match(raw) {
            Some(SmallTalk::Goodbye)
        } else {
            None
        }
    }
}

impl Default for IntentMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// `\b(p1|p2|...)\b`, case-insensitive.
fn phrase_pattern(phrases: &[&str]) -> Regex {
    let alternation = phrases
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");
    // escaped constant phrases always compile
    RegexBuilder::new(&format!(r"\b({alternation})\b"))
        .case_insensitive(true)
        .build()
        .expect("static intent pattern")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_greetings_case_insensitively() {
        let m = IntentMatcher::new();
        assert_eq!(m.detect("hi there"), Some(SmallTalk::Greeting));
        assert_eq!(m.detect("HELLO"), Some(SmallTalk::Greeting));
        assert_eq!(m.detect("Good Morning, team"), Some(SmallTalk::Greeting));
    }

    #[test]
    fn detects_goodbyes() {
        let m = IntentMatcher::new();
        assert_eq!(m.detect("ok bye"), Some(SmallTalk::Goodbye));
        assert_eq!(m.detect("See you later"), Some(SmallTalk::Goodbye));
        assert_eq!(m.detect("take care!"), Some(SmallTalk::Goodbye));
    }

    #[test]
    fn greeting_takes_precedence() {
        let m = IntentMatcher::new();
        assert_eq!(m.detect("hello, goodbye"), Some(SmallTalk::Greeting));
        assert_eq!(m.detect("goodbye and hello"), Some(SmallTalk::Greeting));
    }

    #[test]
    fn requires_whole_words() {
        let m = IntentMatcher::new();
        assert_eq!(m.detect("which shipping options exist"), None);
        assert_eq!(m.detect("theyre in the hive"), None);
        assert_eq!(m.detect("goodmorning"), None);
        assert_eq!(m.detect("byte order"), None);
    }

    #[test]
    fn categories() {
        assert_eq!(SmallTalk::Greeting.category(), "smalltalk:greeting");
        assert_eq!(SmallTalk::Goodbye.category(), "smalltalk:goodbye");
    }
}
