//! Text-matching engine: normalization, small-talk shortcuts and the FAQ core.

pub mod decision;
pub mod faq_bot;
pub mod intent;
pub mod lemmatizer;
pub mod normalizer;
pub mod tokenizer;

pub use decision::{best_match, BestMatch};
pub use faq_bot::FaqBot;
pub use intent::{IntentMatcher, SmallTalk};
pub use lemmatizer::Lemmatizer;
pub use normalizer::TextNormalizer;
pub use tokenizer::{Token, TokenKind, Tokenizer};
