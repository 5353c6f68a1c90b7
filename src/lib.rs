//! FAQ matching engine.
//!
//! Answers free-text questions from a fixed FAQ catalog using classical sparse
//! lexical retrieval: questions are normalized to base-form tokens, weighted
//! with TF-IDF and compared by cosine similarity. Greetings and goodbyes are
//! short-circuited with canned replies before the index is consulted.
//!
//! ```no_run
//! use faq_match::{FaqBot, FaqCatalog};
//!
//! let catalog = FaqCatalog::load("data/faqs.json")?;
//! let bot = FaqBot::with_defaults(catalog)?;
//! let reply = bot.handle("How can I reset my password?");
//! println!("{} ({:.3})", reply.answer, reply.confidence);
//! # Ok::<(), faq_match::InitializationError>(())
//! ```

pub mod config;
pub mod engine;
pub mod index;
pub mod service;
pub mod types;

pub use config::{MatcherConfig, NormalizerConfig, Replies};
pub use engine::{
    best_match, BestMatch, FaqBot, IntentMatcher, Lemmatizer, SmallTalk, TextNormalizer, Token,
    TokenKind, Tokenizer,
};
pub use index::{cosine_similarity, NormalizedDocument, SimilarityIndex, SparseVector};
pub use service::{FaqService, HealthReport, HealthStatus};
pub use types::{
    FaqCatalog, FaqEntry, InitResult, InitializationError, MatchResult, ServiceUnavailable,
    DEFAULT_THRESHOLD, GOODBYE_CATEGORY, GREETING_CATEGORY,
};
