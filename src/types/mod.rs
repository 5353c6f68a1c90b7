//! Data model shared by the matching engine and the service boundary.

pub mod entry;
pub mod error;
pub mod response;

pub use entry::{FaqCatalog, FaqEntry};
pub use error::{InitResult, InitializationError, ServiceUnavailable};
pub use response::MatchResult;

/// Minimum cosine similarity for an FAQ to be surfaced as an answer.
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// Category tag attached to greeting replies.
pub const GREETING_CATEGORY: &str = "smalltalk:greeting";

/// Category tag attached to goodbye replies.
pub const GOODBYE_CATEGORY: &str = "smalltalk:goodbye";
