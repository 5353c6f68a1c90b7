//! Error types.
//!
//! Only startup can fail. Once a [`crate::FaqBot`] exists, every query maps to
//! a [`crate::MatchResult`].

use std::path::PathBuf;

/// Fatal errors raised while bringing the matcher up.
#[derive(Debug, thiserror::Error)]
pub enum InitializationError {
    #[error("FAQ catalog not readable at {path}: {source}")]
    CatalogUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed FAQ catalog: {0}")]
    CatalogMalformed(#[from] serde_json::Error),

    #[error("no FAQs found in the catalog")]
    EmptyCatalog,

    #[error("duplicate FAQ id {0} in catalog")]
    DuplicateId(i64),

    #[error("normalization resource unavailable: {0}")]
    NormalizerResource(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type InitResult<T> = Result<T, InitializationError>;

/// Returned by the service boundary when no core is in service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("FAQ service is not available: {reason}")]
pub struct ServiceUnavailable {
    pub reason: String,
}
