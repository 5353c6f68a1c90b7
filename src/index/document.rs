//! Normalized token sequence tied to the FAQ it came from.

/// Token sequence of one FAQ question (or of a query), keyed by FAQ id.
///
/// The id travels with the tokens so that scores can always be joined back to
/// their catalog entry, whatever order a caller keeps documents in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDocument {
    pub faq_id: Option<i64>,
    pub tokens: Vec<String>,
}

impl NormalizedDocument {
    /// Document for a catalog entry, from its normalized text.
    pub fn for_entry(faq_id: i64, normalized: &str) -> Self {
        Self {
            faq_id: Some(faq_id),
            tokens: split(normalized),
        }
    }

    /// Query document, from normalized text.
    pub fn query(normalized: &str) -> Self {
        Self {
            faq_id: None,
            tokens: split(normalized),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Space-joined form, as produced by the normalizer.
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }
}

fn split(normalized: &str) -> Vec<String> {
    normalized.split_whitespace().map(str::to_string).collect()
}
