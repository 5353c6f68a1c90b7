//! Similarity index over normalized FAQ questions. Built once, never mutated.

pub mod document;
pub mod similarity_index;
pub mod sparse;

pub use document::NormalizedDocument;
pub use similarity_index::{DocumentVector, SimilarityIndex};
pub use sparse::{cosine_similarity, SparseVector};
