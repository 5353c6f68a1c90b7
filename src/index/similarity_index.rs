//! TF-IDF vector space over the normalized FAQ questions.

use std::collections::{BTreeSet, HashMap};

use super::document::NormalizedDocument;
use super::sparse::{cosine_similarity, SparseVector};

/// Weighted vector of one corpus document.
#[derive(Debug, Clone)]
pub struct DocumentVector {
    /// FAQ the vector was built from.
    pub faq_id: Option<i64>,
    pub vector: SparseVector,
}

/// Fitted TF-IDF model plus one weighted vector per corpus document.
///
/// The vocabulary is fixed at build time: query terms outside it carry no
/// weight. A catalog change means building a new index.
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    /// term → dimension (terms sorted lexicographically)
    vocabulary: HashMap<String, usize>,
    /// dimension → number of documents containing the term
    doc_freq: Vec<u32>,
    /// dimension → smoothed inverse document frequency
    idf: Vec<f32>,
    /// One vector per document, in input order.
    documents: Vec<DocumentVector>,
}

impl SimilarityIndex {
    /// Fit the vocabulary and IDF weights over `documents` and vectorize each.
    ///
    /// Documents with no tokens are valid and get an all-zero vector.
    pub fn build(documents: &[NormalizedDocument]) -> Self {
        let terms: BTreeSet<&str> = documents
            .iter()
            .flat_map(|d| d.tokens.iter().map(String::as_str))
            .collect();
        let vocabulary: HashMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(dim, term)| (term.to_string(), dim))
            .collect();

        let mut doc_freq = vec![0u32; vocabulary.len()];
        for doc in documents {
            let unique: BTreeSet<usize> = doc
                .tokens
                .iter()
                .filter_map(|t| vocabulary.get(t).copied())
                .collect();
            for dim in unique {
                doc_freq[dim] += 1;
            }
        }

        let n = documents.len() as f32;
        let idf = doc_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        let mut index = Self {
            vocabulary,
            doc_freq,
            idf,
            documents: Vec::with_capacity(documents.len()),
        };

        index.documents = documents
            .iter()
            .map(|doc| DocumentVector {
                faq_id: doc.faq_id,
                vector: index.project(doc),
            })
            .collect();

        log::info!(
            "built similarity index: {} documents, {} terms",
            index.documents.len(),
            index.vocabulary.len()
        );

        index
    }

    /// Map a document into the fitted vector space. Unknown terms are dropped.
    pub fn project(&self, doc: &NormalizedDocument) -> SparseVector {
        let mut counts: HashMap<usize, u32> = HashMap::new();
        for token in &doc.tokens {
            if let Some(&dim) = self.vocabulary.get(token) {
                *counts.entry(dim).or_insert(0) += 1;
            }
        }
        SparseVector::from_pairs(
            counts
                .into_iter()
                .map(|(dim, tf)| (dim, tf as f32 * self.idf[dim]))
                .collect(),
        )
    }

    /// Cosine similarity of `query` against every document, in build order.
    pub fn score(&self, query: &NormalizedDocument) -> Vec<f32> {
        let q = self.project(query);
        log::debug!(
            "query projected onto {} of {} terms",
            q.nnz(),
            self.vocabulary.len()
        );
        self.documents
            .iter()
            .map(|d| cosine_similarity(&q, &d.vector))
            .collect()
    }

    /// The `k` best `(faq_id, score)` pairs, highest first; ties keep build order.
    pub fn ranked(&self, query: &NormalizedDocument, k: usize) -> Vec<(Option<i64>, f32)> {
        let mut scored: Vec<(Option<i64>, f32)> = self
            .score(query)
            .into_iter()
            .zip(&self.documents)
            .map(|(score, doc)| (doc.faq_id, score))
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(k);
        scored
    }

    /// FAQ id of the document at `position`.
    pub fn faq_id(&self, position: usize) -> Option<i64> {
        self.documents.get(position).and_then(|d| d.faq_id)
    }

    pub fn documents(&self) -> &[DocumentVector] {
        &self.documents
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Number of distinct terms in the vocabulary.
    pub fn term_count(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of documents containing `term`.
    pub fn doc_frequency(&self, term: &str) -> usize {
        self.vocabulary
            .get(term)
            .map(|&dim| self.doc_freq[dim] as usize)
            .unwrap_or(0)
    }

    /// IDF weight of `term`, if it is in the vocabulary.
    pub fn idf(&self, term: &str) -> Option<f32> {
        self.vocabulary.get(term).map(|&dim| self.idf[dim])
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(texts: &[&str]) -> Vec<NormalizedDocument> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| NormalizedDocument::for_entry(i as i64 + 1, t))
            .collect()
    }

    #[test]
    fn idf_is_smoothed() {
        let index = SimilarityIndex::build(&corpus(&["reset password", "change password"]));
        assert_eq!(index.term_count(), 3);
        assert_eq!(index.doc_frequency("password"), 2);
        assert_eq!(index.doc_frequency("reset"), 1);
        assert!((index.idf("password").unwrap() - 1.0).abs() < 1e-6);
        let expected = (3.0f32 / 2.0).ln() + 1.0;
        assert!((index.idf("reset").unwrap() - expected).abs() < 1e-6);
        assert_eq!(index.idf("missing"), None);
    }

    #[test]
    fn unseen_terms_are_ignored() {
        let index = SimilarityIndex::build(&corpus(&["reset password"]));
        let q = index.project(&NormalizedDocument::query("reset blockchain"));
        assert_eq!(q.nnz(), 1);
        assert!(!index.contains_term("blockchain"));
    }

    #[test]
    fn scores_follow_build_order() {
        let index = SimilarityIndex::build(&corpus(&[
            "ship international",
            "reset password",
            "refund order",
        ]));
        let scores = index.score(&NormalizedDocument::query("reset password"));
        assert_eq!(scores.len(), 3);
        assert_eq!(scores[0], 0.0);
        assert!((scores[1] - 1.0).abs() < 1e-6);
        assert_eq!(scores[2], 0.0);
        assert_eq!(index.faq_id(1), Some(2));
    }

    #[test]
    fn degenerate_corpus_scores_zero() {
        let index = SimilarityIndex::build(&corpus(&["", ""]));
        assert_eq!(index.term_count(), 0);
        assert_eq!(
            index.score(&NormalizedDocument::query("anything")),
            vec![0.0, 0.0]
        );
    }

    #[test]
    fn ranked_is_stable_on_ties() {
        let index = SimilarityIndex::build(&corpus(&[
            "track order",
            "cancel order",
            "order status",
        ]));
        let ranked = index.ranked(&NormalizedDocument::query("order"), 3);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].0, Some(1));
        assert_eq!(ranked[1].0, Some(2));
        assert_eq!(ranked[2].0, Some(3));
    }

    #[test]
    fn repeated_terms_increase_weight() {
        let index = SimilarityIndex::build(&corpus(&["order order refund", "refund"]));
        let v = &index.documents()[0].vector;
        let order_dim = v
            .entries()
            .iter()
            .find(|(_, w)| *w > 1.5)
            .map(|(d, _)| *d);
        assert!(order_dim.is_some());
    }
}
