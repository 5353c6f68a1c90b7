//! The matching core: catalog, normalizer, index and reply policy.

use crate::config::{MatcherConfig, Replies};
use crate::index::{NormalizedDocument, SimilarityIndex};
use crate::types::response::round_confidence;
use crate::types::{FaqCatalog, FaqEntry, InitResult, MatchResult};

use super::decision::best_match;
use super::intent::{IntentMatcher, SmallTalk};
use super::normalizer::TextNormalizer;

/// Immutable FAQ matcher.
///
/// Construct once with [`FaqBot::initialize`]; afterwards [`FaqBot::handle`]
/// is a pure read and may be called from any number of threads at once.
pub struct FaqBot {
    catalog: FaqCatalog,
    normalizer: TextNormalizer,
    index: SimilarityIndex,
    intents: IntentMatcher,
    replies: Replies,
    threshold: f32,
}

impl FaqBot {
    /// Normalize every question and fit the similarity index.
    pub fn initialize(catalog: FaqCatalog, config: &MatcherConfig) -> InitResult<Self> {
        config.validate()?;
        let normalizer = TextNormalizer::from_config(&config.normalizer)?;

        let documents: Vec<NormalizedDocument> = catalog
            .iter()
            .map(|entry| {
                NormalizedDocument::for_entry(entry.id, &normalizer.normalize(&entry.question))
            })
            .collect();

        let empty = documents.iter().filter(|d| d.is_empty()).count();
        if empty > 0 {
            log::warn!("{empty} FAQ question(s) normalize to no tokens and can never match");
        }

        let index = SimilarityIndex::build(&documents);

        Ok(Self {
            catalog,
            normalizer,
            index,
            intents: IntentMatcher::new(),
            replies: config.replies.clone(),
            threshold: config.threshold,
        })
    }

    /// [`FaqBot::initialize`] with the default configuration.
    pub fn with_defaults(catalog: FaqCatalog) -> InitResult<Self> {
        Self::initialize(catalog, &MatcherConfig::default())
    }

    /// Answer a question. Total: every input yields a [`MatchResult`].
    pub fn handle(&self, question: &str) -> MatchResult {
        if question.trim().is_empty() {
            return MatchResult::reply(&self.replies.empty, 0.0);
        }

        if let Some(intent) = self.intents.detect(question) {
            log::debug!("small talk: {intent:?}");
            let reply = match intent {
                SmallTalk::Greeting => &self.replies.greeting,
                SmallTalk::Goodbye => &self.replies.goodbye,
            };
            return MatchResult::reply(reply, 1.0).with_category(intent.category());
        }

        match self.find_best_match(question, self.threshold) {
            (Some(entry), score) => MatchResult {
                answer: entry.answer.clone(),
                confidence: round_confidence(score),
                matched_question: Some(entry.question.clone()),
                category: entry.category.clone(),
            },
            (None, score) => MatchResult::reply(&self.replies.decline, round_confidence(score)),
        }
    }

    /// Alias of [`FaqBot::handle`].
    pub fn get_response(&self, question: &str) -> MatchResult {
        self.handle(question)
    }

    /// Best FAQ for `question` at the given threshold, plus the best raw score.
    ///
    /// The score is returned even when no entry clears the threshold.
    pub fn find_best_match(&self, question: &str, threshold: f32) -> (Option<&FaqEntry>, f32) {
        let query = NormalizedDocument::query(&self.normalizer.normalize(question));
        let scores = self.index.score(&query);
        let best = best_match(&scores, threshold);

        let entry = best
            .position
            .and_then(|pos| self.index.faq_id(pos))
            .and_then(|id| self.catalog.get(id));

        log::debug!(
            "query {:?} -> best score {:.4}, matched {:?}",
            query.text(),
            best.score,
            entry.map(|e| e.id)
        );

        (entry, best.score)
    }

    /// Top `k` entries with their scores, for diagnostics.
    pub fn rank(&self, question: &str, k: usize) -> Vec<(&FaqEntry, f32)> {
        let query = NormalizedDocument::query(&self.normalizer.normalize(question));
        self.index
            .ranked(&query, k)
            .into_iter()
            .filter_map(|(id, score)| Some((self.catalog.get(id?)?, score)))
            .collect()
    }

    /// Catalog entries in load order.
    pub fn list_entries(&self) -> &[FaqEntry] {
        self.catalog.entries()
    }

    pub fn catalog(&self) -> &FaqCatalog {
        &self.catalog
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    pub fn index(&self) -> &SimilarityIndex {
        &self.index
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Number of FAQ entries.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}
