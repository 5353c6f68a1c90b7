//! Canonical token form shared by the FAQ corpus and incoming questions.

use std::collections::HashSet;

use super::lemmatizer::Lemmatizer;
use super::tokenizer::{Token, Tokenizer};
use crate::config::NormalizerConfig;
use crate::types::InitResult;

/// Closed-class English function words excluded from matching.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "almost", "alone", "along",
    "already", "also", "although", "always", "am", "among", "an", "and", "another", "any",
    "anyhow", "anyone", "anything", "anyway", "anywhere", "are", "around", "as", "at", "be",
    "became", "because", "become", "becomes", "been", "before", "being", "below", "beside",
    "besides", "between", "beyond", "both", "but", "by", "can", "could", "did", "do", "does",
    "doing", "done", "down", "during", "each", "either", "else", "elsewhere", "enough", "even",
    "ever", "every", "everyone", "everything", "everywhere", "except", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "hence", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "however", "i", "if", "in", "indeed", "into", "is", "it",
    "its", "itself", "just", "least", "less", "may", "me", "meanwhile", "might", "mine", "more",
    "moreover", "most", "mostly", "much", "must", "my", "myself", "neither", "never",
    "nevertheless", "no", "nobody", "none", "noone", "nor", "not", "nothing", "now", "nowhere",
    "of", "off", "often", "on", "once", "one", "only", "onto", "or", "other", "others",
    "otherwise", "our", "ours", "ourselves", "out", "over", "own", "per", "perhaps", "please",
    "quite", "rather", "really", "same", "several", "shall", "she", "should", "since", "so",
    "some", "somehow", "someone", "something", "sometime", "sometimes", "somewhere", "still",
    "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then", "thence",
    "there", "thereafter", "thereby", "therefore", "therein", "these", "they", "this", "those",
    "though", "through", "throughout", "thru", "thus", "to", "together", "too", "toward",
    "towards", "under", "unless", "until", "up", "upon", "us", "very", "via", "was", "we",
    "were", "what", "whatever", "when", "whence", "whenever", "where", "whereas", "wherever",
    "whether", "which", "while", "whither", "who", "whoever", "whole", "whom", "whose", "why",
    "will", "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves", "n't", "'s", "'m", "'re", "'ve", "'ll", "'d",
];

/// Lowercases, segments, lemmatizes and filters text into a space-joined
/// sequence of base forms.
///
/// Built once and shared read-only by every query; output depends only on the
/// input text.
pub struct TextNormalizer {
    tokenizer: Tokenizer,
    lemmatizer: Lemmatizer,
    stop_words: HashSet<String>,
}

impl TextNormalizer {
    /// Normalizer with the built-in stopword list and irregular-form table.
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            lemmatizer: Lemmatizer::new(),
            stop_words: STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Normalizer extended with the resources named in `config`.
    pub fn from_config(config: &NormalizerConfig) -> InitResult<Self> {
        let mut normalizer = Self::new();
        normalizer.stop_words.extend(
            config
                .extra_stopwords
                .iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        if let Some(path) = &config.lemma_overrides {
            let added = normalizer.lemmatizer.load_exceptions(path)?;
            log::info!(
                "loaded {added} lemma overrides from {}",
                path.display()
            );
        }
        Ok(normalizer)
    }

    /// Surviving base forms of `text`, in input order.
    pub fn normalize_tokens(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.tokenizer
            .tokenize(&lowered)
            .into_iter()
            .filter(Token::is_lexical)
            .filter(|token| !self.is_stop_word(&token.text))
            .map(|token| self.lemmatizer.lemma(&token.text))
            .filter(|lemma| lemma.chars().count() > 1)
            .filter(|lemma| !self.is_stop_word(lemma))
            .collect()
    }

    /// Space-joined base forms of `text`. Empty when nothing survives.
    pub fn normalize(&self, text: &str) -> String {
        self.normalize_tokens(text).join(" ")
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
