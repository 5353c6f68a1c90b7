//! Matcher configuration, loaded from TOML.
//!
//! ```toml
//! catalog = "data/faqs.json"
//! threshold = 0.1
//!
//! [replies]
//! greeting = "Hello! How can I help you today?"
//!
//! [normalizer]
//! extra_stopwords = ["acme"]
//! lemma_overrides = "data/lemmas.tsv"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::{InitResult, InitializationError, DEFAULT_THRESHOLD};

pub const DEFAULT_CATALOG_PATH: &str = "data/faqs.json";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatcherConfig {
    /// Path of the JSON FAQ catalog.
    pub catalog: PathBuf,
    /// Minimum cosine similarity for an FAQ answer.
    pub threshold: f32,
    pub replies: Replies,
    pub normalizer: NormalizerConfig,
}

/// Fixed replies for the non-FAQ outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Replies {
    pub greeting: String,
    pub goodbye: String,
    /// Sent for empty or whitespace-only questions.
    pub empty: String,
    /// Sent when no FAQ clears the threshold.
    pub decline: String,
}

/// Extra resources for the text normalizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizerConfig {
    /// Added to the built-in stopword list.
    pub extra_stopwords: Vec<String>,
    /// `form<TAB>lemma` file extending the irregular-form table.
    pub lemma_overrides: Option<PathBuf>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from(DEFAULT_CATALOG_PATH),
            threshold: DEFAULT_THRESHOLD,
            replies: Replies::default(),
            normalizer: NormalizerConfig::default(),
        }
    }
}

impl Default for Replies {
    fn default() -> Self {
        Self {
            greeting: "Hello! How can I help you today?".to_string(),
            goodbye: "Goodbye! If you need anything else, just ask. Have a great day!"
                .to_string(),
            empty: "Please ask a question.".to_string(),
            decline: "I'm sorry, I couldn't find a relevant answer to your question. \
                      Please try rephrasing it or contact support for assistance."
                .to_string(),
        }
    }
}

impl MatcherConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> InitResult<Self> {
        let config: Self =
            toml::from_str(s).map_err(|e| InitializationError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML file. Relative paths inside it resolve against its directory.
    pub fn load(path: impl AsRef<Path>) -> InitResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            InitializationError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let mut config = Self::from_toml_str(&contents)?;
        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Reject thresholds outside `[0, 1]`.
    pub fn validate(&self) -> InitResult<()> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(InitializationError::Config(format!(
                "threshold must be within [0, 1], got {}",
                self.threshold
            )));
        }
        Ok(())
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        if self.catalog.is_relative() {
            self.catalog = base.join(&self.catalog);
        }
        if let Some(lemmas) = &self.normalizer.lemma_overrides {
            if lemmas.is_relative() {
                self.normalizer.lemma_overrides = Some(base.join(lemmas));
            }
        }
    }
}
