//! Reduction of tokens to a base form.
//!
//! Irregular forms are first mapped through a lookup table, then every word is
//! passed through the Snowball English stemmer so that inflected and base
//! forms converge (`running` → `run`, `faqs` → `faq`, `forgot` → `forget`).

use std::collections::HashMap;
use std::path::Path;

use rust_stemmers::{Algorithm, Stemmer};

use crate::types::{InitResult, InitializationError};

/// Irregular inflections the stemmer cannot reach on its own.
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("went", "go"),
    ("gone", "go"),
    ("ran", "run"),
    ("began", "begin"),
    ("begun", "begin"),
    ("bought", "buy"),
    ("brought", "bring"),
    ("broke", "break"),
    ("broken", "break"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("came", "come"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("fell", "fall"),
    ("fallen", "fall"),
    ("felt", "feel"),
    ("found", "find"),
    ("forgot", "forget"),
    ("forgotten", "forget"),
    ("gave", "give"),
    ("given", "give"),
    ("got", "get"),
    ("gotten", "get"),
    ("held", "hold"),
    ("kept", "keep"),
    ("knew", "know"),
    ("known", "know"),
    ("left", "leave"),
    ("lost", "lose"),
    ("made", "make"),
    ("meant", "mean"),
    ("met", "meet"),
    ("paid", "pay"),
    ("read", "read"),
    ("said", "say"),
    ("sent", "send"),
    ("saw", "see"),
    ("seen", "see"),
    ("sold", "sell"),
    ("spent", "spend"),
    ("stole", "steal"),
    ("stolen", "steal"),
    ("took", "take"),
    ("taken", "take"),
    ("taught", "teach"),
    ("thought", "think"),
    ("told", "tell"),
    ("understood", "understand"),
    ("wrote", "write"),
    ("written", "write"),
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("people", "person"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
];

/// Upper bound on lookup/stem rounds; user overrides may form cycles.
const MAX_LEMMA_ROUNDS: usize = 8;

/// Maps surface tokens to base forms.
pub struct Lemmatizer {
    stemmer: Stemmer,
    exceptions: HashMap<String, String>,
}

impl Lemmatizer {
    /// Lemmatizer with the built-in irregular-form table.
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
            exceptions: IRREGULAR_FORMS
                .iter()
                .map(|(form, lemma)| (form.to_string(), lemma.to_string()))
                .collect(),
        }
    }

    /// Add (or replace) an irregular mapping.
    pub fn add_exception(&mut self, form: &str, lemma: &str) {
        self.exceptions
            .insert(form.to_lowercase(), lemma.to_lowercase());
    }

    /// Extend the irregular table from a `form<TAB>lemma` file.
    ///
    /// Blank lines and lines starting with `#` are ignored. Any other line that
    /// does not have exactly two non-empty fields makes the resource unusable.
    pub fn load_exceptions(&mut self, path: &Path) -> InitResult<usize> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            InitializationError::NormalizerResource(format!(
                "cannot read lemma overrides {}: {e}",
                path.display()
            ))
        })?;
        self.parse_exceptions(&contents).map_err(|line| {
            InitializationError::NormalizerResource(format!(
                "malformed lemma override at {}:{line}",
                path.display()
            ))
        })
    }

    /// Returns the number of mappings added, or the 1-based bad line number.
    fn parse_exceptions(&mut self, contents: &str) -> Result<usize, usize> {
        let mut added = 0;
        for (n, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t').map(str::trim);
            match (fields.next(), fields.next(), fields.next()) {
                (Some(form), Some(lemma), None) if !form.is_empty() && !lemma.is_empty() => {
                    self.add_exception(form, lemma);
                    added += 1;
                }
                _ => return Err(n + 1),
            }
        }
        Ok(added)
    }

    /// Base form of a single lowercase token.
    ///
    /// Table lookup and stemming repeat until the form stops changing, so the
    /// result is its own lemma.
    pub fn lemma(&self, token: &str) -> String {
        if token.chars().any(|c| c.is_ascii_digit()) {
            return token.to_string();
        }
        let mut current = token.to_string();
        for _ in 0..MAX_LEMMA_ROUNDS {
            let next = self.reduce_once(&current);
            if next == current {
                return current;
            }
            current = next;
        }
        log::debug!("lemma of {token:?} did not settle, using {current:?}");
        current
    }

    fn reduce_once(&self, form: &str) -> String {
        let base = self
            .exceptions
            .get(form)
            .map(String::as_str)
            .unwrap_or(form);
        self.stemmer.stem(base).into_owned()
    }

    /// Number of irregular mappings known.
    pub fn exception_count(&self) -> usize {
        self.exceptions.len()
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}
