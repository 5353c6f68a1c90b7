//! FAQ entries and the immutable catalog they live in.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{InitResult, InitializationError};

/// One question/answer pair from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: i64,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl FaqEntry {
    pub fn new(id: i64, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// On-disk shape: `{"faqs": [...]}`.
#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    faqs: Vec<FaqEntry>,
}

/// Ordered, non-empty, id-unique collection of FAQ entries.
///
/// Immutable once built. Catalog order is significant: ties between equally
/// similar entries resolve to the earlier one.
#[derive(Debug, Clone)]
pub struct FaqCatalog {
    entries: Vec<FaqEntry>,
    /// id → position in `entries`.
    positions: HashMap<i64, usize>,
}

impl FaqCatalog {
    /// Build a catalog from already-parsed entries.
    pub fn new(entries: Vec<FaqEntry>) -> InitResult<Self> {
        if entries.is_empty() {
            return Err(InitializationError::EmptyCatalog);
        }

        let mut positions = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            if positions.insert(entry.id, pos).is_some() {
                return Err(InitializationError::DuplicateId(entry.id));
            }
        }

        Ok(Self { entries, positions })
    }

    /// Parse a catalog from a JSON document with a top-level `faqs` array.
    pub fn from_json_str(json: &str) -> InitResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.faqs)
    }

    /// Parse a catalog from any reader yielding the JSON document.
    pub fn from_reader<R: Read>(reader: R) -> InitResult<Self> {
        let file: CatalogFile = serde_json::from_reader(reader)?;
        Self::new(file.faqs)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn load(path: impl AsRef<Path>) -> InitResult<Self> {
        let path = path.as_ref();
        let file =
            std::fs::File::open(path).map_err(|source| InitializationError::CatalogUnreadable {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::from_reader(std::io::BufReader::new(file))?;
        log::info!(
            "loaded {} FAQ entries from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Entries in catalog order.
    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    /// Look up an entry by its id.
    pub fn get(&self, id: i64) -> Option<&FaqEntry> {
        self.positions.get(&id).map(|&pos| &self.entries[pos])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed catalog; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FaqEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a FaqCatalog {
    type Item = &'a FaqEntry;
    type IntoIter = std::slice::Iter<'a, FaqEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
