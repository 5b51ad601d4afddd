use std::path::Path;

use serde::{Deserialize, Serialize};

/// Single pronunciation/definition record stored under a headword.
///
/// The serde aliases accept the `{ "pinyin", "english" }` shape used by the
/// JSON dumps of CC-CEDICT that browser readers ship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// Numbered-tone syllables separated by spaces, e.g. `ni3 hao3`
    #[serde(alias = "pinyin")]
    pub pronunciation: String,
    /// One or more senses joined by `/`
    #[serde(alias = "english")]
    pub definition: String,
}

impl DictionaryEntry {
    pub fn new(pronunciation: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            pronunciation: pronunciation.into(),
            definition: definition.into(),
        }
    }
}

/// Dictionary lookup operations
///
/// Implementations are immutable once built, so a single instance can be
/// shared across threads and tasks without coordination.
pub trait Dictionary: Send + Sync {
    /// Entries stored under `headword`, in source precedence.
    ///
    /// Exact string equality only. `None` when the headword is absent;
    /// a returned slice is never empty.
    fn lookup_exact(&self, headword: &str) -> Option<&[DictionaryEntry]>;

    /// First entry for `headword`
    fn primary(&self, headword: &str) -> Option<&DictionaryEntry> {
        self.lookup_exact(headword).and_then(|entries| entries.first())
    }

    fn contains(&self, headword: &str) -> bool {
        self.lookup_exact(headword).is_some()
    }

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

/// Builds dictionaries from files on disk
pub trait DictionaryLoader {
    type Output: Dictionary;

    /// Load dictionary from file path
    fn load_from_file(&self, path: &Path) -> Result<Self::Output, LoadError>;

    /// File extensions understood by `load_from_file`
    fn supported_formats(&self) -> &'static [&'static str];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DictionaryMetadata {
    pub name: String,
    pub version: String,
    pub language: String,
    /// Total entries across all headwords
    pub entry_count: usize,
    pub headword_count: usize,
    /// Longest headword, counted in characters
    pub longest_headword: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error on line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
