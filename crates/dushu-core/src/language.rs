use serde::Serialize;

use crate::dictionary::DictionaryEntry;

/// Text analysis interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "zh", "ja", ...)
    fn language_code(&self) -> &str;

    /// Break one line of text into segments.
    ///
    /// `line` must not contain line breaks; callers split text into lines
    /// first and keep blank lines themselves.
    fn segment<'a>(&'a self, line: &'a str) -> Vec<Segment<'a>>;

    /// Build the display form of a dictionary entry
    fn annotate(&self, term: &str, entry: &DictionaryEntry) -> Annotation;

    /// Annotate every entry stored under `term`
    fn lookup(&self, term: &str) -> Vec<Annotation>;
}

/// A run of input text, either a dictionary word or one unmatched character.
///
/// `text` borrows from the input line untouched, so concatenating the
/// segments of a line reproduces it exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub entry: Option<&'a DictionaryEntry>,
}

impl<'a> Segment<'a> {
    pub fn matched(text: &'a str, entry: &'a DictionaryEntry) -> Self {
        Self {
            text,
            entry: Some(entry),
        }
    }

    pub fn unmatched(text: &'a str) -> Self {
        Self { text, entry: None }
    }

    pub fn is_match(&self) -> bool {
        self.entry.is_some()
    }
}

/// Display data for a matched word: converted reading and numbered senses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub term: String,
    pub pronunciation: String,
    pub senses: Vec<String>,
}
