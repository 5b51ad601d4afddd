use std::path::Path;

use dushu_core::dictionary::{Dictionary, DictionaryEntry, DictionaryLoader};
use dushu_core::language::{Annotation, LanguageProcessor, Segment};

use crate::definition::format_definition;
use crate::dictionary::Cedict;
use crate::loader::CedictLoader;
use crate::pinyin;
use crate::segmenter::Segmenter;

/// Chinese language processor
pub struct ChineseProcessor {
    dictionary: Cedict,
    segmenter: Segmenter,
}

impl Default for ChineseProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl ChineseProcessor {
    /// Create a new Chinese processor with default configuration (embedded dictionary)
    pub fn new() -> Self {
        Self::with_additional_dicts(&[])
    }

    /// Create a new Chinese processor with additional dictionary paths
    pub fn with_additional_dicts(additional_paths: &[String]) -> Self {
        Self::with_dictionaries(true, additional_paths)
    }

    /// Build from the embedded sample (when `load_embedded`) plus every
    /// readable file in `paths`. Files that fail to load are skipped.
    pub fn with_dictionaries(load_embedded: bool, paths: &[String]) -> Self {
        let mut dict = if load_embedded {
            CedictLoader::load_embedded().unwrap_or_else(|e| {
                tracing::error!("Failed to load embedded dictionary: {}", e);
                tracing::warn!("Starting with empty dictionary");
                Cedict::new()
            })
        } else {
            Cedict::new()
        };

        for path in paths {
            match CedictLoader.load_from_file(Path::new(path)) {
                Ok(additional) => {
                    tracing::info!("Merging additional dictionary from: {}", path);
                    dict = CedictLoader::merge(dict, additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load dictionary from {}: {}", path, e);
                }
            }
        }

        if dict.is_empty() {
            tracing::warn!("Dictionary is empty; every character will render unmatched");
        }

        Self::from_dictionary(dict)
    }

    pub fn from_dictionary(dictionary: Cedict) -> Self {
        Self {
            dictionary,
            segmenter: Segmenter::default(),
        }
    }

    /// Replace the segmentation window (clamped to at least 1)
    pub fn with_max_word_len(mut self, max_word_len: usize) -> Self {
        self.segmenter = Segmenter::new(max_word_len);

        let longest = self.dictionary.longest_headword();
        if longest > self.segmenter.max_word_len() {
            tracing::warn!(
                "Longest headword has {} characters but the window is {}; longer words will never match",
                longest,
                self.segmenter.max_word_len()
            );
        }

        self
    }

    pub fn dictionary(&self) -> &Cedict {
        &self.dictionary
    }

    pub fn segmenter(&self) -> Segmenter {
        self.segmenter
    }
}

impl LanguageProcessor for ChineseProcessor {
    fn language_code(&self) -> &str {
        "zh"
    }

    fn segment<'a>(&'a self, line: &'a str) -> Vec<Segment<'a>> {
        self.segmenter.segment(line, &self.dictionary)
    }

    fn annotate(&self, term: &str, entry: &DictionaryEntry) -> Annotation {
        Annotation {
            term: term.to_string(),
            pronunciation: pinyin::convert(&entry.pronunciation),
            senses: format_definition(&entry.definition),
        }
    }

    fn lookup(&self, term: &str) -> Vec<Annotation> {
        self.dictionary
            .lookup_exact(term)
            .unwrap_or_default()
            .iter()
            .map(|entry| self.annotate(term, entry))
            .collect()
    }
}
