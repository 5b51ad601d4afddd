use std::collections::HashMap;
use std::sync::LazyLock;

use dushu_core::dictionary::{Dictionary, DictionaryEntry, DictionaryMetadata, LoadError};
use regex::Regex;

/// `TRAD SIMP [pin1 yin1] /sense/sense/`
static CEDICT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\S+)\s+(\S+)\s+\[([^\]]*)\]\s+/(.*)/\s*$").expect("valid CC-CEDICT line pattern")
});

/// CC-CEDICT backed Chinese-English dictionary
///
/// Headwords map to entries in source order; the first one is the primary
/// sense used by the segmenter.
#[derive(Debug, Clone, Default)]
pub struct Cedict {
    entries: HashMap<String, Vec<DictionaryEntry>>,
    entry_count: usize,
    longest_headword: usize,
}

impl Cedict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry` after any existing entries for `headword`.
    /// Empty headwords are ignored.
    pub fn insert(&mut self, headword: impl Into<String>, entry: DictionaryEntry) {
        let headword = headword.into();
        if headword.is_empty() {
            return;
        }

        self.longest_headword = self.longest_headword.max(headword.chars().count());
        self.entry_count += 1;
        self.entries.entry(headword).or_default().push(entry);
    }

    /// Load from a JSON object of `headword -> [{ pinyin, english }, ...]`
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let data: HashMap<String, Vec<DictionaryEntry>> = serde_json::from_str(json_str)?;

        let mut dict = Self::new();
        for (headword, entries) in data {
            if entries.is_empty() {
                tracing::warn!("Skipping headword {:?} with no entries", headword);
                continue;
            }
            for entry in entries {
                dict.insert(headword.clone(), entry);
            }
        }

        Ok(dict)
    }

    /// Load CC-CEDICT text (`cedict_ts.u8`).
    ///
    /// Each entry is filed under its simplified form and, when it differs,
    /// its traditional form. Comment lines are ignored and malformed lines
    /// are skipped with a warning.
    pub fn from_cedict_text(text: &str) -> Self {
        let mut dict = Self::new();
        let mut skipped = 0usize;

        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match parse_cedict_line(line) {
                Some((traditional, simplified, entry)) => {
                    if traditional != simplified {
                        dict.insert(traditional, entry.clone());
                    }
                    dict.insert(simplified, entry);
                }
                None => {
                    skipped += 1;
                    tracing::warn!("Skipping malformed CC-CEDICT line {}: {}", idx + 1, line);
                }
            }
        }

        if skipped > 0 {
            tracing::warn!("Skipped {} malformed CC-CEDICT lines", skipped);
        }

        dict
    }

    /// Get the number of entries in the dictionary
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    pub fn headword_count(&self) -> usize {
        self.entries.len()
    }

    /// Longest headword in characters
    pub fn longest_headword(&self) -> usize {
        self.longest_headword
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge another dictionary into this one.
    /// Entries from `other` go after existing entries for the same headword.
    pub fn merge(mut self, other: Cedict) -> Self {
        for (headword, entries) in other.entries {
            for entry in entries {
                self.insert(headword.clone(), entry);
            }
        }

        self
    }
}

impl FromIterator<(String, DictionaryEntry)> for Cedict {
    fn from_iter<I: IntoIterator<Item = (String, DictionaryEntry)>>(iter: I) -> Self {
        let mut dict = Self::new();
        for (headword, entry) in iter {
            dict.insert(headword, entry);
        }
        dict
    }
}

fn parse_cedict_line(line: &str) -> Option<(&str, &str, DictionaryEntry)> {
    let caps = CEDICT_LINE.captures(line)?;
    let traditional = caps.get(1)?.as_str();
    let simplified = caps.get(2)?.as_str();
    let entry = DictionaryEntry::new(caps.get(3)?.as_str().trim(), caps.get(4)?.as_str());

    Some((traditional, simplified, entry))
}

impl Dictionary for Cedict {
    fn lookup_exact(&self, headword: &str) -> Option<&[DictionaryEntry]> {
        self.entries
            .get(headword)
            .map(Vec::as_slice)
            .filter(|entries| !entries.is_empty())
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "CC-CEDICT".to_string(),
            version: "1.0".to_string(),
            language: "zh".to_string(),
            entry_count: self.entry_count,
            headword_count: self.entries.len(),
            longest_headword: self.longest_headword,
        }
    }
}
