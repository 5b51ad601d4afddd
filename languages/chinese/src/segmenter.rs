//! Greedy longest-match segmentation over a dictionary.
//!
//! Scans left to right. At each character the longest dictionary headword
//! starting there (up to `max_word_len` characters) wins; when nothing
//! matches, the single character is emitted unmatched. There is no
//! backtracking, so `中国人民` with `中国人` in the dictionary always splits
//! as `中国人|民`.

use std::iter;

use dushu_core::dictionary::Dictionary;
use dushu_core::language::Segment;

pub const DEFAULT_MAX_WORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segmenter {
    max_word_len: usize,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WORD_LEN)
    }
}

impl Segmenter {
    /// `max_word_len` is counted in characters and clamped to at least 1.
    /// Headwords longer than it are never matched.
    pub fn new(max_word_len: usize) -> Self {
        Self {
            max_word_len: max_word_len.max(1),
        }
    }

    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    pub fn segment<'a, D>(&self, line: &'a str, dict: &'a D) -> Vec<Segment<'a>>
    where
        D: Dictionary + ?Sized,
    {
        // Byte offset of every char boundary, end of line included
        let bounds: Vec<usize> = line
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(iter::once(line.len()))
            .collect();
        let char_count = bounds.len() - 1;

        let mut segments = Vec::new();
        let mut cursor = 0;

        while cursor < char_count {
            let window = self.max_word_len.min(char_count - cursor);
            let matched = (1..=window).rev().find_map(|len| {
                let text = &line[bounds[cursor]..bounds[cursor + len]];
                dict.primary(text)
                    .map(|entry| (len, Segment::matched(text, entry)))
            });

            match matched {
                Some((len, segment)) => {
                    segments.push(segment);
                    cursor += len;
                }
                None => {
                    segments.push(Segment::unmatched(&line[bounds[cursor]..bounds[cursor + 1]]));
                    cursor += 1;
                }
            }
        }

        segments
    }
}

/// Segment with the default six-character window
pub fn segment<'a, D>(line: &'a str, dict: &'a D) -> Vec<Segment<'a>>
where
    D: Dictionary + ?Sized,
{
    Segmenter::default().segment(line, dict)
}

#[cfg(test)]
mod tests {
    use dushu_core::dictionary::DictionaryEntry;
    use proptest::prelude::*;

    use super::*;
    use crate::dictionary::Cedict;

    fn dict_of(words: &[(&str, &str, &str)]) -> Cedict {
        words
            .iter()
            .map(|(word, pinyin, english)| {
                (word.to_string(), DictionaryEntry::new(*pinyin, *english))
            })
            .collect()
    }

    fn texts<'a>(segments: &[Segment<'a>]) -> Vec<&'a str> {
        segments.iter().map(|s| s.text).collect()
    }

    fn sample_dict() -> Cedict {
        dict_of(&[
            ("你", "ni3", "you"),
            ("你好", "ni3 hao3", "hello/hi"),
            ("好", "hao3", "good"),
            ("我", "wo3", "I/me"),
            ("是", "shi4", "is/are"),
            ("学生", "xue2 sheng5", "student"),
            ("中国", "Zhong1 guo2", "China"),
            ("中国人", "Zhong1 guo2 ren2", "Chinese person"),
            ("人民", "ren2 min2", "the people"),
        ])
    }

    #[test]
    fn test_longest_match_wins() {
        let dict = dict_of(&[("你好", "ni3 hao3", "hello"), ("你", "ni3", "you")]);
        let segments = segment("你好吗", &dict);

        assert_eq!(texts(&segments), vec!["你好", "吗"]);
        assert_eq!(segments[0].entry, dict.primary("你好"));
        assert!(!segments[1].is_match());
    }

    #[test]
    fn test_empty_dictionary_splits_characters() {
        let dict = Cedict::new();
        let segments = segment("abc", &dict);

        assert_eq!(texts(&segments), vec!["a", "b", "c"]);
        assert!(segments.iter().all(|s| !s.is_match()));
    }

    #[test]
    fn test_empty_line() {
        assert!(segment("", &sample_dict()).is_empty());
    }

    #[test]
    fn test_no_backtracking() {
        let dict = sample_dict();
        let segments = segment("中国人民", &dict);
        assert_eq!(texts(&segments), vec!["中国人", "民"]);
    }

    #[test]
    fn test_first_entry_is_used() {
        let mut dict = Cedict::new();
        dict.insert("了", DictionaryEntry::new("le5", "(completed action marker)"));
        dict.insert("了", DictionaryEntry::new("liao3", "to finish"));

        let segments = segment("了", &dict);
        assert_eq!(segments[0].entry.unwrap().pronunciation, "le5");
    }

    #[test]
    fn test_mixed_script_characters_fall_through() {
        let dict = sample_dict();
        let segments = segment("我是 student，你好!", &dict);
        assert_eq!(
            texts(&segments),
            vec!["我", "是", " ", "s", "t", "u", "d", "e", "n", "t", "，", "你好", "!"]
        );
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let dict = sample_dict();
        let segments = segment("𠀀你好𠀀", &dict);
        assert_eq!(texts(&segments), vec!["𠀀", "你好", "𠀀"]);
    }

    #[test]
    fn test_long_headword_needs_wider_window() {
        let dict = dict_of(&[(
            "中华人民共和国",
            "Zhong1 hua2 Ren2 min2 Gong4 he2 guo2",
            "People's Republic of China",
        )]);

        let narrow = segment("中华人民共和国", &dict);
        assert_eq!(narrow.len(), 7);
        assert!(narrow.iter().all(|s| !s.is_match()));

        let wide = Segmenter::new(7).segment("中华人民共和国", &dict);
        assert_eq!(texts(&wide), vec!["中华人民共和国"]);
    }

    #[test]
    fn test_window_is_clamped() {
        let segmenter = Segmenter::new(0);
        assert_eq!(segmenter.max_word_len(), 1);

        let dict = sample_dict();
        let segments = segmenter.segment("你好", &dict);
        assert_eq!(texts(&segments), vec!["你", "好"]);
        assert!(segments.iter().all(Segment::is_match));
    }

    #[test]
    fn test_works_through_trait_object() {
        let dict = sample_dict();
        let dyn_dict: &dyn Dictionary = &dict;
        assert_eq!(texts(&segment("你好", dyn_dict)), vec!["你好"]);
    }

    proptest! {
        #[test]
        fn segments_reassemble_line(line in any::<String>()) {
            let dict = sample_dict();
            let joined: String = segment(&line, &dict).iter().map(|s| s.text).collect();
            prop_assert_eq!(joined, line);
        }

        #[test]
        fn matched_segments_carry_primary_entry(
            line in "[你好我是学生中国人民吗 a，]{0,32}",
            window in 1usize..8,
        ) {
            let dict = sample_dict();
            for seg in Segmenter::new(window).segment(&line, &dict) {
                match seg.entry {
                    Some(entry) => {
                        prop_assert_eq!(Some(entry), dict.primary(seg.text));
                        prop_assert!(seg.text.chars().count() <= window);
                    }
                    None => {
                        prop_assert_eq!(seg.text.chars().count(), 1);
                        prop_assert!(!dict.contains(seg.text));
                    }
                }
            }
        }
    }
}
