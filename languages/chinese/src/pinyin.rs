//! Numbered pinyin (`ni3 hao3`) to tone-marked pinyin (`nǐ hǎo`).
//!
//! The mark goes on the first vowel found in the priority order
//! a > e > o > i > u > ü, replacing only its first occurrence. This matches
//! the usual rule for most syllables but not for `iu` (`liu2` becomes
//! `líu`, not `liú`).

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static SYLLABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^([a-zü]+)([1-5])$").expect("valid syllable pattern"));

/// Marked forms for tones 1-4, in vowel priority order
const TONE_MARKS: [(char, [char; 4]); 6] = [
    ('a', ['ā', 'á', 'ǎ', 'à']),
    ('e', ['ē', 'é', 'ě', 'è']),
    ('o', ['ō', 'ó', 'ǒ', 'ò']),
    ('i', ['ī', 'í', 'ǐ', 'ì']),
    ('u', ['ū', 'ú', 'ǔ', 'ù']),
    ('ü', ['ǖ', 'ǘ', 'ǚ', 'ǜ']),
];

const NEUTRAL_TONE: usize = 5;

/// Convert every space-separated syllable, keeping the spacing as is.
pub fn convert(pronunciation: &str) -> String {
    pronunciation
        .split(' ')
        .map(convert_syllable)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert one syllable. Anything that is not letters followed by a single
/// tone digit comes back untouched.
pub fn convert_syllable(syllable: &str) -> Cow<'_, str> {
    let Some(caps) = SYLLABLE.captures(syllable) else {
        return Cow::Borrowed(syllable);
    };
    let (Some(letters), Some(digit)) = (caps.get(1), caps.get(2)) else {
        return Cow::Borrowed(syllable);
    };
    let letters = letters.as_str();
    let tone = usize::from(digit.as_str().as_bytes()[0] - b'0');

    if tone == NEUTRAL_TONE {
        return Cow::Borrowed(letters);
    }

    for (vowel, marks) in TONE_MARKS {
        if letters.contains(vowel) {
            let mut buf = [0u8; 4];
            let marked = marks[tone - 1].encode_utf8(&mut buf);
            return Cow::Owned(letters.replacen(vowel, marked, 1));
        }
    }

    Cow::Borrowed(letters)
}
