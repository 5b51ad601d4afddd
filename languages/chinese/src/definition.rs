use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::pinyin;

/// `什么 [shen2 me5]`: CJK ideographs, optional space, bracketed numbered pinyin
static CROSS_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([\x{4e00}-\x{9fff}]+)\s*\[([a-zü0-9\s]+)\]$")
        .expect("valid cross-reference pattern")
});

/// Split a `/`-separated definition into numbered senses.
///
/// Empty pieces are dropped before numbering, so numbers stay contiguous.
/// A sense that is only a `hanzi [pin1 yin1]` reference gets its pinyin
/// tone-marked.
pub fn format_definition(definition: &str) -> Vec<String> {
    definition
        .split('/')
        .map(str::trim)
        .filter(|sense| !sense.is_empty())
        .enumerate()
        .map(|(idx, sense)| format!("{}. {}", idx + 1, format_sense(sense)))
        .collect()
}

fn format_sense(sense: &str) -> Cow<'_, str> {
    match CROSS_REFERENCE.captures(sense) {
        Some(caps) => Cow::Owned(format!("{} [{}]", &caps[1], pinyin::convert(&caps[2]))),
        None => Cow::Borrowed(sense),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_senses_in_order() {
        assert_eq!(
            format_definition("to go/to leave"),
            vec!["1. to go", "2. to leave"]
        );
    }

    #[test]
    fn test_drops_blank_pieces_before_numbering() {
        assert_eq!(format_definition("/ /a"), vec!["1. a"]);
        assert_eq!(
            format_definition("(question tag)/  /really?/"),
            vec!["1. (question tag)", "2. really?"]
        );
    }

    #[test]
    fn test_empty_definition_yields_nothing() {
        assert!(format_definition("").is_empty());
        assert!(format_definition(" / // ").is_empty());
    }

    #[test]
    fn test_trims_senses() {
        assert_eq!(format_definition("  hello  / hi"), vec!["1. hello", "2. hi"]);
    }

    #[test]
    fn test_converts_cross_reference_pinyin() {
        assert_eq!(
            format_definition("variant/什么 [shen2 me5]"),
            vec!["1. variant", "2. 什么 [shén me]"]
        );
        assert_eq!(format_definition("什么[shen2 me5]"), vec!["1. 什么 [shén me]"]);
    }

    #[test]
    fn test_leaves_embedded_references_alone() {
        assert_eq!(
            format_definition("see 什么[shen2 me5]"),
            vec!["1. see 什么[shen2 me5]"]
        );
        assert_eq!(
            format_definition("variant of 個|个[ge4]"),
            vec!["1. variant of 個|个[ge4]"]
        );
    }
}
