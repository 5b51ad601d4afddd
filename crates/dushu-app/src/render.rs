//! Turns input text into display lines: each dictionary word carries the
//! gloss a reader shows on hover, everything else is plain text.

use dushu_core::language::{Annotation, LanguageProcessor};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSegment {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<Annotation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedLine {
    pub text: String,
    pub segments: Vec<RenderedSegment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    pub lines: Vec<RenderedLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translations: Option<Vec<String>>,
}

/// Split on `\n` or `\r\n` and segment each line on its own.
/// Empty lines are kept so paragraph breaks survive.
pub fn render_text<P>(text: &str, processor: &P) -> Vec<RenderedLine>
where
    P: LanguageProcessor + ?Sized,
{
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(|line| render_line(line, processor))
        .collect()
}

fn render_line<P>(line: &str, processor: &P) -> RenderedLine
where
    P: LanguageProcessor + ?Sized,
{
    let segments = processor
        .segment(line)
        .into_iter()
        .map(|segment| RenderedSegment {
            text: segment.text.to_string(),
            annotation: segment
                .entry
                .map(|entry| processor.annotate(segment.text, entry)),
        })
        .collect();

    RenderedLine {
        text: line.to_string(),
        segments,
    }
}

/// `word  reading  1. sense; 2. sense`
pub fn format_gloss(annotation: &Annotation) -> String {
    format!(
        "{}  {}  {}",
        annotation.term,
        annotation.pronunciation,
        annotation.senses.join("; ")
    )
}

/// Plain-text layout: each line, then an indented gloss per matched word,
/// then the translations (if any) after a blank line.
pub fn format_document(document: &RenderedDocument) -> String {
    let mut out = String::new();

    for line in &document.lines {
        out.push_str(&line.text);
        out.push('\n');
        for annotation in line.segments.iter().filter_map(|s| s.annotation.as_ref()) {
            out.push_str("    ");
            out.push_str(&format_gloss(annotation));
            out.push('\n');
        }
    }

    if let Some(translations) = &document.translations {
        out.push('\n');
        for translation in translations {
            out.push_str(translation);
            out.push('\n');
        }
    }

    out
}
