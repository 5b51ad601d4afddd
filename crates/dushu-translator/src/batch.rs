use crate::{LanguageCode, Translator};

/// Source language that asks the translator to detect it first
pub const AUTO_DETECT: &str = "auto";

/// Full-width terminators that close a sentence; each stays attached to the
/// sentence it ends.
pub const SENTENCE_TERMINATORS: [char; 3] = ['。', '！', '？'];

/// Split text after every sentence terminator, skipping whitespace-only
/// pieces. Line breaks stay inside the sentence they occur in.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for (idx, ch) in text.char_indices() {
        if SENTENCE_TERMINATORS.contains(&ch) {
            let end = idx + ch.len_utf8();
            sentences.push(&text[start..end]);
            start = end;
        }
    }
    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences.retain(|s| !s.trim().is_empty());
    sentences
}

/// Resolve the source language for `text`.
///
/// Anything but [`AUTO_DETECT`] is returned as is. For `auto` the translator
/// detects the language of the whole text once; if that fails `auto` is
/// passed through and left to the provider.
pub async fn resolve_source_language<T>(translator: &T, text: &str, from: &str) -> LanguageCode
where
    T: Translator + ?Sized,
{
    if from != AUTO_DETECT {
        return from.to_string();
    }

    match translator.detect_language(text).await {
        Ok(language) => {
            tracing::info!("Detected source language: {}", language);
            language
        }
        Err(e) => {
            tracing::warn!("Language detection failed, sending {:?}: {}", AUTO_DETECT, e);
            AUTO_DETECT.to_string()
        }
    }
}

/// Translate `text` one sentence at a time, in order.
///
/// Returns exactly one string per sentence from [`split_sentences`]. A
/// sentence whose translation fails is logged and replaced by an empty
/// string; the rest of the batch still runs. A `from` of [`AUTO_DETECT`]
/// is resolved once before the first sentence.
pub async fn translate_sentences<T>(translator: &T, text: &str, from: &str, to: &str) -> Vec<String>
where
    T: Translator + ?Sized,
{
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return Vec::new();
    }

    let from = resolve_source_language(translator, text, from).await;
    let mut translations = Vec::with_capacity(sentences.len());

    for sentence in sentences {
        match translator
            .translate(sentence, from.clone(), to.to_string())
            .await
        {
            Ok(translation) => translations.push(translation.text),
            Err(e) => {
                tracing::error!("Translation failed for {:?}: {}", sentence, e);
                translations.push(String::new());
            }
        }
    }

    translations
}
