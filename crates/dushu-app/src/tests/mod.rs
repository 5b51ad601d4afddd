
use async_trait::async_trait;
use dushu_config::Config;
use dushu_core::dictionary::DictionaryEntry;
use dushu_import::PageImporter;
use dushu_lang_chinese::{Cedict, ChineseProcessor};
use dushu_translator::{
    AUTO_DETECT, LanguageCode, ProviderMetadata, TranslateError, Translation, Translator,
};

use crate::state::AppState;

/// Echoes each sentence in brackets; sentences containing 坏 fail, and so
/// does an unresolved `auto` source. Detection always answers `zh`.
pub struct MockTranslator;

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        if text.contains('坏') {
            return Err(TranslateError::ApiError("HTTP 500".to_string()));
        }
        if from == AUTO_DETECT {
            return Err(TranslateError::UnsupportedLanguagePair { from, to });
        }

        Ok(Translation {
            text: format!("[{}]", text.trim()),
            from,
            to,
            provider: "mock".to_string(),
        })
    }

    async fn detect_language(&self, _text: &str) -> Result<LanguageCode, TranslateError> {
        Ok("zh".to_string())
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Mock".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

pub fn test_processor() -> ChineseProcessor {
    let dict: Cedict = [
        ("你好", "ni3 hao3", "hello/hi"),
        ("你", "ni3", "you"),
        ("好", "hao3", "good/well"),
        ("好", "hao4", "to be fond of"),
        ("吗", "ma5", "(question particle)"),
        ("我", "wo3", "I/me"),
        ("很", "hen3", "very"),
    ]
    .into_iter()
    .map(|(hw, py, en)| (hw.to_string(), DictionaryEntry::new(py, en)))
    .collect();

    ChineseProcessor::from_dictionary(dict)
}

pub fn test_state(with_translator: bool) -> AppState {
    let translator: Option<Box<dyn Translator>> = if with_translator {
        Some(Box::new(MockTranslator))
    } else {
        None
    };

    AppState::from_parts(
        Config::default(),
        test_processor(),
        translator,
        // Nothing listens on the discard port
        PageImporter::new("http://127.0.0.1:9/get".to_string()),
    )
}

pub fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}
