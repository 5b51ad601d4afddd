use std::time::Duration;

use dushu_config::Config;
use dushu_import::PageImporter;
use dushu_lang_chinese::{ChineseProcessor, DEFAULT_MAX_WORD_LEN, LibreTranslator};
use dushu_translator::Translator;

pub struct AppState {
    pub config: Config,
    pub processor: ChineseProcessor,
    pub translator: Option<Box<dyn Translator>>,
    pub importer: PageImporter,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        if !config.dictionary.enabled {
            tracing::warn!("Embedded dictionary disabled, only additional dictionaries are loaded");
        }
        let processor = ChineseProcessor::with_dictionaries(
            config.dictionary.enabled,
            &config.dictionary.additional_paths,
        )
        .with_max_word_len(max_word_len(&config));

        let translator = build_translator(&config)?;

        let importer = PageImporter::with_timeout(
            config.import.proxy_url.clone(),
            Duration::from_secs(config.import.timeout_seconds),
        )?;

        Ok(Self::from_parts(config, processor, translator, importer))
    }

    pub fn from_parts(
        config: Config,
        processor: ChineseProcessor,
        translator: Option<Box<dyn Translator>>,
        importer: PageImporter,
    ) -> Self {
        Self {
            config,
            processor,
            translator,
            importer,
        }
    }
}

fn max_word_len(config: &Config) -> usize {
    config.segmenter.max_word_len.unwrap_or(DEFAULT_MAX_WORD_LEN)
}

fn build_translator(config: &Config) -> anyhow::Result<Option<Box<dyn Translator>>> {
    let settings = &config.translator;
    if !settings.enabled {
        tracing::info!("Translation disabled");
        return Ok(None);
    }

    match settings.provider.as_str() {
        "libretranslate" => {
            let translator = LibreTranslator::with_timeout(
                settings.api_key.clone(),
                settings.api_url.clone(),
                Duration::from_secs(settings.timeout_seconds),
            )?;
            Ok(Some(Box::new(translator)))
        }
        other => {
            tracing::warn!("Unknown translation provider {:?}, translation disabled", other);
            Ok(None)
        }
    }
}
