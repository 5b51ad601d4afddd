use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::import::ImportConfig;
use self::log::LogConfig;
use self::segmenter::SegmenterConfig;
use self::translator::TranslatorConfig;

pub mod dictionary;
pub mod import;
pub mod log;
pub mod segmenter;
pub mod translator;

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub segmenter: SegmenterConfig,
    pub translator: TranslatorConfig,
    pub import: ImportConfig,
    pub log: LogConfig,
}

impl Config {
    /// Defaults with `DUSHU_*` environment overrides applied
    pub fn new() -> Self {
        Config {
            dictionary: DictionaryConfig::new(),
            segmenter: SegmenterConfig::new(),
            translator: TranslatorConfig::new(),
            import: ImportConfig::new(),
            log: LogConfig::new(),
        }
    }
}
