use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_provider() -> String {
    "libretranslate".to_string()
}

fn default_from_lang() -> String {
    "zh".to_string()
}

fn default_to_lang() -> String {
    "en".to_string()
}

fn default_api_url() -> String {
    "https://libretranslate.de/translate".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_from_lang")]
    pub from_lang: String,
    #[serde(default = "default_to_lang")]
    pub to_lang: String,
    /// Only sent when non-empty; public LibreTranslate mirrors accept none
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            provider: default_provider(),
            from_lang: default_from_lang(),
            to_lang: default_to_lang(),
            api_key: String::new(),
            api_url: default_api_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl TranslatorConfig {
    pub fn new() -> Self {
        Self::from_env_values(
            env::var("DUSHU_TRANSLATE_URL").ok(),
            env::var("DUSHU_TRANSLATE_API_KEY").ok(),
        )
    }

    /// An empty URL keeps the default endpoint
    fn from_env_values(api_url: Option<String>, api_key: Option<String>) -> Self {
        Self {
            api_url: api_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(default_api_url),
            api_key: api_key.unwrap_or_default(),
            ..Self::default()
        }
    }
}
