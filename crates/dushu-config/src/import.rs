use std::env;

use serde::{Deserialize, Serialize};

fn default_proxy_url() -> String {
    "https://api.allorigins.win/get".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

/// Page import goes through a CORS-style proxy that wraps the page HTML in
/// a JSON `contents` field.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ImportConfig {
    #[serde(default = "default_proxy_url")]
    pub proxy_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            proxy_url: default_proxy_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl ImportConfig {
    pub fn new() -> Self {
        Self::from_env_value(env::var("DUSHU_IMPORT_PROXY").ok())
    }

    fn from_env_value(proxy_url: Option<String>) -> Self {
        let proxy_url = proxy_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(default_proxy_url);

        Self {
            proxy_url,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_value_overrides_proxy() {
        let config = ImportConfig::from_env_value(Some("http://localhost:8080/get".to_string()));
        assert_eq!(config.proxy_url, "http://localhost:8080/get");
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_unset_env_value_keeps_default_proxy() {
        assert_eq!(ImportConfig::from_env_value(None).proxy_url, default_proxy_url());
        assert_eq!(
            ImportConfig::from_env_value(Some(String::new())).proxy_url,
            default_proxy_url()
        );
    }
}
