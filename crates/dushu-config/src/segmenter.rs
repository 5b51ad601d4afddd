use std::env;

use serde::{Deserialize, Serialize};

/// Unset leaves the window to the segmenter's built-in default
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SegmenterConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_word_len: Option<usize>,
}

impl SegmenterConfig {
    pub fn new() -> Self {
        Self::from_env_value(env::var("DUSHU_MAX_WORD_LEN").ok().as_deref())
    }

    /// Values that are not a whole number are ignored
    fn from_env_value(value: Option<&str>) -> Self {
        Self {
            max_word_len: value.and_then(|v| v.trim().parse().ok()),
        }
    }
}
