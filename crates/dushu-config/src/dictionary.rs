use std::env;
use std::ffi::OsString;

use serde::{Deserialize, Serialize};

/// Dictionary sources, in precedence order: the embedded CC-CEDICT sample
/// (when `enabled`), then each additional file. Earlier sources keep their
/// entries first for a shared headword.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DictionaryConfig {
    pub enabled: bool,
    /// `.json`, `.u8` or `.txt` files
    pub additional_paths: Vec<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            additional_paths: Vec::new(),
        }
    }
}

impl DictionaryConfig {
    /// `DUSHU_DICT_PATHS` holds a platform path list (`:` on Unix, `;` on Windows)
    pub fn new() -> Self {
        Self::from_path_list(env::var_os("DUSHU_DICT_PATHS"))
    }

    fn from_path_list(list: Option<OsString>) -> Self {
        let additional_paths = list
            .map(|list| {
                env::split_paths(&list)
                    .filter(|path| !path.as_os_str().is_empty())
                    .map(|path| path.to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            additional_paths,
            ..Self::default()
        }
    }
}
