use std::path::Path;

use dushu_core::dictionary::{DictionaryLoader, LoadError};

use crate::dictionary::Cedict;

pub struct CedictLoader;

impl CedictLoader {
    /// Load embedded dictionary data
    pub fn load_embedded() -> Result<Cedict, LoadError> {
        let json = include_str!("../data/cedict_sample.json");
        tracing::info!("Loading embedded CEDICT dictionary...");
        let dict = Cedict::from_json(json)?;
        tracing::info!("Loaded {} dictionary entries", dict.entry_count());
        Ok(dict)
    }

    /// Merge two dictionaries (entries of `additional` rank after `base`)
    pub fn merge(base: Cedict, additional: Cedict) -> Cedict {
        base.merge(additional)
    }
}

impl DictionaryLoader for CedictLoader {
    type Output = Cedict;

    /// `.json` files use the reader JSON shape, `.u8`/`.txt` are CC-CEDICT text
    fn load_from_file(&self, path: &Path) -> Result<Cedict, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        tracing::info!("Loading CEDICT from file: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let dict = match extension.as_str() {
            "json" => Cedict::from_json(&content)?,
            "u8" | "txt" => Cedict::from_cedict_text(&content),
            other => {
                return Err(LoadError::InvalidFormat(format!(
                    "unsupported dictionary extension {:?} ({})",
                    other,
                    path.display()
                )));
            }
        };
        tracing::info!("Loaded {} dictionary entries from file", dict.entry_count());

        Ok(dict)
    }

    fn supported_formats(&self) -> &'static [&'static str] {
        &["json", "u8", "txt"]
    }
}
