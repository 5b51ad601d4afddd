use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use dushu_config::Config;

use crate::cli::Cli;

/// Where the config came from. Config loads before logging is set up, so
/// `main` reports this once the subscriber exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Environment,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Environment => write!(f, "defaults and DUSHU_* environment"),
        }
    }
}

/// Load a config file, or the environment-derived defaults when none is given
pub fn load_config(path: Option<&Path>) -> anyhow::Result<(Config, ConfigSource)> {
    let Some(path) = path else {
        return Ok((Config::new(), ConfigSource::Environment));
    };

    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("parsing config {}", path.display()))?;

    Ok((config, ConfigSource::File(path.to_path_buf())))
}

/// Command-line flags take precedence over the config file
pub fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    config
        .dictionary
        .additional_paths
        .extend(cli.dicts.iter().cloned());

    if let Some(max_word_len) = cli.max_word_len {
        config.segmenter.max_word_len = Some(max_word_len);
    }
}
