use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, bail};

/// Read the whole input file, or stdin when no file is given
pub fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            if atty::is(atty::Stream::Stdin) {
                bail!("no input: pass a file or pipe text on stdin");
            }

            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}
