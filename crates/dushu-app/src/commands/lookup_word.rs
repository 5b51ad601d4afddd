use std::io::Write;

use dushu_core::language::LanguageProcessor;

use crate::state::AppState;

pub fn handle_lookup<W: Write>(state: &AppState, word: &str, out: &mut W) -> anyhow::Result<()> {
    let word = word.trim();
    let annotations = state.processor.lookup(word);
    tracing::debug!("Lookup '{}': {} entries", word, annotations.len());

    if annotations.is_empty() {
        writeln!(out, "No entries for {}", word)?;
        return Ok(());
    }

    for annotation in &annotations {
        writeln!(out, "{}  {}", annotation.term, annotation.pronunciation)?;
        for sense in &annotation.senses {
            writeln!(out, "    {}", sense)?;
        }
    }

    Ok(())
}
