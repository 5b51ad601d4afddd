use std::io::Write;
use std::path::Path;

use anyhow::Context;

use crate::input::read_input;
use crate::state::AppState;

/// One output line per sentence; failed sentences print as empty lines
pub async fn handle_translate<W: Write>(
    state: &AppState,
    file: Option<&Path>,
    out: &mut W,
) -> anyhow::Result<()> {
    let translator = state
        .translator
        .as_deref()
        .context("translation is disabled in the config")?;

    let text = read_input(file)?;
    let settings = &state.config.translator;
    let translations =
        dushu_translator::translate_sentences(translator, &text, &settings.from_lang, &settings.to_lang)
            .await;
    tracing::info!("Translated {} sentences", translations.len());

    for translation in translations {
        writeln!(out, "{}", translation)?;
    }

    Ok(())
}
