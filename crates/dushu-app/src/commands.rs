use std::io::Write;

use crate::cli::Command;
use crate::render::{RenderedDocument, format_document, render_text};
use crate::state::AppState;

pub mod convert_pinyin;
pub mod format_senses;
pub mod import_page;
pub mod lookup_word;
pub mod render_input;
pub mod translate_text;

use convert_pinyin::handle_pinyin;
use format_senses::handle_senses;
use import_page::handle_import;
use lookup_word::handle_lookup;
use render_input::handle_render;
use translate_text::handle_translate;

/// Dispatch one CLI command, writing its output to `out`
pub async fn handle_command<W: Write>(
    state: &AppState,
    command: Command,
    out: &mut W,
) -> anyhow::Result<()> {
    tracing::debug!("Handling command: {:?}", command);
    match command {
        Command::Render {
            file,
            json,
            translate,
        } => handle_render(state, file.as_deref(), json, translate, out).await?,
        Command::Lookup { word } => handle_lookup(state, &word, out)?,
        Command::Pinyin { syllables } => handle_pinyin(&syllables, out)?,
        Command::Senses { definition } => handle_senses(&definition, out)?,
        Command::Translate { file } => handle_translate(state, file.as_deref(), out).await?,
        Command::Import {
            url,
            json,
            translate,
        } => handle_import(state, &url, json, translate, out).await?,
    }

    Ok(())
}

/// Render `text` and, when asked and available, translate it
pub async fn build_document(state: &AppState, text: &str, translate: bool) -> RenderedDocument {
    let lines = render_text(text, &state.processor);
    tracing::debug!("Rendered {} lines", lines.len());

    let translations = if translate {
        match &state.translator {
            Some(translator) => Some(
                dushu_translator::translate_sentences(
                    &**translator,
                    text,
                    &state.config.translator.from_lang,
                    &state.config.translator.to_lang,
                )
                .await,
            ),
            None => {
                tracing::warn!("Translation requested but no translator is configured");
                None
            }
        }
    } else {
        None
    };

    RenderedDocument {
        lines,
        translations,
    }
}

pub fn write_document<W: Write>(
    document: &RenderedDocument,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, document)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", format_document(document))?;
    }

    Ok(())
}
