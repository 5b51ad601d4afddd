use std::io::Write;
use std::path::Path;

use crate::commands::{build_document, write_document};
use crate::input::read_input;
use crate::state::AppState;

pub async fn handle_render<W: Write>(
    state: &AppState,
    file: Option<&Path>,
    json: bool,
    translate: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let text = read_input(file)?;
    tracing::debug!("Rendering {} chars", text.chars().count());

    let document = build_document(state, &text, translate).await;
    write_document(&document, json, out)
}
