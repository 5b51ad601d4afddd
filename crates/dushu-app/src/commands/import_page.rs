use std::io::Write;

use anyhow::Context;

use crate::commands::{build_document, write_document};
use crate::state::AppState;

pub async fn handle_import<W: Write>(
    state: &AppState,
    url: &str,
    json: bool,
    translate: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let text = state
        .importer
        .fetch_text(url)
        .await
        .with_context(|| format!("importing {}", url))?;

    let document = build_document(state, &text, translate).await;
    write_document(&document, json, out)
}
