use std::io::Write;

use dushu_lang_chinese::format_definition;

pub fn handle_senses<W: Write>(definition: &str, out: &mut W) -> anyhow::Result<()> {
    for sense in format_definition(definition) {
        writeln!(out, "{}", sense)?;
    }
    Ok(())
}
