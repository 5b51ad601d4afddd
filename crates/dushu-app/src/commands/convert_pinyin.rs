use std::io::Write;

use dushu_lang_chinese::pinyin;

pub fn handle_pinyin<W: Write>(syllables: &[String], out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "{}", pinyin::convert(&syllables.join(" ")))?;
    Ok(())
}
