use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "dushu", about = "Chinese reading assistant: word segmentation, pinyin and glosses")]
pub struct Cli {
    /// JSON config file (defaults plus DUSHU_* environment overrides when absent)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Extra dictionary file (.json, .u8 or .txt); repeatable
    #[arg(long = "dict", global = true)]
    pub dicts: Vec<String>,

    /// Longest word, in characters, the segmenter will try to match
    #[arg(long, global = true)]
    pub max_word_len: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Segment text and gloss every dictionary word
    Render {
        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Also translate sentence by sentence
        #[arg(long)]
        translate: bool,
    },

    /// Show every dictionary entry for a word
    Lookup {
        word: String,
    },

    /// Convert numbered pinyin (ni3 hao3) to tone marks
    Pinyin {
        #[arg(required = true)]
        syllables: Vec<String>,
    },

    /// Number the senses of a raw /-separated definition
    Senses {
        definition: String,
    },

    /// Translate text one sentence per line
    Translate {
        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Fetch a web page and render its paragraphs
    Import {
        url: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Also translate sentence by sentence
        #[arg(long)]
        translate: bool,
    },
}
