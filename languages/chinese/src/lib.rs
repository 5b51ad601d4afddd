pub mod definition;
pub mod dictionary;
pub mod loader;
pub mod pinyin;
pub mod processor;
pub mod segmenter;
pub mod translator;

pub use definition::format_definition;
pub use dictionary::Cedict;
pub use loader::CedictLoader;
pub use processor::ChineseProcessor;
pub use segmenter::{DEFAULT_MAX_WORD_LEN, Segmenter};
pub use translator::LibreTranslator;
