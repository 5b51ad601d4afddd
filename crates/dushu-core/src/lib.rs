pub mod dictionary;
pub mod language;
