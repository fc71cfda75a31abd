use std::path::PathBuf;

use clap::ValueEnum;
use strum::Display;

use crate::tokenizer::TokenizerOptions;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

pub struct Settings {
    /// Files to read sentences from, one per line. Stdin when empty.
    pub inputs: Vec<PathBuf>,
    pub format: OutputFormat,
    pub tokenizer: TokenizerOptions,
}
