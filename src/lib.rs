pub mod clean;
pub mod config;
pub mod run;
pub mod settings;
pub mod tokenizer;
pub mod vocab;

pub use clean::{PUNCTUATION, clean, is_punctuation};
pub use tokenizer::{TokenizerOptions, text_to_word_sequence};
pub use vocab::{Vocabulary, fit_and_encode, fit_and_encode_with};
