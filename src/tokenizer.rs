use serde::{Deserialize, Serialize};

/// Characters replaced by the split character before splitting. Contains no
/// apostrophe, so contractions stay one token.
pub const DEFAULT_FILTERS: &str = "!\"#$%&()*+,-./:;<=>?@[\\]^_`{|}~\t\n";

/// How sentences are split into word tokens when fitting and encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerOptions {
    pub filters: String,
    pub lower: bool,
    pub split: char,
    /// Only ids below this bound are emitted when encoding.
    pub num_words: Option<u32>,
    /// Token that stands in for out-of-vocabulary words. Takes id 1 when set.
    pub oov_token: Option<String>,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            filters: DEFAULT_FILTERS.to_string(),
            lower: true,
            split: ' ',
            num_words: None,
            oov_token: None,
        }
    }
}

pub fn text_to_word_sequence(text: &str, options: &TokenizerOptions) -> Vec<String> {
    let text = if options.lower {
        text.to_lowercase()
    } else {
        text.to_string()
    };
    text.chars()
        .map(|c| {
            if options.filters.contains(c) {
                options.split
            } else {
                c
            }
        })
        .collect::<String>()
        .split(options.split)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text_to_word_sequence(text, &TokenizerOptions::default())
    }

    #[test]
    fn filters_become_separators() {
        assert_eq!(words("Hello, world!"), ["hello", "world"]);
        assert_eq!(words("end.Start"), ["end", "start"]);
        assert_eq!(words("tab\tand\nnewline"), ["tab", "and", "newline"]);
    }

    #[test]
    fn keeps_apostrophes() {
        assert_eq!(words("Don't panic"), ["don't", "panic"]);
    }

    #[test]
    fn blank_input_has_no_words() {
        assert!(words("").is_empty());
        assert!(words("   ,,, ").is_empty());
    }

    #[test]
    fn custom_split_and_case() {
        let options = TokenizerOptions {
            lower: false,
            split: '|',
            filters: String::new(),
            ..Default::default()
        };
        assert_eq!(
            text_to_word_sequence("A b|C||d", &options),
            ["A b", "C", "d"]
        );
    }
}
