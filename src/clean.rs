/// ASCII punctuation plus the inverted exclamation and question marks.
pub const PUNCTUATION: [char; 34] = [
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', ':', ';', '<', '=',
    '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~', '¡', '¿',
];

pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

/// Lowercases `sentence` and deletes every [`PUNCTUATION`] character.
///
/// Nothing is inserted where punctuation was removed, so `"end.Start"` becomes
/// `"endstart"`.
pub fn clean(sentence: &str) -> String {
    sentence
        .to_lowercase()
        .chars()
        .filter(|&c| !is_punctuation(c))
        .collect()
}
