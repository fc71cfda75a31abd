use sentok::{PUNCTUATION, TokenizerOptions, Vocabulary, clean, fit_and_encode};

#[test]
fn clean_then_fit() {
    let raw = ["Hello, world!", "Hello there."];
    let cleaned = raw.iter().map(|s| clean(s)).collect::<Vec<_>>();
    assert_eq!(cleaned, ["hello world", "hello there"]);

    let (sequences, vocab) = fit_and_encode(&cleaned);
    assert_eq!(sequences, [vec![1, 2], vec![1, 3]]);

    let mut index = vocab.index_word().collect::<Vec<_>>();
    index.sort();
    assert_eq!(index, [(1, "hello"), (2, "world"), (3, "there")]);
}

#[test]
fn one_sequence_per_sentence() {
    let sentences = ["", "a", "b c", "!!!", "a a a"];
    let (sequences, _) = fit_and_encode(&sentences);
    assert_eq!(sequences.len(), sentences.len());
    assert!(sequences.iter().flatten().all(|&id| id > 0));
}

#[test]
fn cleaned_text_has_no_punctuation() {
    let text = PUNCTUATION.iter().collect::<String>() + "Some TEXT ¡here¿";
    let cleaned = clean(&text);
    assert_eq!(cleaned, "some text here");
    assert!(!cleaned.chars().any(|c| PUNCTUATION.contains(&c)));
}

#[test]
fn vocabulary_encodes_later_sentences() {
    let mut vocab = Vocabulary::new(TokenizerOptions::default());
    vocab.fit(&["the cat", "the dog"]);
    assert_eq!(vocab.encode("The bird and the cat."), [1, 1, 2]);
    assert_eq!(vocab.decode(&[1, 3]), "the dog");
}
