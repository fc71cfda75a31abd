use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use crate::tokenizer::{TokenizerOptions, text_to_word_sequence};

/// Counters kept for every token seen while fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenStats {
    /// Occurrences across all fitted sentences.
    pub count: u64,
    /// Number of fitted sentences containing the token.
    pub docs: u64,
    first_seen: usize,
}

/// Bidirectional mapping between word tokens and ids, ranked by frequency.
///
/// Ids start at 1; 0 is never assigned and is left free for padding. The most
/// frequent token gets the lowest id and ties go to whichever token was seen
/// first. When [`TokenizerOptions::oov_token`] is set it always holds id 1.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    options: TokenizerOptions,
    stats: HashMap<String, TokenStats>,
    word_index: HashMap<String, u32>,
    // index_word[id - 1]
    index_word: Vec<String>,
    document_count: u64,
}

impl Vocabulary {
    pub fn new(options: TokenizerOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Adds `sentences` to the token counts and re-ranks the whole vocabulary.
    ///
    /// Counts accumulate across calls, so ids assigned by an earlier fit may
    /// change.
    pub fn fit<S: AsRef<str>>(&mut self, sentences: &[S]) {
        for sentence in sentences {
            self.document_count += 1;
            let words = text_to_word_sequence(sentence.as_ref(), &self.options);
            let mut seen_in_doc = HashSet::new();
            for word in words {
                let next_first_seen = self.stats.len();
                let stats = self.stats.entry(word.clone()).or_insert(TokenStats {
                    count: 0,
                    docs: 0,
                    first_seen: next_first_seen,
                });
                stats.count += 1;
                if seen_in_doc.insert(word) {
                    stats.docs += 1;
                }
            }
        }
        self.rebuild_index();
        tracing::debug!(
            vocab_size = self.len(),
            documents = self.document_count,
            "Fitted vocabulary"
        );
    }

    fn rebuild_index(&mut self) {
        let oov = self.options.oov_token.as_deref();
        let mut ranked = self
            .stats
            .iter()
            .filter(|(word, _)| Some(word.as_str()) != oov)
            .collect::<Vec<_>>();
        ranked.sort_by_key(|(_, stats)| (Reverse(stats.count), stats.first_seen));

        self.index_word = oov
            .into_iter()
            .map(str::to_string)
            .chain(ranked.into_iter().map(|(word, _)| word.clone()))
            .collect();
        self.word_index = self
            .index_word
            .iter()
            .zip(1u32..)
            .map(|(word, id)| (word.clone(), id))
            .collect();
    }

    fn in_range(&self, id: u32) -> bool {
        self.options.num_words.is_none_or(|limit| id < limit)
    }

    fn oov_id(&self) -> Option<u32> {
        self.options
            .oov_token
            .as_ref()
            .and_then(|token| self.word_index.get(token).copied())
    }

    /// Encodes one sentence. Unknown words, and words whose id falls outside
    /// `num_words`, map to the OOV id if there is one and are dropped
    /// otherwise.
    pub fn encode(&self, sentence: &str) -> Vec<u32> {
        let oov_id = self.oov_id();
        text_to_word_sequence(sentence, &self.options)
            .iter()
            .filter_map(|word| match self.word_index.get(word) {
                Some(&id) if self.in_range(id) => Some(id),
                _ => oov_id,
            })
            .collect()
    }

    pub fn encode_all<S: AsRef<str>>(&self, sentences: &[S]) -> Vec<Vec<u32>> {
        sentences
            .iter()
            .map(|sentence| self.encode(sentence.as_ref()))
            .collect()
    }

    /// Maps ids back to tokens joined by the split character.
    pub fn decode(&self, ids: &[u32]) -> String {
        let oov = self.options.oov_token.as_deref();
        let words = ids
            .iter()
            .filter_map(|&id| match self.token(id) {
                Some(word) if self.in_range(id) => Some(word),
                _ => oov,
            })
            .collect::<Vec<_>>();
        words.join(&self.options.split.to_string())
    }

    pub fn id(&self, token: &str) -> Option<u32> {
        self.word_index.get(token).copied()
    }

    pub fn token(&self, id: u32) -> Option<&str> {
        let idx = usize::try_from(id).ok()?.checked_sub(1)?;
        self.index_word.get(idx).map(String::as_str)
    }

    pub fn word_index(&self) -> &HashMap<String, u32> {
        &self.word_index
    }

    /// Ids and tokens in ascending id order.
    pub fn index_word(&self) -> impl Iterator<Item = (u32, &str)> {
        (1u32..).zip(self.index_word.iter().map(String::as_str))
    }

    pub fn word_counts(&self) -> impl Iterator<Item = (&str, u64)> {
        self.stats
            .iter()
            .map(|(word, stats)| (word.as_str(), stats.count))
    }

    pub fn word_docs(&self) -> impl Iterator<Item = (&str, u64)> {
        self.stats
            .iter()
            .map(|(word, stats)| (word.as_str(), stats.docs))
    }

    pub fn stats(&self, token: &str) -> Option<TokenStats> {
        self.stats.get(token).copied()
    }

    pub fn document_count(&self) -> u64 {
        self.document_count
    }

    pub fn len(&self) -> usize {
        self.index_word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index_word.is_empty()
    }
}

/// Fits a fresh vocabulary with default options on `sentences` and encodes them.
pub fn fit_and_encode<S: AsRef<str>>(sentences: &[S]) -> (Vec<Vec<u32>>, Vocabulary) {
    fit_and_encode_with(sentences, TokenizerOptions::default())
}

pub fn fit_and_encode_with<S: AsRef<str>>(
    sentences: &[S],
    options: TokenizerOptions,
) -> (Vec<Vec<u32>>, Vocabulary) {
    let mut vocab = Vocabulary::new(options);
    vocab.fit(sentences);
    let sequences = vocab.encode_all(sentences);
    (sequences, vocab)
}
