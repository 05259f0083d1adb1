//! Whitespace vocabulary and fixed-length sequence encoding.
//!
//! The vocabulary is built from the training split only and frozen for the
//! lifetime of a trained model; the same encoding routine runs at training and
//! inference time. Index 0 is always the padding token and index 1 the
//! unknown-token sentinel.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const PAD_TOKEN: &str = "<PAD>";
pub const UNK_TOKEN: &str = "<UNK>";
pub const PAD_IDX: u32 = 0;
pub const UNK_IDX: u32 = 1;

/// Fixed length of every encoded sequence.
///
/// A single crate-level constant rather than a per-call argument: if training
/// and inference encoded to different lengths the model would silently lose
/// accuracy instead of failing.
pub const MAX_SEQ_LEN: usize = 256;

/// Default cap on vocabulary size, special tokens included.
pub const DEFAULT_MAX_VOCAB: usize = 10_000;

/// Frozen token-to-index mapping.
///
/// Serialized form is `{vocab: [token, ...], word_to_idx: {token: index}}`,
/// with position in `vocab` equal to the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    vocab: Vec<String>,
    word_to_idx: HashMap<String, u32>,
}

impl Vocabulary {
    /// Builds a vocabulary from a training corpus, capped at `max_vocab`.
    ///
    /// Tokens are ranked by descending frequency; ties are broken by first
    /// occurrence in the corpus, so a capped vocabulary drops the tokens seen
    /// latest among the equally frequent. Resulting size is
    /// `min(max_vocab, distinct_tokens + 2)`.
    pub fn build<'a, I>(texts: I, max_vocab: usize) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
        let mut first_seen = 0usize;
        for text in texts {
            for token in tokens(text) {
                match counts.entry(token) {
                    Entry::Occupied(mut occupied) => occupied.get_mut().0 += 1,
                    Entry::Vacant(vacant) => {
                        vacant.insert((1, first_seen));
                        first_seen += 1;
                    }
                }
            }
        }

        let mut ranked: Vec<(String, (usize, usize))> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));

        let mut vocab = vec![PAD_TOKEN.to_owned(), UNK_TOKEN.to_owned()];
        vocab.extend(
            ranked
                .into_iter()
                .take(max_vocab.saturating_sub(2))
                .map(|(token, _)| token),
        );
        let word_to_idx = vocab
            .iter()
            .enumerate()
            .map(|(idx, token)| (token.clone(), idx as u32))
            .collect();

        Self { vocab, word_to_idx }
    }

    /// Number of entries, special tokens included.
    pub fn len(&self) -> usize {
        self.vocab.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocab.is_empty()
    }

    /// Index of `token`, if present. Does not apply the `<UNK>` fallback.
    pub fn index_of(&self, token: &str) -> Option<u32> {
        self.word_to_idx.get(token).copied()
    }

    /// Token at `index`, if in range.
    pub fn token(&self, index: u32) -> Option<&str> {
        self.vocab.get(index as usize).map(String::as_str)
    }

    /// Encodes `text` to exactly [`MAX_SEQ_LEN`] indices.
    ///
    /// Unknown tokens map to [`UNK_IDX`]; over-length input drops trailing
    /// tokens; short input is right-padded with [`PAD_IDX`]. Neither is an
    /// error.
    pub fn encode(&self, text: &str) -> Vec<u32> {
        let mut sequence: Vec<u32> = tokens(text)
            .iter()
            .take(MAX_SEQ_LEN)
            .map(|token| self.word_to_idx.get(token).copied().unwrap_or(UNK_IDX))
            .collect();
        sequence.resize(MAX_SEQ_LEN, PAD_IDX);
        sequence
    }

    /// Structural checks applied when a vocabulary is read back from disk:
    /// special tokens at their reserved indices and a mapping consistent with
    /// the ordered token list.
    pub fn is_well_formed(&self) -> bool {
        self.vocab.first().map(String::as_str) == Some(PAD_TOKEN)
            && self.vocab.get(1).map(String::as_str) == Some(UNK_TOKEN)
            && self.word_to_idx.len() == self.vocab.len()
            && self
                .vocab
                .iter()
                .enumerate()
                .all(|(idx, token)| self.word_to_idx.get(token) == Some(&(idx as u32)))
    }
}

/// Lowercases and splits on whitespace. No stemming, no punctuation stripping.
fn tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_tokens_reserved() {
        let vocab = Vocabulary::build(["hello world hello"], 100);
        assert_eq!(vocab.token(PAD_IDX), Some(PAD_TOKEN));
        assert_eq!(vocab.token(UNK_IDX), Some(UNK_TOKEN));
        assert_eq!(vocab.index_of("hello"), Some(2));
        assert!(vocab.is_well_formed());
    }

    #[test]
    fn test_size_is_min_of_cap_and_distinct() {
        let vocab = Vocabulary::build(["a b c d e"], 100);
        assert_eq!(vocab.len(), 7);

        let capped = Vocabulary::build(["a b c d e"], 4);
        assert_eq!(capped.len(), 4);
    }

    #[test]
    fn test_frequency_ranking_with_first_seen_tie_break() {
        // "b" and "c" tie on count; "b" appeared first.
        let vocab = Vocabulary::build(["a a a c b c b"], 100);
        assert_eq!(vocab.index_of("a"), Some(2));
        assert_eq!(vocab.index_of("c"), Some(3));
        assert_eq!(vocab.index_of("b"), Some(4));
    }

    #[test]
    fn test_cap_drops_latest_seen_among_ties() {
        let vocab = Vocabulary::build(["x y z"], 4);
        assert_eq!(vocab.index_of("x"), Some(2));
        assert_eq!(vocab.index_of("y"), Some(3));
        assert_eq!(vocab.index_of("z"), None);
    }

    #[test]
    fn test_encode_length_invariant() {
        let vocab = Vocabulary::build(["some training text"], 100);
        assert_eq!(vocab.encode("").len(), MAX_SEQ_LEN);
        assert_eq!(vocab.encode("some text").len(), MAX_SEQ_LEN);

        let long = "word ".repeat(MAX_SEQ_LEN * 2);
        assert_eq!(vocab.encode(&long).len(), MAX_SEQ_LEN);
    }

    #[test]
    fn test_encode_empty_is_all_padding() {
        let vocab = Vocabulary::build(["some training text"], 100);
        assert!(vocab.encode("").iter().all(|&idx| idx == PAD_IDX));
    }

    #[test]
    fn test_encode_exact_length_no_padding_no_truncation() {
        let vocab = Vocabulary::build(["tok"], 100);
        let text = "tok ".repeat(MAX_SEQ_LEN);
        let sequence = vocab.encode(&text);
        assert_eq!(sequence.len(), MAX_SEQ_LEN);
        assert!(sequence.iter().all(|&idx| idx == 2));
    }

    #[test]
    fn test_unknown_maps_to_unk() {
        let vocab = Vocabulary::build(["known words only"], 100);
        let sequence = vocab.encode("unseen");
        assert_eq!(sequence[0], UNK_IDX);
    }

    #[test]
    fn test_encode_is_idempotent() {
        let vocab = Vocabulary::build(["the quick brown fox"], 100);
        let text = "The quick RED fox jumps";
        assert_eq!(vocab.encode(text), vocab.encode(text));
    }

    #[test]
    fn test_tokenization_lowercases() {
        let vocab = Vocabulary::build(["Hello World"], 100);
        assert_eq!(vocab.index_of("hello"), Some(2));
        assert_eq!(vocab.index_of("Hello"), None);
    }

    #[test]
    fn test_serde_round_trip() {
        let vocab = Vocabulary::build(["alpha beta gamma alpha"], 100);
        let json = serde_json::to_string(&vocab).unwrap();
        let restored: Vocabulary = serde_json::from_str(&json).unwrap();
        assert_eq!(vocab, restored);
        assert!(restored.is_well_formed());
    }
}
