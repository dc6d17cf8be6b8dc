use std::collections::BTreeSet;

use crate::{
    stopwords::Stopwords,
    tokenizer::{DefaultWordTokenizer, WordTokenizer},
};

/// Normalized word tokens of one document or sentence, in original order.
///
/// Duplicates are kept: term counts are derived from it.
pub type TokenSequence = Vec<String>;

/// Deduplicated normalized query words.
///
/// Ordered so that score sums always accumulate in the same order.
pub type Query = BTreeSet<String>;

/// Turns raw text into normalized tokens.
///
/// Every token is lowercased; stopwords and tokens made only of punctuation
/// are dropped. Order and duplicates of the remaining tokens are preserved.
///
/// # Examples
///
/// ```
/// use docqa::{Normalizer, Stopwords};
///
/// let normalizer = Normalizer::new(Stopwords::english());
/// assert_eq!(
///     normalizer.normalize("The cat sat on the mat."),
///     ["cat", "sat", "mat"]
/// );
/// assert!(normalizer.normalize("The, The.").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Normalizer<T = DefaultWordTokenizer> {
    tokenizer: T,
    stopwords: Stopwords,
}

impl Normalizer {
    pub fn new(stopwords: Stopwords) -> Self {
        Self::with_tokenizer(DefaultWordTokenizer, stopwords)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(Stopwords::english())
    }
}

impl<T: WordTokenizer> Normalizer<T> {
    pub fn with_tokenizer(tokenizer: T, stopwords: Stopwords) -> Self {
        Self {
            tokenizer,
            stopwords,
        }
    }

    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    pub fn normalize(&self, text: &str) -> TokenSequence {
        self.tokenizer
            .tokenize(text)
            .into_iter()
            .map(str::to_lowercase)
            .filter(|token| {
                !is_punctuation(token) && !self.stopwords.contains(token)
            })
            .collect()
    }

    /// Normalize query text and collapse it to a set of terms.
    pub fn query_terms(&self, text: &str) -> Query {
        self.normalize(text).into_iter().collect()
    }
}

/// True when every character is punctuation or a symbol.
///
/// Anything that is neither alphanumeric nor whitespace counts, which covers
/// ASCII punctuation as well as typographic quotes and dashes.
pub fn is_punctuation(token: &str) -> bool {
    token
        .chars()
        .all(|c| !c.is_alphanumeric() && !c.is_whitespace())
}
