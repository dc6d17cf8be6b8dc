//! Word tokenization primitive.
//!
//! Splits raw text into word-like substrings without allocating per token.
//! Normalization (lowercasing, stopword and punctuation removal) happens
//! later in [`crate::normalizer`].

/// Splits text into an ordered sequence of raw word tokens.
///
/// Implementations must be deterministic: the same input always yields the
/// same tokens in the same order.
pub trait WordTokenizer: Send + Sync {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Default tokenizer for English prose.
///
/// A word is a run of alphanumeric characters. A single apostrophe, hyphen
/// or period between two alphanumeric characters joins the run, so
/// `don't`, `e-mail` and `3.14` stay whole. Any other non-whitespace
/// character becomes a one-character token of its own.
///
/// # Examples
///
/// ```
/// use docqa::tokenizer::{DefaultWordTokenizer, WordTokenizer};
///
/// let tokens = DefaultWordTokenizer.tokenize("Don't panic, it's 3.14!");
/// assert_eq!(tokens, ["Don't", "panic", ",", "it's", "3.14", "!"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultWordTokenizer;

fn is_joiner(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}' | '-' | '.')
}

impl WordTokenizer for DefaultWordTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut tokens = Vec::new();
        let mut chars = text.char_indices().peekable();
        let mut word_start: Option<usize> = None;

        while let Some((i, c)) = chars.next() {
            if c.is_alphanumeric() {
                if word_start.is_none() {
                    word_start = Some(i);
                }
                continue;
            }

            if let Some(start) = word_start {
                let joins = is_joiner(c)
                    && chars
                        .peek()
                        .is_some_and(|&(_, next)| next.is_alphanumeric());
                if joins {
                    continue;
                }
                tokens.push(&text[start..i]);
                word_start = None;
            }

            if !c.is_whitespace() {
                tokens.push(&text[i..i + c.len_utf8()]);
            }
        }

        // Handle last word (no trailing separator)
        if let Some(start) = word_start {
            tokens.push(&text[start..]);
        }

        tokens
    }
}
