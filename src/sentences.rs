//! Sentence boundary detection.

use std::collections::HashSet;

/// Splits a passage of text into sentences.
pub trait SentenceSplitter: Send + Sync {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Words that usually end in a period without ending the sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc",
    "e.g", "i.e", "cf", "al", "inc", "ltd", "co", "corp", "dept", "fig",
    "approx", "gen", "gov", "capt", "col", "lt", "sgt", "rev", "jan", "feb",
    "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "u.s",
    "a.m", "p.m",
];

/// Rule-based splitter for English prose.
///
/// A sentence ends at a run of `.`, `!` or `?` (plus any closing quotes or
/// brackets right after it) that is followed by whitespace or the end of
/// the text. A lone period after a known abbreviation does not end the
/// sentence, nor does one after a capital initial that follows another
/// capitalized word.
///
/// # Examples
///
/// ```
/// use docqa::sentences::{RuleSentenceSplitter, SentenceSplitter};
///
/// let splitter = RuleSentenceSplitter::default();
/// assert_eq!(
///     splitter.split("Dr. Watson arrived. \"Is it you?\" he asked."),
///     ["Dr. Watson arrived.", "\"Is it you?\"", "he asked."]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RuleSentenceSplitter {
    abbreviations: HashSet<String>,
}

impl Default for RuleSentenceSplitter {
    fn default() -> Self {
        Self::with_abbreviations(ABBREVIATIONS.iter().copied())
    }
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '\u{201d}' | '\u{2019}')
}

/// A single capital letter other than the pronoun "I".
fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if c.is_uppercase() && c != 'I'
    )
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

impl RuleSentenceSplitter {
    pub fn with_abbreviations<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            abbreviations: abbreviations
                .into_iter()
                .map(|a| a.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// True when `before` (the text preceding a period) ends in a word that
    /// does not close a sentence.
    fn ends_with_abbreviation(&self, before: &str) -> bool {
        let mut words = before
            .split_whitespace()
            .rev()
            .map(|w| w.trim_start_matches(|c: char| !c.is_alphanumeric()));
        let word = words.next().unwrap_or_default();

        if is_initial(word) {
            // "John F. Kennedy", "J. R. R. Tolkien"; not "vitamin C."
            return words.next().is_some_and(is_capitalized);
        }

        self.abbreviations.contains(&word.to_lowercase())
    }
}

impl SentenceSplitter for RuleSentenceSplitter {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (idx, c) = chars[i];
            if !is_terminator(c) {
                i += 1;
                continue;
            }

            let mut end = i;
            while end + 1 < chars.len() && is_terminator(chars[end + 1].1) {
                end += 1;
            }
            let single_period = c == '.' && end == i;
            while end + 1 < chars.len() && is_closer(chars[end + 1].1) {
                end += 1;
            }

            let next = chars.get(end + 1);
            let at_boundary = next.is_none_or(|&(_, n)| n.is_whitespace());
            let abbreviated = single_period
                && self.ends_with_abbreviation(&text[start..idx]);

            if at_boundary && !abbreviated {
                let end_byte = next.map_or(text.len(), |&(b, _)| b);
                let sentence = text[start..end_byte].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence);
                }
                start = end_byte;
            }
            i = end + 1;
        }

        let tail = text[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail);
        }

        sentences
    }
}
