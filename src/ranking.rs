//! Document and sentence ranking.
//!
//! Both rankers are pure functions of a query, a scope and the IDF table
//! computed over that same scope. Sorting is stable, so entries with equal
//! scores keep the scope's iteration order.

use std::cmp::Ordering;

use crate::{
    error::Result,
    idf::{IdfTable, Scope, TermPolicy},
    normalizer::Query,
};

/// A document with its summed TF-IDF score.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentScore<'a> {
    pub id: &'a str,
    pub score: f64,
}

/// A sentence with its two ranking keys.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceScore<'a> {
    pub text: &'a str,
    /// Sum of the IDF of every query term present in the sentence.
    pub matching_word_measure: f64,
    /// Fraction of the sentence's tokens that are query terms.
    pub query_term_density: f64,
}

fn occurrences(tokens: &[String], term: &str) -> usize {
    tokens.iter().filter(|token| *token == term).count()
}

/// Resolve the IDF of every query term up front so each is looked up once.
fn query_weights<'q>(
    query: &'q Query,
    idf: &IdfTable,
    policy: TermPolicy,
) -> Result<Vec<(&'q str, f64)>> {
    query
        .iter()
        .map(|term| Ok((term.as_str(), idf.weight(term, policy)?)))
        .collect()
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Rank documents by TF-IDF and return the best `n`.
///
/// A document's score is the sum, over query terms, of the term's count in
/// the document times its IDF. Fewer than `n` documents returns them all.
/// Query terms missing from `idf` are handled according to `policy`; an
/// empty corpus ranks to nothing under either policy.
pub fn rank_documents<'a>(
    query: &Query,
    corpus: &'a Scope,
    idf: &IdfTable,
    n: usize,
    policy: TermPolicy,
) -> Result<Vec<DocumentScore<'a>>> {
    if corpus.is_empty() {
        return Ok(Vec::new());
    }
    let weights = query_weights(query, idf, policy)?;

    let mut scored: Vec<DocumentScore<'a>> = corpus
        .iter()
        .map(|(id, tokens)| {
            let score = weights.iter().fold(0.0, |acc, (term, weight)| {
                acc + occurrences(tokens, term) as f64 * weight
            });
            DocumentScore { id, score }
        })
        .collect();

    scored.sort_by(|a, b| descending(a.score, b.score));
    scored.truncate(n);
    Ok(scored)
}

/// Rank sentences by matching-word IDF, then query term density.
///
/// Sentences without tokens have no defined density and are skipped; callers
/// are expected to filter them out when building the scope.
pub fn rank_sentences<'a>(
    query: &Query,
    sentences: &'a Scope,
    idf: &IdfTable,
    n: usize,
    policy: TermPolicy,
) -> Result<Vec<SentenceScore<'a>>> {
    if sentences.is_empty() {
        return Ok(Vec::new());
    }
    let weights = query_weights(query, idf, policy)?;

    let mut scored: Vec<SentenceScore<'a>> = sentences
        .iter()
        .filter(|(_, tokens)| !tokens.is_empty())
        .map(|(text, tokens)| {
            let length = tokens.len() as f64;
            let mut matching_word_measure = 0.0;
            let mut query_term_density = 0.0;
            for (term, weight) in &weights {
                let count = occurrences(tokens, term);
                if count > 0 {
                    matching_word_measure += weight;
                    query_term_density += count as f64 / length;
                }
            }
            SentenceScore {
                text,
                matching_word_measure,
                query_term_density,
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        descending(a.matching_word_measure, b.matching_word_measure)
            .then_with(|| {
                descending(a.query_term_density, b.query_term_density)
            })
    });
    scored.truncate(n);
    Ok(scored)
}
