//! Inverse document frequency over a scope of documents or sentences.
//!
//! A scope is any insertion-ordered mapping from an entry key to its
//! [`TokenSequence`]. The IDF of a term is `ln(N / df)` where `N` is the
//! number of entries in the scope and `df` the number of entries containing
//! the term at least once. Values are only meaningful inside the scope they
//! were computed from, so the document-level and sentence-level tables are
//! always separate [`IdfTable`] values.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;

use crate::{
    error::{Error, Result},
    normalizer::TokenSequence,
};

/// Entry key (file name or sentence text) to its normalized tokens.
pub type Scope = IndexMap<String, TokenSequence>;

/// What to do when a query term has no IDF value in the scope being scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TermPolicy {
    /// The term contributes zero everywhere.
    #[default]
    Ignore,
    /// Fail with [`Error::UnknownTerm`].
    Reject,
}

/// IDF value of every term that occurs in a scope.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdfTable {
    entries: usize,
    weights: HashMap<String, f64>,
}

impl IdfTable {
    /// Compute IDF values for every term in `scope`.
    ///
    /// Document frequencies are counted in a single pass over the scope.
    /// An empty scope yields an empty table.
    ///
    /// # Examples
    ///
    /// ```
    /// use docqa::idf::{IdfTable, Scope};
    ///
    /// let mut scope = Scope::new();
    /// scope.insert("d1".into(), vec!["a".into(), "b".into()]);
    /// scope.insert("d2".into(), vec!["a".into()]);
    ///
    /// let idf = IdfTable::compute(&scope);
    /// assert_eq!(idf.get("a"), Some(0.0));
    /// assert_eq!(idf.get("b"), Some(2f64.ln()));
    /// assert_eq!(idf.get("c"), None);
    /// ```
    pub fn compute(scope: &Scope) -> Self {
        let mut document_frequency: HashMap<&str, usize> = HashMap::new();
        for tokens in scope.values() {
            let distinct: HashSet<&str> =
                tokens.iter().map(String::as_str).collect();
            for term in distinct {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let entries = scope.len();
        let weights = document_frequency
            .into_iter()
            .map(|(term, df)| {
                (term.to_string(), (entries as f64 / df as f64).ln())
            })
            .collect();

        Self { entries, weights }
    }

    pub fn get(&self, term: &str) -> Option<f64> {
        self.weights.get(term).copied()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.weights.contains_key(term)
    }

    /// Look up a term, applying `policy` when the scope never saw it.
    pub fn weight(&self, term: &str, policy: TermPolicy) -> Result<f64> {
        match (self.get(term), policy) {
            (Some(idf), _) => Ok(idf),
            (None, TermPolicy::Ignore) => Ok(0.0),
            (None, TermPolicy::Reject) => Err(Error::UnknownTerm {
                term: term.to_string(),
            }),
        }
    }

    /// Number of entries in the scope the table was computed over.
    pub fn scope_size(&self) -> usize {
        self.entries
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.weights.iter().map(|(term, idf)| (term.as_str(), *idf))
    }
}
