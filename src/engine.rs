//! Question answering pipeline.
//!
//! 1. Normalize every document once and compute corpus-wide IDF
//! 2. Shortlist documents by TF-IDF against the query
//! 3. Split the shortlisted documents into candidate sentences
//! 4. Compute IDF over those sentences only
//! 5. Rank sentences and return the best ones

use std::collections::HashMap;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    config::EngineConfig,
    corpus::Corpus,
    error::Result,
    idf::{IdfTable, Scope, TermPolicy},
    normalizer::Normalizer,
    ranking,
    sentences::{RuleSentenceSplitter, SentenceSplitter},
    tokenizer::{DefaultWordTokenizer, WordTokenizer},
};

/// A shortlisted document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedDocument {
    pub rank: usize,
    pub id: String,
    pub score: f64,
}

/// An answer sentence and the document it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedSentence {
    pub rank: usize,
    pub text: String,
    pub document: String,
    pub idf: f64,
    pub density: f64,
}

/// The result of one query, best match first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Answer {
    /// Normalized, deduplicated query terms.
    pub query: Vec<String>,
    pub documents: Vec<RankedDocument>,
    pub sentences: Vec<RankedSentence>,
}

impl Answer {
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Sentences extracted from shortlisted documents, with their tokens.
#[derive(Debug, Clone, Default)]
pub struct CandidateSentences {
    /// Sentence text to its tokens, in extraction order.
    pub tokens: Scope,
    /// Sentence text to the first document it was found in.
    pub sources: HashMap<String, String>,
}

/// Answers queries against a fixed corpus.
///
/// The corpus, its token map and the document-level IDF table are built
/// once by the constructor and shared by every query.
pub struct QueryEngine<T = DefaultWordTokenizer, S = RuleSentenceSplitter> {
    corpus: Corpus,
    documents: Scope,
    idf: IdfTable,
    normalizer: Normalizer<T>,
    splitter: S,
    config: EngineConfig,
}

impl QueryEngine {
    /// Build an engine with the default normalizer and sentence splitter.
    pub fn new(corpus: Corpus, config: EngineConfig) -> Result<Self> {
        Self::with_components(
            corpus,
            Normalizer::default(),
            RuleSentenceSplitter::default(),
            config,
        )
    }
}

impl<T: WordTokenizer, S: SentenceSplitter> QueryEngine<T, S> {
    pub fn with_components(
        corpus: Corpus,
        normalizer: Normalizer<T>,
        splitter: S,
        config: EngineConfig,
    ) -> Result<Self> {
        config.validate()?;

        let texts: Vec<(&str, &str)> = corpus.iter().collect();
        let documents: Scope = texts
            .par_iter()
            .map(|(id, text)| (id.to_string(), normalizer.normalize(text)))
            .collect::<Vec<_>>()
            .into_iter()
            .collect();
        let idf = IdfTable::compute(&documents);

        info!(
            documents = documents.len(),
            tokens = documents.values().map(Vec::len).sum::<usize>(),
            vocabulary = idf.len(),
            "indexed corpus"
        );

        Ok(Self {
            corpus,
            documents,
            idf,
            normalizer,
            splitter,
            config,
        })
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// IDF table over whole documents.
    pub fn document_idf(&self) -> &IdfTable {
        &self.idf
    }

    /// Answer a query with the best sentences from the best documents.
    ///
    /// A query with no searchable terms (only stopwords or punctuation)
    /// yields an empty answer.
    pub fn answer(&self, query: &str) -> Result<Answer> {
        let terms = self.normalizer.query_terms(query);
        if terms.is_empty() {
            warn!(query, "query has no searchable terms");
            return Ok(Answer::default());
        }

        let shortlist = ranking::rank_documents(
            &terms,
            &self.documents,
            &self.idf,
            self.config.file_matches,
            self.config.term_policy,
        )?;
        for doc in &shortlist {
            debug!(document = doc.id, score = doc.score, "shortlisted");
        }

        let candidates =
            self.candidate_sentences(shortlist.iter().map(|doc| doc.id));
        let sentence_idf = IdfTable::compute(&candidates.tokens);
        debug!(
            sentences = candidates.tokens.len(),
            vocabulary = sentence_idf.len(),
            "extracted candidate sentences"
        );

        // The sentence scope is a subset of the shortlisted documents, so a
        // term missing from it simply matches nothing.
        let ranked = ranking::rank_sentences(
            &terms,
            &candidates.tokens,
            &sentence_idf,
            self.config.sentence_matches,
            TermPolicy::Ignore,
        )?;

        let sentences = ranked
            .into_iter()
            .enumerate()
            .map(|(i, s)| RankedSentence {
                rank: i + 1,
                text: s.text.to_string(),
                document: candidates
                    .sources
                    .get(s.text)
                    .cloned()
                    .unwrap_or_default(),
                idf: s.matching_word_measure,
                density: s.query_term_density,
            })
            .collect();

        let documents = shortlist
            .into_iter()
            .enumerate()
            .map(|(i, doc)| RankedDocument {
                rank: i + 1,
                id: doc.id.to_string(),
                score: doc.score,
            })
            .collect();

        Ok(Answer {
            query: terms.into_iter().collect(),
            documents,
            sentences,
        })
    }

    /// Split documents into sentences, line by line, and normalize them.
    ///
    /// Sentences without any token after normalization are dropped. A
    /// sentence text seen twice keeps its first position and source.
    pub fn candidate_sentences<'a, I>(&self, ids: I) -> CandidateSentences
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut candidates = CandidateSentences::default();
        for id in ids {
            let Some(text) = self.corpus.get(id) else {
                continue;
            };
            for passage in text.split('\n') {
                for sentence in self.splitter.split(passage) {
                    let tokens = self.normalizer.normalize(sentence);
                    if tokens.is_empty() {
                        continue;
                    }
                    candidates
                        .sources
                        .entry(sentence.to_string())
                        .or_insert_with(|| id.to_string());
                    candidates.tokens.insert(sentence.to_string(), tokens);
                }
            }
        }
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, stopwords::Stopwords};

    fn engine(documents: &[(&str, &str)]) -> QueryEngine {
        engine_with(documents, EngineConfig::default())
    }

    fn engine_with(
        documents: &[(&str, &str)],
        config: EngineConfig,
    ) -> QueryEngine {
        QueryEngine::new(
            Corpus::from_documents(documents.iter().copied()),
            config,
        )
        .unwrap()
    }

    fn sentence_texts(answer: &Answer) -> Vec<&str> {
        answer.sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn answers_from_the_best_document() {
        let engine = engine(&[
            ("a.txt", "The cat sat on the mat."),
            ("b.txt", "Dogs bark loudly at night."),
        ]);
        let answer = engine.answer("cat mat").unwrap();

        assert_eq!(answer.query, ["cat", "mat"]);
        assert_eq!(answer.documents.len(), 1);
        assert_eq!(answer.documents[0].id, "a.txt");
        assert_eq!(answer.documents[0].rank, 1);
        assert_eq!(sentence_texts(&answer), ["The cat sat on the mat."]);
        assert_eq!(answer.sentences[0].document, "a.txt");
    }

    #[test]
    fn picks_the_best_sentence_within_a_document() {
        let engine = engine(&[
            (
                "animals.txt",
                "Cats are small mammals. Owls hunt at night.\n\
                 The night sky is dark. Owls have excellent night vision.",
            ),
            ("cooking.txt", "Bread needs flour and water."),
        ]);
        let answer = engine.answer("Do owls see at night?").unwrap();

        assert_eq!(answer.documents[0].id, "animals.txt");
        assert_eq!(
            sentence_texts(&answer),
            ["Owls hunt at night."]
        );
    }

    #[test]
    fn repeated_runs_are_identical() {
        let engine = engine(&[
            ("a.txt", "The cat sat on the mat. A cat naps."),
            ("b.txt", "Dogs bark loudly at night."),
        ]);
        let first = engine.answer("cat").unwrap();
        let second = engine.answer("cat").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn match_counts_larger_than_available_return_everything() {
        let engine = engine_with(
            &[
                ("a.txt", "The cat sat. The cat ran."),
                ("b.txt", "Dogs bark."),
            ],
            EngineConfig {
                file_matches: 10,
                sentence_matches: 10,
                ..EngineConfig::default()
            },
        );
        let answer = engine.answer("cat").unwrap();
        assert_eq!(answer.documents.len(), 2);
        assert_eq!(answer.sentences.len(), 3);
        assert_eq!(answer.sentences[2].text, "Dogs bark.");
        assert_eq!(answer.sentences[2].document, "b.txt");
    }

    #[test]
    fn stopword_only_query_yields_empty_answer() {
        let engine = engine(&[("a.txt", "The cat sat on the mat.")]);
        let answer = engine.answer("the, of?").unwrap();
        assert!(answer.is_empty());
        assert!(answer.documents.is_empty());
    }

    #[test]
    fn empty_corpus_yields_empty_answer() {
        let engine = engine(&[]);
        let answer = engine.answer("cat").unwrap();
        assert!(answer.is_empty());
        assert!(answer.documents.is_empty());
        assert!(engine.document_idf().is_empty());
    }

    #[test]
    fn empty_corpus_yields_empty_answer_under_strict_policy() {
        let engine = QueryEngine::new(
            Corpus::default(),
            EngineConfig {
                term_policy: TermPolicy::Reject,
                ..EngineConfig::default()
            },
        )
        .unwrap();
        let answer = engine.answer("cat").unwrap();
        assert!(answer.is_empty());
        assert!(answer.documents.is_empty());
        assert_eq!(answer.query, ["cat"]);
    }

    #[test]
    fn unknown_terms_are_ignored_by_default() {
        let engine = engine(&[
            ("a.txt", "The cat sat on the mat."),
            ("b.txt", "Dogs bark loudly at night."),
        ]);
        let answer = engine.answer("unicorn dogs").unwrap();
        assert_eq!(answer.documents[0].id, "b.txt");
        assert_eq!(sentence_texts(&answer), ["Dogs bark loudly at night."]);
    }

    #[test]
    fn unknown_terms_are_rejected_under_strict_policy() {
        let engine = engine_with(
            &[("a.txt", "The cat sat on the mat."), ("b.txt", "Dogs bark.")],
            EngineConfig {
                term_policy: TermPolicy::Reject,
                ..EngineConfig::default()
            },
        );
        let err = engine.answer("unicorn dogs").unwrap_err();
        assert!(
            matches!(err, Error::UnknownTerm { ref term } if term == "unicorn")
        );

        // Known terms missing from the shortlisted sentences are fine.
        let answer = engine.answer("dogs cat").unwrap();
        assert!(!answer.is_empty());
    }

    #[test]
    fn candidate_sentences_drop_empty_and_duplicate_sentences() {
        let engine = engine(&[
            ("a.txt", "The cat sat.\nThe end.\nIt is so.\nThe cat sat."),
            ("b.txt", "The cat sat. Fish swim."),
        ]);
        let candidates = engine.candidate_sentences(["a.txt", "b.txt"]);

        let texts: Vec<&str> =
            candidates.tokens.keys().map(String::as_str).collect();
        assert_eq!(texts, ["The cat sat.", "The end.", "Fish swim."]);
        assert_eq!(candidates.sources["The cat sat."], "a.txt");
        assert_eq!(candidates.sources["Fish swim."], "b.txt");
        assert!(!candidates.tokens.contains_key("It is so."));
    }

    #[test]
    fn sentence_idf_is_scoped_to_candidates() {
        // "cat" is in every document, so its document-level IDF is zero,
        // but within a.txt it only occurs in one of two sentences.
        let engine = engine_with(
            &[
                ("a.txt", "The cat sat. Fish swim."),
                ("b.txt", "A cat and a fish."),
            ],
            EngineConfig {
                file_matches: 1,
                sentence_matches: 2,
                ..EngineConfig::default()
            },
        );
        assert_eq!(engine.document_idf().get("cat"), Some(0.0));

        let answer = engine.answer("cat").unwrap();
        assert_eq!(sentence_texts(&answer), ["The cat sat.", "Fish swim."]);
        assert_eq!(answer.sentences[0].idf, 2f64.ln());
        assert_eq!(answer.sentences[1].idf, 0.0);
    }

    #[test]
    fn custom_components_are_used() {
        let engine = QueryEngine::with_components(
            Corpus::from_documents([("a.txt", "The cat sat.")]),
            Normalizer::new(Stopwords::none()),
            RuleSentenceSplitter::default(),
            EngineConfig::default(),
        )
        .unwrap();
        let answer = engine.answer("the").unwrap();
        assert_eq!(answer.query, ["the"]);
        assert_eq!(sentence_texts(&answer), ["The cat sat."]);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let result = QueryEngine::new(
            Corpus::default(),
            EngineConfig {
                sentence_matches: 0,
                ..EngineConfig::default()
            },
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
