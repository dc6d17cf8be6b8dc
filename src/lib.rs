//! docqa - answer questions from a directory of text files.
//!
//! docqa ranks documents by TF-IDF against a natural-language query, then
//! ranks the sentences of the best documents by the IDF of the query words
//! they contain (computed over those sentences only), breaking ties by
//! query term density.
//!
//! # Quick start
//!
//! ```
//! use docqa::{Corpus, EngineConfig, QueryEngine};
//!
//! let corpus = Corpus::from_documents([
//!     ("a.txt", "The cat sat on the mat."),
//!     ("b.txt", "Dogs bark loudly at night."),
//! ]);
//! let engine = QueryEngine::new(corpus, EngineConfig::default()).unwrap();
//!
//! let answer = engine.answer("Where did the cat sit?").unwrap();
//! assert_eq!(answer.documents[0].id, "a.txt");
//! assert_eq!(answer.sentences[0].text, "The cat sat on the mat.");
//! ```

pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod idf;
pub mod normalizer;
pub mod output;
pub mod ranking;
pub mod sentences;
pub mod stopwords;
pub mod tokenizer;
pub mod walker;

pub use config::EngineConfig;
pub use corpus::Corpus;
pub use engine::{Answer, QueryEngine};
pub use error::{Error, Result};
pub use idf::{IdfTable, TermPolicy};
pub use normalizer::Normalizer;
pub use sentences::RuleSentenceSplitter;
pub use stopwords::Stopwords;
