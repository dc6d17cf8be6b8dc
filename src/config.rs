use crate::{
    error::{Error, Result},
    idf::TermPolicy,
};

/// Default number of documents shortlisted before sentence extraction.
pub const DEFAULT_FILE_MATCHES: usize = 1;

/// Default number of sentences returned per query.
pub const DEFAULT_SENTENCE_MATCHES: usize = 1;

/// Tunables for a [`crate::QueryEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Documents to shortlist by TF-IDF before extracting sentences.
    pub file_matches: usize,
    /// Sentences returned as the answer.
    pub sentence_matches: usize,
    /// Handling of query terms the corpus has never seen.
    pub term_policy: TermPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            file_matches: DEFAULT_FILE_MATCHES,
            sentence_matches: DEFAULT_SENTENCE_MATCHES,
            term_policy: TermPolicy::default(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.file_matches == 0 {
            return Err(Error::Config(
                "file matches must be at least 1".into(),
            ));
        }
        if self.sentence_matches == 0 {
            return Err(Error::Config(
                "sentence matches must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
