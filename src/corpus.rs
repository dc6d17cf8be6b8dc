use std::path::Path;

use indexmap::IndexMap;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::{error::Result, walker};

/// The documents a question is answered from: document ID to raw text.
///
/// Iteration follows insertion order, which is also the tie-break order
/// used when ranking documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: IndexMap<String, String>,
}

impl Corpus {
    /// Load every `.txt` file directly inside `root`.
    ///
    /// Documents are keyed by file name and ordered by it. A missing or
    /// unreadable directory, or any unreadable file, fails the whole load
    /// with an I/O error.
    pub fn load(root: &Path) -> Result<Self> {
        let files = walker::discover_files(root)
            .inspect_err(|e| warn!(root = %root.display(), "{e}"))?;

        // Read in parallel; collect keeps the sorted discovery order.
        let documents = files
            .par_iter()
            .map(|file| -> Result<(String, String)> {
                let text = std::fs::read_to_string(&file.path)
                    .inspect_err(|e| {
                        warn!(
                            path = %file.path.display(),
                            "failed to read corpus file: {e}"
                        );
                    })?;
                Ok((file.name.clone(), text))
            })
            .collect::<Result<Vec<_>>>()?;

        if documents.is_empty() {
            warn!(root = %root.display(), "corpus contains no .txt files");
        } else {
            info!(
                root = %root.display(),
                documents = documents.len(),
                "loaded corpus"
            );
        }

        Ok(Self::from_documents(documents))
    }

    /// Build a corpus from already-loaded documents, keeping their order.
    ///
    /// A repeated ID keeps its first position and its last text.
    pub fn from_documents<I, K, V>(documents: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            documents: documents
                .into_iter()
                .map(|(id, text)| (id.into(), text.into()))
                .collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.documents.get(id).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.documents
            .iter()
            .map(|(id, text)| (id.as_str(), text.as_str()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.documents.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
