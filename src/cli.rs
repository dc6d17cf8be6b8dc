use std::path::PathBuf;

use clap::{Parser, builder::RangedU64ValueParser};
use docqa::{EngineConfig, TermPolicy, config, output::Format};

#[derive(Debug, Parser)]
#[command(
    name = "docqa",
    about = "Answer questions from a directory of text files using TF-IDF"
)]
pub struct Cli {
    /// Directory containing the corpus (.txt files)
    pub corpus: PathBuf,

    /// Number of documents to shortlist before extracting sentences
    #[arg(
        short = 'f',
        long,
        env = "DOCQA_FILE_MATCHES",
        default_value_t = config::DEFAULT_FILE_MATCHES,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub file_matches: usize,

    /// Number of sentences to print per query
    #[arg(
        short = 's',
        long,
        env = "DOCQA_SENTENCE_MATCHES",
        default_value_t = config::DEFAULT_SENTENCE_MATCHES,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub sentence_matches: usize,

    /// Fail when a query word never occurs in the corpus
    #[arg(long)]
    pub strict: bool,

    /// Replace the built-in English stopwords with a list (one per line)
    #[arg(long, value_name = "FILE")]
    pub stopwords: Option<PathBuf>,

    /// Answer a single query and exit instead of prompting
    #[arg(long)]
    pub query: Option<String>,

    /// Output answers as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            file_matches: self.file_matches,
            sentence_matches: self.sentence_matches,
            term_policy: if self.strict {
                TermPolicy::Reject
            } else {
                TermPolicy::Ignore
            },
        }
    }

    pub fn format(&self) -> Format {
        if self.json { Format::Json } else { Format::Plain }
    }
}
