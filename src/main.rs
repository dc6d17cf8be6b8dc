use std::io::{self, BufRead, Write};

use clap::Parser;
use docqa::{
    Corpus,
    Error,
    Normalizer,
    QueryEngine,
    RuleSentenceSplitter,
    Stopwords,
    error,
    output::{self, Format},
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

pub mod cli;

use cli::Cli;

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("DOCQA_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> error::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let stopwords = match &cli.stopwords {
        Some(path) => Stopwords::load(path)?,
        None => Stopwords::english(),
    };
    let corpus = Corpus::load(&cli.corpus)?;
    let engine = QueryEngine::with_components(
        corpus,
        Normalizer::new(stopwords),
        RuleSentenceSplitter::default(),
        cli.engine_config(),
    )?;

    if let Some(query) = &cli.query {
        return print_answer(&engine, query, cli.format());
    }

    run_interactive(&engine, cli.format())
}

fn print_answer(
    engine: &QueryEngine,
    query: &str,
    format: Format,
) -> error::Result<()> {
    let answer = engine.answer(query)?;
    if answer.is_empty() {
        warn!("no results");
    }
    output::write_answer(&mut io::stdout().lock(), &answer, format)
}

fn run_interactive(engine: &QueryEngine, format: Format) -> error::Result<()> {
    let mut lines = io::stdin().lock().lines();
    loop {
        print!("Query: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            // EOF: finish the prompt line.
            println!();
            break;
        };
        let line = line?;
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if query.eq_ignore_ascii_case("exit")
            || query.eq_ignore_ascii_case("quit")
        {
            break;
        }

        match print_answer(engine, query, format) {
            Ok(()) => {}
            Err(Error::Io(e)) => return Err(Error::Io(e)),
            Err(e) => tracing::error!("{e}"),
        }
    }
    Ok(())
}
