use std::io::Write;

use crate::{engine::Answer, error::Result};

/// How answers are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// One sentence per line, best first.
    #[default]
    Plain,
    /// One JSON object per answer.
    Json,
}

pub fn write_answer<W: Write>(
    out: &mut W,
    answer: &Answer,
    format: Format,
) -> Result<()> {
    match format {
        Format::Plain => {
            for sentence in &answer.sentences {
                writeln!(out, "{}", sentence.text)?;
            }
        }
        Format::Json => {
            serde_json::to_writer(&mut *out, answer)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
