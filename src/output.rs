//! Result emission.
//!
//! Results go to two places: a human-readable listing on stdout and a JSON
//! array persisted to disk. Both take the already ranked candidates and
//! never reorder them.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::rank::ScoredDomain;

/// Write one `<name> (score=<score>)` line per candidate.
pub fn write_display<W: Write>(mut out: W, results: &[ScoredDomain]) -> Result<()> {
    for candidate in results {
        writeln!(out, "{} (score={})", candidate.name, candidate.score)?;
    }
    Ok(())
}

/// Serialize the candidates as a pretty-printed JSON array of
/// `{"name", "score"}` records.
pub fn write_sink<W: Write>(out: W, results: &[ScoredDomain]) -> Result<()> {
    serde_json::to_writer_pretty(out, results)?;
    Ok(())
}

/// Emit results to stdout and persist them to `path`, replacing any file
/// already there.
pub fn emit(path: &Path, results: &[ScoredDomain]) -> Result<()> {
    write_display(io::stdout().lock(), results)?;

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_sink(&mut writer, results)?;
    writer.flush()?;
    info!("persisted {} candidates to {}", results.len(), path.display());
    Ok(())
}
