//! Tabular output for sweep series
//!
//! Score and significance series are rendered as tab-separated rows, one per
//! sweep point, to stdout or a file. Column order follows the sweep record
//! fields: window length, offset, then the numeric series.

use anyhow::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::score::ScoreResult;
use crate::stats::SignificanceResult;

fn open_writer(out_path: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = if let Some(path) = out_path {
        Box::new(BufWriter::new(File::create(path)?))
    } else {
        Box::new(BufWriter::new(io::stdout().lock()))
    };
    Ok(writer)
}

/// Write a score series: window_length, offset, strength, max_strength,
/// score.
pub fn write_score_table(results: &[ScoreResult], out_path: Option<&PathBuf>) -> Result<()> {
    let mut writer = open_writer(out_path)?;
    for result in results {
        writeln!(
            writer,
            "{}\t{}\t{:.6}\t{:.6}\t{:.6}",
            result.window.len,
            result.window.offset,
            result.strength,
            result.max_strength,
            result.score
        )?;
    }
    Ok(())
}

/// Write a significance series: window_length, offset, score, p_value.
pub fn write_significance_table(
    results: &[SignificanceResult],
    out_path: Option<&PathBuf>,
) -> Result<()> {
    let mut writer = open_writer(out_path)?;
    for result in results {
        writeln!(
            writer,
            "{}\t{}\t{:.6}\t{:.6}",
            result.window.len, result.window.offset, result.score, result.p_value
        )?;
    }
    Ok(())
}
