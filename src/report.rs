//! Pattern report rendering
//!
//! Text output is tab-separated, one block per window size:
//!
//! ```text
//! # top patterns n=2
//! 2	41	load add
//! 2	40	add store
//!
//! ```
//!
//! JSON output carries the same rows plus per-size totals and coverage.

use crate::sequence::{ngram_coverage, top_ngrams, NGramTable};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// A single ranked N-gram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternEntry {
    /// Number of windows equal to `ops`
    pub count: usize,
    /// Operation names, in trace order
    pub ops: Vec<String>,
}

/// Ranked patterns for one window size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternReport {
    /// Window size
    pub n: usize,
    /// Total windows counted
    pub windows: usize,
    /// Distinct N-grams seen
    pub unique: usize,
    /// unique / windows (0.0 when no windows)
    pub coverage: f64,
    /// Most frequent N-grams, most frequent first
    pub patterns: Vec<PatternEntry>,
}

impl PatternReport {
    /// Rank the `top_k` most frequent entries of `table`
    pub fn from_table(table: &NGramTable, top_k: usize) -> Self {
        let patterns = top_ngrams(table, top_k)
            .into_iter()
            .map(|(ops, count)| PatternEntry { count, ops })
            .collect();

        Self {
            n: table.n(),
            windows: table.total(),
            unique: table.len(),
            coverage: ngram_coverage(table),
            patterns,
        }
    }
}

/// Write reports in the tab-separated text format
pub fn write_text<W: Write>(reports: &[PatternReport], out: &mut W) -> io::Result<()> {
    for report in reports {
        writeln!(out, "# top patterns n={}", report.n)?;
        for entry in &report.patterns {
            writeln!(out, "{}\t{}\t{}", report.n, entry.count, entry.ops.join(" "))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write reports as a pretty-printed JSON array
pub fn write_json<W: Write>(reports: &[PatternReport], out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, reports)?;
    writeln!(out)
}
