//! Pattern analysis pipeline: read ops, count N-grams, render reports

use crate::cli::OutputFormat;
use crate::extract::OpExtractor;
use crate::report::{self, PatternReport};
use crate::sequence::extract_ngrams;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Largest window size reported by default
pub const DEFAULT_MAX_N: usize = 5;

/// Entries reported per window size by default
pub const DEFAULT_TOP_K: usize = 30;

/// Analyzer configuration
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Window sizes 1..=max_n are reported
    pub max_n: usize,
    /// Entries reported per window size
    pub top_k: usize,
    pub output_format: OutputFormat,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_n: DEFAULT_MAX_N,
            top_k: DEFAULT_TOP_K,
            output_format: OutputFormat::Text,
        }
    }
}

/// Build one report per window size, smallest first
pub fn analyze(ops: &[String], config: &AnalyzerConfig) -> Vec<PatternReport> {
    (1..=config.max_n)
        .map(|n| {
            let table = extract_ngrams(ops, n);
            tracing::debug!(
                n,
                windows = table.total(),
                unique = table.len(),
                "counted n-grams"
            );
            PatternReport::from_table(&table, config.top_k)
        })
        .collect()
}

/// Render reports in the configured format
pub fn write_reports<W: Write>(
    reports: &[PatternReport],
    config: &AnalyzerConfig,
    out: &mut W,
) -> Result<()> {
    let written = match config.output_format {
        OutputFormat::Text => report::write_text(reports, out),
        OutputFormat::Json => report::write_json(reports, out),
    };
    written.context("Failed to write pattern report")?;
    out.flush().context("Failed to flush pattern report")
}

/// Analyze a trace log and write the report to `out`
pub fn run<P: AsRef<Path>, W: Write>(
    log_path: P,
    extractor: &OpExtractor,
    config: &AnalyzerConfig,
    out: &mut W,
) -> Result<()> {
    let ops = extractor.read_ops(log_path)?;
    let reports = analyze(&ops, config);
    write_reports(&reports, config, out)
}
