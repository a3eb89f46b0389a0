//! CLI argument parsing for opgram

use crate::analyzer::{AnalyzerConfig, DEFAULT_MAX_N, DEFAULT_TOP_K};
use clap::builder::TypedValueParser;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for pattern reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated text blocks (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "opgram")]
#[command(version)]
#[command(about = "Report the most frequent operation sequences in an instrumented trace", long_about = None)]
pub struct Cli {
    /// Trace log to analyze
    #[arg(value_name = "LOG_FILE")]
    pub log_file: PathBuf,

    /// Largest n-gram size to report (sizes 1..=N)
    #[arg(
        short = 'n',
        long = "max-n",
        value_name = "N",
        default_value_t = DEFAULT_MAX_N,
        value_parser = clap::value_parser!(u16).range(1..=16).map(usize::from)
    )]
    pub max_n: usize,

    /// Number of patterns reported per n-gram size
    #[arg(short = 'k', long = "top", value_name = "K", default_value_t = DEFAULT_TOP_K)]
    pub top: usize,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Override the op-line regex (capture group 1 is the operation name)
    #[arg(long = "pattern", value_name = "REGEX")]
    pub pattern: Option<String>,

    /// Enable debug tracing output to stderr
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// Analyzer configuration described by these arguments
    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            max_n: self.max_n,
            top_k: self.top,
            output_format: self.format,
        }
    }
}
