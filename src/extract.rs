//! Op-line extraction for instrumented execution traces
//!
//! The instrumentation pass prints one line per executed instruction:
//!
//! ```text
//! [I] main :: entry :: add {140735123456}
//! ```
//!
//! Only the opcode segment (`add`) is kept. Every other line (`[U]` use-trace
//! records, `[LOG]` call records, program output) is skipped silently.

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default op-line pattern; capture group 1 is the operation name
///
/// Separator whitespace also accepts the ASCII information separators
/// `\x1c`-`\x1f`, which `str::isspace`-style whitespace includes but the
/// Unicode `White_Space` class behind `\s` does not.
pub const DEFAULT_OP_PATTERN: &str =
    r"^\[I\][\s\x1c-\x1f]+[^:]+::[\s\x1c-\x1f]*[^:]*::[\s\x1c-\x1f]*([a-zA-Z0-9_]+)[\s\x1c-\x1f]*\{";

/// Errors raised while compiling an op-line pattern
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Invalid op pattern: {0}")]
    Invalid(#[from] regex::Error),

    #[error("Op pattern has no capture group: {0}")]
    MissingCapture(String),
}

/// Errors raised while loading a trace log
#[derive(Error, Debug)]
pub enum TraceLogError {
    #[error("Failed to read trace log {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Extracts operation names from trace log lines
#[derive(Debug, Clone)]
pub struct OpExtractor {
    pattern: Regex,
}

impl OpExtractor {
    /// Create an extractor using [`DEFAULT_OP_PATTERN`]
    pub fn new() -> Result<Self, PatternError> {
        Self::with_pattern(DEFAULT_OP_PATTERN)
    }

    /// Create an extractor from a custom pattern
    ///
    /// The pattern is matched at the start of each line and must contain at
    /// least one capture group; group 1 becomes the operation name. Patterns
    /// are not implicitly anchored, so include `^` to reject lines where the
    /// record starts mid-line.
    pub fn with_pattern(pattern: &str) -> Result<Self, PatternError> {
        let pattern = Regex::new(pattern)?;

        // captures_len() counts the implicit whole-match group
        if pattern.captures_len() < 2 {
            return Err(PatternError::MissingCapture(pattern.as_str().to_string()));
        }

        Ok(Self { pattern })
    }

    /// The pattern source this extractor matches with
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Extract the operation name from a single line, if it is an op line
    pub fn extract_op<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Extract operation names from every op line in `text`, in order
    ///
    /// `\n`, `\r\n` and a lone `\r` all terminate a line.
    pub fn extract_ops(&self, text: &str) -> Vec<String> {
        text.split(['\n', '\r'])
            .filter_map(|line| self.extract_op(line))
            .map(str::to_string)
            .collect()
    }

    /// Read a trace log and extract its operation sequence
    ///
    /// The whole file is loaded into memory. Invalid UTF-8 is dropped rather
    /// than treated as an error.
    pub fn read_ops<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>, TraceLogError> {
        let path = path.as_ref();

        let bytes = fs::read(path).map_err(|source| TraceLogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded trace log");

        let text = decode_ignoring_invalid(&bytes);
        let ops = self.extract_ops(&text);
        tracing::debug!(ops = ops.len(), "extracted op sequence");

        Ok(ops)
    }
}

/// Decode UTF-8, silently dropping invalid byte sequences
pub fn decode_ignoring_invalid(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        if !chunk.invalid().is_empty() {
            tracing::trace!(dropped = chunk.invalid().len(), "skipping invalid UTF-8");
        }
    }
    text
}
