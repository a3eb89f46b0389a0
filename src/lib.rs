//! opgram - operation n-gram pattern analyzer for instrumented traces
//!
//! This library extracts operation names from `[I]` instruction-trace lines,
//! counts contiguous operation sequences of each size with a sliding window,
//! and renders the most frequent ones as text or JSON.

pub mod analyzer;
pub mod cli;
pub mod extract;
pub mod report;
pub mod sequence;
