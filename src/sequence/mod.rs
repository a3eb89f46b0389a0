// N-gram Sequence Analysis for Operation Pattern Detection
//
// Instrumented traces record one operation per executed instruction. Hot
// loops and repeated idioms show up as operation SEQUENCES that recur,
// which single-op counts cannot reveal (e.g., load→add→store repeating).
//
// Every window size gets its own freshly built table; nothing is shared
// between sizes.

mod ngram;

pub use ngram::{extract_ngrams, ngram_coverage, top_ngrams, NGram, NGramTable};
