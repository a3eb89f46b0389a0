use std::collections::HashMap;

/// Type alias for N-gram sequences (vector of operation names)
pub type NGram = Vec<String>;

/// N-gram frequency table for a single window size
///
/// Besides the counts, the table remembers the order in which each distinct
/// N-gram was first recorded. Ranking uses that order to break ties, so two
/// runs over the same trace always report equal-count patterns identically.
#[derive(Debug, Clone, Default)]
pub struct NGramTable {
    n: usize,
    total: usize,
    /// Position of each distinct N-gram in `entries`
    index: HashMap<NGram, usize>,
    /// Distinct N-grams with their counts, in first-occurrence order
    entries: Vec<(NGram, usize)>,
}

impl NGramTable {
    /// Create an empty table for windows of size `n`
    pub fn new(n: usize) -> Self {
        Self {
            n,
            ..Self::default()
        }
    }

    /// Record one occurrence of `window`
    pub fn record(&mut self, window: &[String]) {
        debug_assert_eq!(window.len(), self.n);

        self.total += 1;
        match self.index.get(window) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(window.to_vec(), self.entries.len());
                self.entries.push((window.to_vec(), 1));
            }
        }
    }

    /// Window size
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of distinct N-grams
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of windows recorded
    pub fn total(&self) -> usize {
        self.total
    }

    /// Occurrence count of `ngram`, if it was ever recorded
    pub fn get(&self, ngram: &[String]) -> Option<usize> {
        self.index.get(ngram).map(|&pos| self.entries[pos].1)
    }

    /// Distinct N-grams and counts in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&[String], usize)> {
        self.entries
            .iter()
            .map(|(ngram, count)| (ngram.as_slice(), *count))
    }
}

/// Extracts N-gram sequences from an operation trace
///
/// For example, with N=3 (trigrams):
/// - Input trace: ["alloca", "store", "load", "add"]
/// - Output N-grams: [["alloca", "store", "load"], ["store", "load", "add"]]
///
/// A trace of length L yields exactly `max(0, L - n + 1)` windows. `n == 0`
/// yields an empty table.
///
/// # Example
/// ```
/// use opgram::sequence::extract_ngrams;
///
/// let ops = vec!["load".to_string(), "add".to_string(), "store".to_string()];
/// let ngrams = extract_ngrams(&ops, 2);
///
/// assert_eq!(ngrams.total(), 2);
/// assert_eq!(ngrams.get(&["load".to_string(), "add".to_string()]), Some(1));
/// ```
pub fn extract_ngrams(ops: &[String], n: usize) -> NGramTable {
    let mut ngrams = NGramTable::new(n);

    if n == 0 || ops.len() < n {
        return ngrams; // Not enough ops for a single window
    }

    // Sliding window of size N
    for window in ops.windows(n) {
        ngrams.record(window);
    }

    ngrams
}

/// Calculate N-gram coverage (distinct N-grams vs total occurrences)
///
/// High coverage indicates diverse op patterns.
/// Low coverage indicates repetitive patterns (tight loops).
pub fn ngram_coverage(ngrams: &NGramTable) -> f64 {
    if ngrams.is_empty() {
        return 0.0;
    }

    ngrams.len() as f64 / ngrams.total() as f64
}

/// Find the `k` most frequent N-grams
///
/// Equal counts keep first-occurrence order.
pub fn top_ngrams(ngrams: &NGramTable, k: usize) -> Vec<(NGram, usize)> {
    let mut ranked: Vec<_> = ngrams.iter().collect();

    // Stable sort by frequency (descending)
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(k)
        .map(|(ngram, count)| (ngram.to_vec(), count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ops(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extract_ngrams_basic() {
        let trace = ops(&["alloca", "store", "load", "add"]);

        let ngrams = extract_ngrams(&trace, 3);

        // Should have 2 trigrams
        assert_eq!(ngrams.len(), 2);
        assert_eq!(ngrams.total(), 2);

        assert_eq!(ngrams.get(&ops(&["alloca", "store", "load"])), Some(1));
        assert_eq!(ngrams.get(&ops(&["store", "load", "add"])), Some(1));
    }

    #[test]
    fn test_extract_ngrams_repeated() {
        let trace = ops(&["load", "add", "store", "load", "add", "store"]);

        let ngrams = extract_ngrams(&trace, 3);

        // Repeated pattern should increase count
        assert_eq!(ngrams.get(&ops(&["load", "add", "store"])), Some(2));
        assert_eq!(ngrams.total(), 4);
        assert_eq!(ngrams.len(), 3);
    }

    #[test]
    fn test_extract_ngrams_insufficient_length() {
        let trace = ops(&["load", "add"]);

        let ngrams = extract_ngrams(&trace, 3);

        // Not enough ops for trigrams
        assert!(ngrams.is_empty());
        assert_eq!(ngrams.total(), 0);
        assert_eq!(ngrams.n(), 3);
    }

    #[test]
    fn test_extract_ngrams_exact_length() {
        let trace = ops(&["load", "add", "store"]);
        let ngrams = extract_ngrams(&trace, 3);
        assert_eq!(ngrams.total(), 1);
    }

    #[test]
    fn test_extract_ngrams_zero_window() {
        let trace = ops(&["load", "add"]);
        let ngrams = extract_ngrams(&trace, 0);
        assert!(ngrams.is_empty());
        assert_eq!(ngrams.total(), 0);
    }

    #[test]
    fn test_iter_first_occurrence_order() {
        let trace = ops(&["b", "a", "b", "c", "a"]);
        let ngrams = extract_ngrams(&trace, 1);

        let order: Vec<_> = ngrams.iter().map(|(g, _)| g[0].clone()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_ngram_coverage() {
        let trace = ops(&["a", "b", "c", "d"]);
        let ngrams = extract_ngrams(&trace, 2);

        // 3 unique N-grams, 3 total occurrences = 100% coverage
        assert_eq!(ngram_coverage(&ngrams), 1.0);
    }

    #[test]
    fn test_ngram_coverage_repetitive() {
        let trace = ops(&["a", "a", "a", "a", "a"]);
        let ngrams = extract_ngrams(&trace, 1);

        // 1 unique N-gram, 5 total occurrences
        assert!((ngram_coverage(&ngrams) - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_ngram_coverage_empty() {
        assert_eq!(ngram_coverage(&NGramTable::new(2)), 0.0);
    }

    #[test]
    fn test_top_ngrams() {
        let trace = ops(&["a", "a", "b", "a", "b"]);
        let ngrams = extract_ngrams(&trace, 1);

        let top = top_ngrams(&ngrams, 2);

        assert_eq!(top.len(), 2);
        assert_eq!(top[0], (ops(&["a"]), 3)); // Most frequent first
        assert_eq!(top[1], (ops(&["b"]), 2));
    }

    #[test]
    fn test_top_ngrams_ties_keep_first_occurrence() {
        let trace = ops(&["x", "y", "z", "z", "y", "x"]);
        let ngrams = extract_ngrams(&trace, 1);

        let top = top_ngrams(&ngrams, 10);
        let names: Vec<_> = top.iter().map(|(g, _)| g[0].as_str()).collect();

        assert_eq!(names, vec!["x", "y", "z"]);
        assert!(top.iter().all(|(_, c)| *c == 2));
    }

    #[test]
    fn test_top_ngrams_truncates() {
        let trace: Vec<String> = (0..50).map(|i| format!("op{}", i)).collect();
        let ngrams = extract_ngrams(&trace, 1);

        let top = top_ngrams(&ngrams, 30);
        assert_eq!(top.len(), 30);
        assert_eq!(top[0].0, ops(&["op0"]));
        assert_eq!(top[29].0, ops(&["op29"]));
    }
}
