//! Exact substring matching via the Knuth-Morris-Pratt algorithm.
//!
//! Keyword search runs the same pattern against every candidate field
//! value in a request, so the pattern is compiled once into a
//! [`Matcher`] (pattern characters plus failure table) and reused.
//! Matching is case-sensitive; callers fold case on both sides before
//! searching.

/// A search pattern compiled with its precomputed failure table.
#[derive(Debug, Clone)]
pub struct Matcher {
    pattern: Vec<char>,
    table: Vec<usize>,
}

impl Matcher {
    /// Compile `pattern` for repeated use against many texts.
    pub fn new(pattern: &str) -> Self {
        let pattern: Vec<char> = pattern.chars().collect();
        let table = failure_table(&pattern);
        Self { pattern, table }
    }

    /// Whether the pattern occurs as a contiguous substring of `text`.
    ///
    /// An empty pattern matches any text, including the empty text.
    pub fn matches(&self, text: &str) -> bool {
        if self.pattern.is_empty() {
            return true;
        }

        let mut j = 0;
        for c in text.chars() {
            while j > 0 && c != self.pattern[j] {
                j = self.table[j - 1];
            }
            if c == self.pattern[j] {
                j += 1;
            }
            if j == self.pattern.len() {
                return true;
            }
        }

        false
    }
}

/// Build the failure table (partial-match table) for `pattern`.
///
/// Entry `i` is the length of the longest proper prefix of
/// `pattern[..=i]` that is also a suffix of it. The inner loop only
/// ever falls back through previously computed entries, so the whole
/// pass is O(pattern length).
pub fn failure_table(pattern: &[char]) -> Vec<usize> {
    let mut table = vec![0; pattern.len()];
    let mut prefix_len = 0;

    for i in 1..pattern.len() {
        while prefix_len > 0 && pattern[i] != pattern[prefix_len] {
            prefix_len = table[prefix_len - 1];
        }
        if pattern[i] == pattern[prefix_len] {
            prefix_len += 1;
        }
        table[i] = prefix_len;
    }

    table
}

/// One-shot containment check for a single text/pattern pair.
pub fn matches(text: &str, pattern: &str) -> bool {
    Matcher::new(pattern).matches(text)
}
