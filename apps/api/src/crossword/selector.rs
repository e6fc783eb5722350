//! Candidate Selector — turns the raw keyword list into the engine's working set.

use std::collections::BTreeSet;

/// Shortest admissible word (inclusive).
pub const MIN_WORD_LEN: usize = 3;
/// Longest admissible word (exclusive).
pub const MAX_WORD_LEN: usize = 15;
/// Size cap of the working set.
pub const MAX_CANDIDATES: usize = 30;

/// Filters, deduplicates, and orders raw keywords.
///
/// - keeps words whose char length is in `[MIN_WORD_LEN, MAX_WORD_LEN)`
/// - deduplicates case-sensitively (`"Rust"` and `"rust"` are both kept)
/// - orders longest first, equal lengths lexicographically
/// - truncates to `MAX_CANDIDATES`
pub fn select_candidates<S: AsRef<str>>(raw_keywords: &[S]) -> Vec<String> {
    let unique: BTreeSet<&str> = raw_keywords
        .iter()
        .map(|kw| kw.as_ref())
        .filter(|kw| (MIN_WORD_LEN..MAX_WORD_LEN).contains(&kw.chars().count()))
        .collect();

    // BTreeSet yields lexicographic order; the stable sort keeps it among equal lengths.
    let mut candidates: Vec<&str> = unique.into_iter().collect();
    candidates.sort_by_key(|kw| std::cmp::Reverse(kw.chars().count()));
    candidates.truncate(MAX_CANDIDATES);

    candidates.into_iter().map(String::from).collect()
}
