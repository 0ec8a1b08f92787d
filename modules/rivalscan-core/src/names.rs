//! Competitor-name cleaning.
//!
//! Deliberately reproduces the reference transform, warts and all: dedup is
//! a set over the raw strings (so differently-padded duplicates survive it),
//! the substring blocklist is checked against the *untrimmed* string and is
//! case-sensitive, and the join → strip → resplit step fragments multi-word
//! names that have no punctuation holding them together. Output order is
//! unspecified; downstream treats the result as a set.

use std::collections::HashSet;

/// Names containing any of these substrings are discarded outright —
/// they are search-page noise, not brands.
const EXCLUDED_SUBSTRINGS: [&str; 3] = ["review", "comparison", "site"];

/// Dedup, trim, and filter raw candidate names, then strip all
/// non-alphanumeric characters and resplit into tokens.
pub fn clean_competitor_names(names: Vec<String>) -> Vec<String> {
    let unique: HashSet<String> = names.into_iter().collect();

    let kept: Vec<&str> = unique
        .iter()
        .filter(|name| {
            name.trim().chars().count() > 1
                && !EXCLUDED_SUBSTRINGS.iter().any(|s| name.contains(s))
        })
        .map(|name| name.trim())
        .collect();

    let joined = kept.join(" ");
    let stripped: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();

    stripped.split_whitespace().map(str::to_string).collect()
}
