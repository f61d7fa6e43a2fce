// File: src/fuzzy/levenshtein.rs

/// Levenshtein distance over `char`s: insertions, deletions and substitutions
/// each cost 1, transpositions are not discounted.
pub fn edit_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}
