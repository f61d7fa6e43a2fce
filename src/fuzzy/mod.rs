pub mod levenshtein;
pub mod matcher;
