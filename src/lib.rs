// src/lib.rs
//! Greek-aware product search: accent and case folding, Greek <-> Latin
//! transliteration, query expansion and typo-tolerant matching over an
//! in-memory catalog.

pub mod config;
pub mod core;
pub mod error;
pub mod fuzzy;
pub mod persistence;

pub use crate::config::{MatchConfig, SearchConfig};
pub use crate::core::converter::{to_greek, to_latin, Transliterator};
pub use crate::core::engine::SearchEngine;
pub use crate::core::normalizer::{has_greek, has_latin, normalize};
pub use crate::core::types::{Product, ProductFilters, SortDirection, SortField};
pub use crate::core::variants::{expand, search_terms, QueryVariants, VariantGenerator};
pub use crate::error::{Result, SearchError};
pub use crate::fuzzy::levenshtein::edit_distance;
pub use crate::fuzzy::matcher::{matches, text_contains, text_matches, FuzzyMatcher};
