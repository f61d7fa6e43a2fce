// File: src/core/variants.rs
use crate::config::SearchConfig;
use crate::core::converter::Transliterator;
use crate::core::normalizer::{collapse_whitespace, has_greek, has_latin, normalize, strip_punctuation};
use crate::core::synonyms::expansions_for;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The equivalent search strings derived from one query. Computed per search
/// and thrown away afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryVariants {
    variants: BTreeSet<String>,
}

impl QueryVariants {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty strings are ignored.
    pub fn insert(&mut self, variant: String) {
        if !variant.is_empty() {
            self.variants.insert(variant);
        }
    }

    pub fn contains(&self, variant: &str) -> bool {
        self.variants.contains(variant)
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(String::as_str)
    }

    /// Shortest first, ties in lexical order. Used for search hints.
    pub fn by_length(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.iter().collect();
        out.sort_by_key(|v| v.chars().count());
        out
    }
}

impl FromIterator<String> for QueryVariants {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = QueryVariants::new();
        for v in iter {
            set.insert(v);
        }
        set
    }
}

impl<'a> IntoIterator for &'a QueryVariants {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.variants.iter()
    }
}

/// Turns a raw user query into its [`QueryVariants`].
pub struct VariantGenerator {
    transliterator: Transliterator,
    strip_punctuation: bool,
}

impl VariantGenerator {
    pub fn new() -> Self {
        Self {
            transliterator: Transliterator::new(),
            strip_punctuation: false,
        }
    }

    pub fn with_config(config: &SearchConfig) -> Self {
        Self {
            transliterator: Transliterator::new(),
            strip_punctuation: config.strip_query_punctuation,
        }
    }

    pub fn expand(&self, query: &str) -> QueryVariants {
        let mut variants = QueryVariants::new();

        let cleaned = if self.strip_punctuation {
            strip_punctuation(query)
        } else {
            query.to_string()
        };
        let normalized = collapse_whitespace(&normalize(&cleaned));
        if normalized.is_empty() {
            return variants;
        }

        if has_greek(&normalized) {
            variants.insert(self.transliterator.to_latin(&normalized));
        }

        if has_latin(query) && !has_greek(query) {
            let greek = self.transliterator.to_greek(&normalized);
            variants.insert(normalize(&greek));
            variants.insert(greek);
        }

        for synonym in expansions_for(&normalized) {
            variants.insert(synonym);
        }

        variants.insert(normalized);
        variants
    }
}

impl Default for VariantGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Expands a query with the default configuration.
pub fn expand(query: &str) -> QueryVariants {
    VariantGenerator::new().expand(query)
}

/// Every variant of every word of `text` longer than one character. Suited
/// for building a lookup index over a product's text.
pub fn search_terms(text: &str) -> BTreeSet<String> {
    let generator = VariantGenerator::new();
    text.split_whitespace()
        .filter(|word| word.chars().count() > 1)
        .flat_map(|word| generator.expand(word).variants)
        .collect()
}
