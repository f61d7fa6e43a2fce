// File: src/fuzzy/matcher.rs
use crate::config::MatchConfig;
use crate::core::normalizer::normalize;
use crate::core::variants::{expand, QueryVariants};
use crate::fuzzy::levenshtein::edit_distance;

/// Decides whether a piece of product text answers a query.
///
/// A variant matches when it is a substring of the normalized candidate. For
/// variants longer than `fuzzy_min_variant_len` characters, a whitespace
/// token of the candidate also matches when it is within
/// [`MatchConfig::allowed_edits`] of the variant. Short variants never use
/// edit distance: one typo in a four-letter word is usually another word.
#[derive(Debug, Clone, Default)]
pub struct FuzzyMatcher {
    config: MatchConfig,
}

impl FuzzyMatcher {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn matches(&self, candidate: &str, variants: &QueryVariants) -> bool {
        if candidate.is_empty() || variants.is_empty() {
            return false;
        }
        let normalized = normalize(candidate);
        variants.iter().any(|variant| self.matches_variant(&normalized, variant))
    }

    fn matches_variant(&self, normalized: &str, variant: &str) -> bool {
        if normalized.contains(variant) {
            return true;
        }

        let variant_len = variant.chars().count();
        if variant_len <= self.config.fuzzy_min_variant_len {
            return false;
        }

        let allowed = self.config.allowed_edits(variant_len);
        normalized
            .split_whitespace()
            .filter(|token| token.chars().count() >= self.config.min_token_len)
            .any(|token| edit_distance(token, variant) <= allowed)
    }
}

/// [`FuzzyMatcher::matches`] with the default thresholds.
pub fn matches(candidate: &str, variants: &QueryVariants) -> bool {
    FuzzyMatcher::default().matches(candidate, variants)
}

/// True when the two texts share at least one variant.
pub fn text_matches(a: &str, b: &str) -> bool {
    let left = expand(a);
    let right = expand(b);
    let shared = left.iter().any(|v| right.contains(v));
    shared
}

/// True when some variant of `query` is a substring of some variant of
/// `target`. Exact containment only, no edit distance.
pub fn text_contains(target: &str, query: &str) -> bool {
    let target_variants = expand(target);
    let query_variants = expand(query);
    let found = target_variants
        .iter()
        .any(|t| query_variants.iter().any(|q| t.contains(q)));
    found
}
