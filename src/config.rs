//! Tuning knobs for query expansion and fuzzy matching.
//!
//! The defaults reproduce the storefront's search behavior exactly: fuzzy
//! matching only for variants longer than four characters, tokens of at least
//! three characters, 20% tolerance capped at two edits. Changing any of them
//! changes which products a query returns, so bump `version` when you do.
//!
//! ```rust
//! use search_core::SearchConfig;
//!
//! let config = SearchConfig::default();
//! assert_eq!(config.version, 1);
//! assert_eq!(config.matching.max_edits, 2);
//! assert!(config.validate().is_ok());
//! ```

use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters of the edit-distance fallback in the fuzzy matcher.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MatchConfig {
    /// Variants of this many characters or fewer are matched by containment only.
    pub fuzzy_min_variant_len: usize,
    /// Candidate tokens shorter than this are never compared by edit distance.
    pub min_token_len: usize,
    /// Allowed edits as a percentage of the variant length, floored.
    pub tolerance_percent: usize,
    /// Hard cap on allowed edits regardless of variant length.
    pub max_edits: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            fuzzy_min_variant_len: 4,
            min_token_len: 3,
            tolerance_percent: 20,
            max_edits: 2,
        }
    }
}

impl MatchConfig {
    /// Edits tolerated for a variant of `variant_len` characters:
    /// `min(max_edits, floor(variant_len * tolerance_percent / 100))`.
    pub fn allowed_edits(&self, variant_len: usize) -> usize {
        (variant_len * self.tolerance_percent / 100).min(self.max_edits)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    /// Behavior version. Must be >= 1.
    pub version: u32,
    #[serde(rename = "match")]
    pub matching: MatchConfig,
    /// Drop punctuation from the query before expanding it.
    pub strip_query_punctuation: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            version: 1,
            matching: MatchConfig::default(),
            strip_query_punctuation: false,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version == 0 {
            return Err(SearchError::InvalidConfig(
                "version must be >= 1".to_string(),
            ));
        }
        if self.matching.tolerance_percent > 100 {
            return Err(SearchError::InvalidConfig(format!(
                "tolerance_percent must be <= 100, got {}",
                self.matching.tolerance_percent
            )));
        }
        if self.matching.min_token_len == 0 {
            return Err(SearchError::InvalidConfig(
                "min_token_len must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Reads a JSON config file. Missing fields fall back to their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: SearchConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_edits_is_twenty_percent_capped_at_two() {
        let cfg = MatchConfig::default();
        assert_eq!(cfg.allowed_edits(4), 0);
        assert_eq!(cfg.allowed_edits(5), 1);
        assert_eq!(cfg.allowed_edits(9), 1);
        assert_eq!(cfg.allowed_edits(10), 2);
        assert_eq!(cfg.allowed_edits(40), 2);
    }

    #[test]
    fn rejects_version_zero() {
        let cfg = SearchConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(SearchError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_out_of_range_tolerance() {
        let mut cfg = SearchConfig::default();
        cfg.matching.tolerance_percent = 150;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn partial_json_uses_defaults() {
        let cfg: SearchConfig =
            serde_json::from_str(r#"{ "match": { "max_edits": 1 } }"#).unwrap();
        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.matching.max_edits, 1);
        assert_eq!(cfg.matching.min_token_len, 3);
        assert!(!cfg.strip_query_punctuation);
    }
}
