// File: src/core/synonyms.rs
use crate::core::normalizer::normalize;

/// Known spellings of common product terms. Entries only ever widen a search.
pub const SYNONYMS: &[(&str, &[&str])] = &[
    // Vegetables
    ("τομάτα", &["ντομάτα", "τοματα", "ντοματα"]),
    ("ντομάτα", &["τομάτα", "τοματα", "ντοματα"]),
    ("πατάτα", &["πατατα"]),
    ("κρεμμύδι", &["κρεμμυδι"]),
    ("αγγούρι", &["αγγουρι"]),
    ("καρότο", &["καροτο"]),
    // Fruits
    ("πορτοκάλι", &["πορτοκαλι"]),
    ("μήλο", &["μηλο"]),
    ("μπανάνα", &["μπανανα"]),
    ("σταφύλι", &["σταφυλι"]),
    // Dairy
    ("γάλα", &["γαλα"]),
    ("τυρί", &["τυρι"]),
    ("γιαούρτι", &["γιαουρτι", "γιαουρτ"]),
    // Meat and fish
    ("κρέας", &["κρεας"]),
    ("κοτόπουλο", &["κοτοπουλο"]),
    ("ψάρι", &["ψαρι"]),
    ("αβγό", &["αβγο", "αυγό", "αυγο"]),
    // Adjectives
    ("βιολογικό", &["βιολογικο", "βιο"]),
    ("φρέσκο", &["φρεσκο"]),
    ("τοπικό", &["τοπικο"]),
    ("παραδοσιακό", &["παραδοσιακο"]),
];

/// Normalized variants of every entry whose key contains `normalized_query`
/// or is contained in it.
pub fn expansions_for(normalized_query: &str) -> impl Iterator<Item = String> + '_ {
    SYNONYMS
        .iter()
        .filter(move |(key, _)| {
            let key = normalize(key);
            key.contains(normalized_query) || normalized_query.contains(&key)
        })
        .flat_map(|(_, variants)| variants.iter().map(|v| normalize(v)))
}
