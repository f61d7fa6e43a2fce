// File: src/core/converter.rs

/// Greek diphthongs, tried before single letters.
const GREEK_DIGRAPHS: &[(&str, &str)] = &[
    ("αι", "ai"), ("ει", "ei"), ("οι", "oi"), ("υι", "ui"),
    ("αυ", "au"), ("ευ", "eu"), ("ου", "ou"),
];

/// Latin digraphs in priority order. Consonant clusters come first so that
/// "th" becomes θ before "t" and "h" are mapped on their own.
const LATIN_DIGRAPHS: &[(&str, &str)] = &[
    ("th", "θ"), ("ch", "χ"), ("ps", "ψ"),
    ("ai", "αι"), ("ei", "ει"), ("oi", "οι"), ("ui", "υι"),
    ("au", "αυ"), ("eu", "ευ"), ("ou", "ου"),
];

/// Best-effort Greek <-> Latin transliteration.
///
/// The mapping is lossy: ο and ω both become "o", so Greek -> Latin -> Greek
/// does not reproduce ω. Search compensates with synonyms and substring
/// matching; do not expect a round trip.
pub struct Transliterator;

impl Transliterator {
    pub fn new() -> Self {
        Self
    }

    /// Transliterates Greek letters to Latin. Expects normalized (lower-case)
    /// input; anything that is not a lower-case Greek letter passes through.
    pub fn to_latin(&self, greek: &str) -> String {
        scan(greek, GREEK_DIGRAPHS, greek_letter)
    }

    /// Transliterates Latin letters to Greek. The input is lower-cased first;
    /// letters without a Greek counterpart (c, j, q, v, y) pass through.
    pub fn to_greek(&self, latin: &str) -> String {
        scan(&latin.to_lowercase(), LATIN_DIGRAPHS, latin_letter)
    }
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn to_latin(greek: &str) -> String {
    Transliterator.to_latin(greek)
}

pub fn to_greek(latin: &str) -> String {
    Transliterator.to_greek(latin)
}

/// Greedy left-to-right rewrite: at each position the first matching digraph
/// wins, otherwise the single-character rule applies.
fn scan(text: &str, digraphs: &[(&str, &str)], single: fn(char) -> Option<&'static str>) -> String {
    let mut result = String::with_capacity(text.len() * 2);
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        if let Some((from, to)) = digraphs.iter().find(|(from, _)| rest.starts_with(from)) {
            result.push_str(to);
            rest = &rest[from.len()..];
            continue;
        }
        match single(c) {
            Some(mapped) => result.push_str(mapped),
            None => result.push(c),
        }
        rest = &rest[c.len_utf8()..];
    }
    result
}

fn greek_letter(c: char) -> Option<&'static str> {
    match c {
        'α' | 'ά' => Some("a"), 'β' => Some("b"), 'γ' => Some("g"),
        'δ' => Some("d"), 'ε' | 'έ' => Some("e"), 'ζ' => Some("z"),
        'η' | 'ή' => Some("h"), 'θ' => Some("th"), 'ι' | 'ί' => Some("i"),
        'κ' => Some("k"), 'λ' => Some("l"), 'μ' => Some("m"),
        'ν' => Some("n"), 'ξ' => Some("x"), 'ο' | 'ό' => Some("o"),
        'π' => Some("p"), 'ρ' => Some("r"), 'σ' | 'ς' => Some("s"),
        'τ' => Some("t"), 'υ' | 'ύ' => Some("u"), 'φ' => Some("f"),
        'χ' => Some("ch"), 'ψ' => Some("ps"), 'ω' | 'ώ' => Some("o"),
        _ => None,
    }
}

fn latin_letter(c: char) -> Option<&'static str> {
    match c {
        'a' => Some("α"), 'b' => Some("β"), 'g' => Some("γ"),
        'd' => Some("δ"), 'e' => Some("ε"), 'z' => Some("ζ"),
        'h' => Some("η"), 'i' => Some("ι"), 'k' => Some("κ"),
        'l' => Some("λ"), 'm' => Some("μ"), 'n' => Some("ν"),
        'x' => Some("ξ"), 'o' => Some("ο"), 'p' => Some("π"),
        'r' => Some("ρ"), 's' => Some("σ"), 't' => Some("τ"),
        'u' => Some("υ"), 'f' => Some("φ"), 'w' => Some("ω"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::normalizer::normalize;

    #[test]
    fn chi_is_one_unit() {
        assert_eq!(to_latin(&normalize("χελώνα")), "chelona");
    }

    #[test]
    fn greek_to_latin_words() {
        assert_eq!(to_latin("πορτοκαλια"), "portokalia");
        assert_eq!(to_latin("θυμαρι"), "thumari");
        assert_eq!(to_latin("ψωμι"), "psomi");
        assert_eq!(to_latin("κρητησ"), "krhths");
        assert_eq!(to_latin("ελαιολαδο"), "elaiolado");
    }

    #[test]
    fn latin_passes_through_to_latin() {
        assert_eq!(to_latin("feta π 42"), "feta p 42");
    }

    #[test]
    fn latin_digraphs_before_single_letters() {
        assert_eq!(to_greek("thalassa"), "θαλασσα");
        assert_eq!(to_greek("chorta"), "χορτα");
        assert_eq!(to_greek("psomi"), "ψομι");
        assert_eq!(to_greek("elaiolado"), "ελαιολαδο");
        assert_eq!(to_greek("oui"), "ουι");
    }

    #[test]
    fn to_greek_lowercases_and_keeps_unmapped() {
        assert_eq!(to_greek("PORTOKALIA"), "πορτοκαλια");
        assert_eq!(to_greek("cavy"), "cαvy");
    }

    #[test]
    fn round_trip_is_lossy_for_omega() {
        let latin = to_latin("ψωμι");
        assert_ne!(to_greek(&latin), "ψωμι");
        assert_eq!(to_greek(&latin), "ψομι");
    }

    #[test]
    fn empty_input() {
        assert_eq!(to_latin(""), "");
        assert_eq!(to_greek(""), "");
    }
}
