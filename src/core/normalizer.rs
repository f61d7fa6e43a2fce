// File: src/core/normalizer.rs
use unicode_normalization::UnicodeNormalization;

/// Reduces text to its comparable form: lower-cased, Greek accents,
/// diaereses and breathings removed, final sigma folded into medial sigma.
///
/// The text is decomposed (NFD) so every accented Greek letter, precomposed,
/// decomposed or polytonic, becomes a base letter plus combining marks. Marks
/// sitting on a Greek letter are dropped; everything else is recomposed (NFC)
/// and left as it was, so "café" stays "café".
pub fn normalize(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    let mut after_greek = false;

    for c in text.to_lowercase().nfd() {
        if is_combining_mark(c) {
            if !after_greek {
                stripped.push(c);
            }
            continue;
        }
        after_greek = is_greek(c);
        stripped.push(base_letter(c));
    }
    stripped.nfc().collect()
}

/// Letters the decomposition leaves untouched but search treats as equal.
fn base_letter(c: char) -> char {
    match c {
        'ς' => 'σ',
        _ => c,
    }
}

/// Combining Diacritical Marks block: tonos, oxia, varia, diaeresis,
/// breathings and ypogegrammeni all decompose into it.
fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}

/// Greek and Coptic plus Greek Extended blocks.
pub fn is_greek(c: char) -> bool {
    matches!(c, '\u{0370}'..='\u{03FF}' | '\u{1F00}'..='\u{1FFF}')
}

pub fn has_greek(text: &str) -> bool {
    text.chars().any(is_greek)
}

/// True when the text contains at least one basic ASCII letter.
pub fn has_latin(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_alphabetic())
}

/// Trims and collapses every whitespace run into a single space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keeps letters, digits, `_` and whitespace; everything else is removed.
///
/// "Letters" means any Unicode alphabetic character, so accented Latin and
/// other scripts survive too. The storefront's query cleaner kept only ASCII
/// word characters and Greek letters and would turn "café" into "caf".
pub fn strip_punctuation(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}
