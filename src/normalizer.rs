use unicode_normalization::UnicodeNormalization;

use crate::alphabet::Alphabet;

/// Reduces raw text to letters of `alphabet`.
///
/// The text is composed to NFC, uppercased and folded (`Ё` -> `Е`); whatever
/// is still not a letter of `alphabet` is dropped. Each input character
/// yields at most one letter, in input order.
pub fn normalize(text: &str, alphabet: &Alphabet) -> String {
    text.nfc()
        .filter_map(single_uppercase)
        .map(|c| alphabet.fold(c))
        .filter(|&c| alphabet.contains(c))
        .collect()
}

// 'ß' uppercases to "SS"; such expansions are dropped, not spliced in.
fn single_uppercase(c: char) -> Option<char> {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => Some(u),
        _ => None,
    }
}
