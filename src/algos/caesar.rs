use crate::alphabet::Alphabet;
use crate::error::CipherError;
use crate::utils::wrap_index;

/// `text` must already be normalized. A character outside `alphabet` fails
/// with [`CipherError::InvalidCharacter`]; nothing is skipped.
pub fn shift_text(text: &str, alphabet: &Alphabet, shift: i64) -> Result<String, CipherError> {
    let len = alphabet.len();
    let shift = wrap_index(shift, len);

    text.chars()
        .enumerate()
        .map(|(position, character)| {
            let index = alphabet
                .index_of(character)
                .ok_or(CipherError::InvalidCharacter {
                    character,
                    position,
                })?;
            Ok(alphabet.letter((index + shift) % len))
        })
        .collect()
}

pub fn encrypt(text: &str, alphabet: &Alphabet, shift: i64) -> Result<String, CipherError> {
    shift_text(text, alphabet, shift)
}

pub fn decrypt(text: &str, alphabet: &Alphabet, shift: i64) -> Result<String, CipherError> {
    let forward = wrap_index(shift, alphabet.len()) as i64;
    shift_text(text, alphabet, -forward)
}
