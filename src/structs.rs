use rand::{self, Rng};

use crate::algos::caesar::shift_text;
use crate::error::CipherError;
use crate::language::Language;
use crate::normalizer::normalize;
use crate::traits::{Decryptor, Encryptor};
use crate::utils::wrap_index;

/// A shift cipher keyed for one language.
///
/// Unlike the free functions in [`crate::algos::caesar`], it accepts raw
/// text and normalizes it before shifting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    language: Language,
    shift: usize,
}

impl Caesar {
    /// The key is reduced modulo the alphabet length.
    pub fn new(language: Language, shift: i64) -> Self {
        Caesar {
            language,
            shift: wrap_index(shift, language.alphabet().len()),
        }
    }

    /// A random key in `[1, len)`, so the ciphertext never equals the plaintext.
    pub fn random(language: Language) -> Self {
        let shift = rand::thread_rng().gen_range(1..language.alphabet().len());

        Caesar { language, shift }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn shift(&self) -> usize {
        self.shift
    }
}

impl Encryptor for Caesar {
    fn encrypt(&self, message: &str) -> Result<String, CipherError> {
        let alphabet = self.language.alphabet();
        let text = normalize(message, alphabet);

        shift_text(&text, alphabet, self.shift as i64)
    }
}

impl Decryptor for Caesar {
    fn decrypt(&self, message: &str) -> Result<String, CipherError> {
        let alphabet = self.language.alphabet();
        let text = normalize(message, alphabet);

        shift_text(&text, alphabet, -(self.shift as i64))
    }
}
