//! Error types for the cipher library.

use thiserror::Error;

/// Errors produced by the cipher, normalizer and cryptanalysis routines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// An alphabet must contain at least one letter.
    #[error("Alphabet must contain at least one letter")]
    EmptyAlphabet,
    /// Alphabet letters must be unique.
    #[error("Letter '{0}' appears more than once in the alphabet")]
    DuplicateLetter(char),
    /// A fold rule would rewrite a letter, or target a non-letter.
    #[error("Fold rule '{from}' -> '{to}' must map a non-letter onto a letter of the alphabet")]
    InvalidFold { from: char, to: char },
    /// Text handed to the cipher contains a character the alphabet does not know.
    /// Normalize the text first.
    #[error("Character '{character}' at position {position} is not in the alphabet")]
    InvalidCharacter { character: char, position: usize },
    /// Language name could not be parsed.
    #[error("Unknown language '{0}', expected 'russian' or 'english'")]
    UnknownLanguage(String),
    /// Raw input exceeds the configured limit.
    #[error("Text is {length} characters long, the limit is {limit}")]
    TextTooLong { length: usize, limit: usize },
}
