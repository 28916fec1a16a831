use crate::constants::{DEFAULT_BLOCK_SIZE, DEFAULT_MAX_LENGTH};
use crate::error::CipherError;
use crate::language::Language;

/// Front-end settings. Values that are missing or fail to parse fall back
/// to their defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub language: Language,
    /// Output group width, `0` disables grouping.
    pub block_size: usize,
    /// Longest accepted raw input, in characters.
    pub max_length: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            block_size: DEFAULT_BLOCK_SIZE,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl ClientConfig {
    /// Reads `CAESAR_LANGUAGE`, `CAESAR_BLOCK_SIZE` and `CAESAR_MAX_LENGTH`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let language = lookup("CAESAR_LANGUAGE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.language);
        let block_size = lookup("CAESAR_BLOCK_SIZE")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.block_size);
        let max_length = lookup("CAESAR_MAX_LENGTH")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.max_length);

        Self {
            language,
            block_size,
            max_length,
        }
    }

    /// Rejects raw input longer than `max_length` characters.
    pub fn check_length(&self, text: &str) -> Result<(), CipherError> {
        let length = text.chars().count();
        if length > self.max_length {
            return Err(CipherError::TextTooLong {
                length,
                limit: self.max_length,
            });
        }
        Ok(())
    }
}
