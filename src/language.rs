use std::fmt;
use std::str::FromStr;

use crate::alphabet::Alphabet;
use crate::constants::{ENGLISH_ALPHABET, ENGLISH_TABLE, RUSSIAN_ALPHABET, RUSSIAN_TABLE};
use crate::error::CipherError;
use crate::frequency::FrequencyTable;

/// Built-in languages, each pairing an alphabet with its reference frequencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Russian,
    English,
}

impl Language {
    pub fn alphabet(self) -> &'static Alphabet {
        match self {
            Language::Russian => &RUSSIAN_ALPHABET,
            Language::English => &ENGLISH_ALPHABET,
        }
    }

    pub fn frequencies(self) -> &'static FrequencyTable {
        match self {
            Language::Russian => &RUSSIAN_TABLE,
            Language::English => &ENGLISH_TABLE,
        }
    }
}

impl FromStr for Language {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "russian" | "ru" => Ok(Language::Russian),
            "english" | "en" => Ok(Language::English),
            _ => Err(CipherError::UnknownLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Russian => write!(f, "russian"),
            Language::English => write!(f, "english"),
        }
    }
}
