//! Ordered letter sets that define the shift arithmetic.

use std::collections::HashMap;

use crate::error::CipherError;

/// Ordered unique letters plus the language's fold rules (`Ё` -> `Е`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
    positions: HashMap<char, usize>,
    folds: HashMap<char, char>,
}

impl Alphabet {
    pub fn new(letters: &str) -> Result<Self, CipherError> {
        let letters: Vec<char> = letters.chars().collect();
        if letters.is_empty() {
            return Err(CipherError::EmptyAlphabet);
        }

        let mut positions = HashMap::with_capacity(letters.len());
        for (index, &letter) in letters.iter().enumerate() {
            if positions.insert(letter, index).is_some() {
                return Err(CipherError::DuplicateLetter(letter));
            }
        }

        Ok(Alphabet {
            letters,
            positions,
            folds: HashMap::new(),
        })
    }

    /// Adds fold rules `(from, to)`. Every `to` must be a letter of the
    /// alphabet and no `from` may be one, so folding never chains.
    pub fn with_folds(mut self, folds: &[(char, char)]) -> Result<Self, CipherError> {
        for &(from, to) in folds {
            if !self.contains(to) || self.contains(from) {
                return Err(CipherError::InvalidFold { from, to });
            }
            self.folds.insert(from, to);
        }
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn contains(&self, c: char) -> bool {
        self.positions.contains_key(&c)
    }

    pub fn index_of(&self, c: char) -> Option<usize> {
        self.positions.get(&c).copied()
    }

    /// Letter at `index`. Panics when `index >= len()`.
    pub fn letter(&self, index: usize) -> char {
        self.letters[index]
    }

    pub fn fold(&self, c: char) -> char {
        self.folds.get(&c).copied().unwrap_or(c)
    }
}
