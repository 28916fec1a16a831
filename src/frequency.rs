//! Letter frequency tables and counting.

use std::collections::HashMap;

use crate::alphabet::Alphabet;
use crate::error::CipherError;

/// Letters missing from the table read as frequency `0.0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    weights: HashMap<char, f64>,
}

impl FrequencyTable {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, f64)>,
    {
        FrequencyTable {
            weights: pairs.into_iter().collect(),
        }
    }

    pub fn observe(text: &str, alphabet: &Alphabet) -> Result<Self, CipherError> {
        let distribution = distribution(text, alphabet)?;
        Ok(Self::from_pairs(
            alphabet.letters().iter().copied().zip(distribution),
        ))
    }

    pub fn get(&self, letter: char) -> f64 {
        self.weights.get(&letter).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn aligned(&self, alphabet: &Alphabet) -> Vec<f64> {
        alphabet.letters().iter().map(|&c| self.get(c)).collect()
    }
}

/// Fails with [`CipherError::InvalidCharacter`] on the first character
/// outside `alphabet`.
pub fn letter_counts(text: &str, alphabet: &Alphabet) -> Result<Vec<usize>, CipherError> {
    let mut counts = vec![0usize; alphabet.len()];
    for (position, character) in text.chars().enumerate() {
        let index = alphabet
            .index_of(character)
            .ok_or(CipherError::InvalidCharacter {
                character,
                position,
            })?;
        counts[index] += 1;
    }
    Ok(counts)
}

/// All zeros for an empty text.
pub fn distribution(text: &str, alphabet: &Alphabet) -> Result<Vec<f64>, CipherError> {
    let counts = letter_counts(text, alphabet)?;
    let total: usize = counts.iter().sum();

    if total == 0 {
        return Ok(vec![0.0; alphabet.len()]);
    }

    Ok(counts
        .into_iter()
        .map(|count| count as f64 / total as f64)
        .collect())
}
