//! Key recovery by least-squares frequency matching.

use tracing::{debug, trace};

use crate::algos::caesar::decrypt;
use crate::alphabet::Alphabet;
use crate::error::CipherError;
use crate::frequency::{distribution, FrequencyTable};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftScore {
    pub shift: usize,
    pub error: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cracked {
    pub shift: usize,
    pub error: f64,
    pub plaintext: String,
}

/// Returned in shift order.
pub fn score_shifts(
    ciphertext: &str,
    alphabet: &Alphabet,
    reference: &FrequencyTable,
) -> Result<Vec<ShiftScore>, CipherError> {
    let observed = distribution(ciphertext, alphabet)?;
    let expected = reference.aligned(alphabet);
    let len = alphabet.len();

    let scores = (0..len)
        .map(|shift| {
            // plaintext letter i is ciphertext letter i + shift
            let error = expected
                .iter()
                .enumerate()
                .map(|(i, &want)| {
                    let diff = want - observed[(i + shift) % len];
                    diff * diff
                })
                .sum();
            trace!(shift, error, "scored candidate shift");
            ShiftScore { shift, error }
        })
        .collect();

    Ok(scores)
}

/// Stable sort: equal errors keep ascending shift order.
pub fn rank_shifts(
    ciphertext: &str,
    alphabet: &Alphabet,
    reference: &FrequencyTable,
) -> Result<Vec<ShiftScore>, CipherError> {
    let mut scores = score_shifts(ciphertext, alphabet, reference)?;
    scores.sort_by(|a, b| a.error.total_cmp(&b.error));
    Ok(scores)
}

fn best_score(scores: &[ShiftScore]) -> ShiftScore {
    let mut best = ShiftScore {
        shift: 0,
        error: f64::INFINITY,
    };
    for score in scores {
        if score.error < best.error {
            best = *score;
        }
    }
    best
}

/// Equal errors resolve to the lowest shift; empty ciphertext gives `0`.
pub fn recover_shift(
    ciphertext: &str,
    alphabet: &Alphabet,
    reference: &FrequencyTable,
) -> Result<usize, CipherError> {
    let scores = score_shifts(ciphertext, alphabet, reference)?;
    let best = best_score(&scores);
    debug!(shift = best.shift, error = best.error, "recovered shift");
    Ok(best.shift)
}

pub fn break_cipher(
    ciphertext: &str,
    alphabet: &Alphabet,
    reference: &FrequencyTable,
) -> Result<Cracked, CipherError> {
    let scores = score_shifts(ciphertext, alphabet, reference)?;
    let best = best_score(&scores);
    let plaintext = decrypt(ciphertext, alphabet, best.shift as i64)?;
    debug!(shift = best.shift, error = best.error, "broke cipher");

    Ok(Cracked {
        shift: best.shift,
        error: best.error,
        plaintext,
    })
}
