//! Caesar shift cipher over Russian and English alphabets, with key
//! recovery by frequency analysis.
//!
//! ```text
//! normalizer            raw text -> alphabet letters
//!     ↓
//! algos::caesar         letters  -> letters shifted by k
//!     ↓
//! algos::cryptanalysis  ciphertext -> most likely k
//! ```
//!
//! # Examples
//!
//! ```
//! use crypto_caesar::algos::caesar::encrypt;
//! use crypto_caesar::algos::cryptanalysis::recover_shift;
//! use crypto_caesar::normalizer::normalize;
//! use crypto_caesar::Language;
//!
//! let language = Language::English;
//! let alphabet = language.alphabet();
//!
//! let text = normalize(
//!     "It was the best of times, it was the worst of times, it was the age of \
//!      wisdom, it was the age of foolishness, it was the epoch of belief, it \
//!      was the epoch of incredulity, it was the season of light.",
//!     alphabet,
//! );
//! let cipher = encrypt(&text, alphabet, 7).unwrap();
//!
//! assert_eq!(recover_shift(&cipher, alphabet, language.frequencies()).unwrap(), 7);
//! ```

#[macro_use]
extern crate lazy_static;

pub mod algos;
pub mod alphabet;
pub mod config;
pub mod constants;
pub mod error;
pub mod frequency;
pub mod language;
pub mod normalizer;
pub mod structs;
pub mod traits;
pub mod utils;

pub use crate::alphabet::Alphabet;
pub use crate::error::CipherError;
pub use crate::frequency::FrequencyTable;
pub use crate::language::Language;
pub use crate::structs::Caesar;
pub use crate::traits::{Decryptor, Encryptor};
