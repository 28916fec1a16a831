//! End-to-end key recovery on natural text.
//!
//! Frequency analysis is statistical; these samples are several hundred
//! letters long, enough for every shift to be recovered.

use crypto_caesar::algos::caesar::{encrypt, shift_text};
use crypto_caesar::algos::cryptanalysis::{break_cipher, rank_shifts, recover_shift};
use crypto_caesar::normalizer::normalize;
use crypto_caesar::utils::group_blocks;
use crypto_caesar::{Caesar, Encryptor, Language};

const ENGLISH_SAMPLE: &str = include_str!("data/english.txt");
const RUSSIAN_SAMPLE: &str = include_str!("data/russian.txt");
const RUSSIAN_CIPHERTEXT: &str = include_str!("data/russian_cipher.txt");

fn recovers_every_shift(sample: &str, language: Language) {
    let alphabet = language.alphabet();
    let table = language.frequencies();
    let plain = normalize(sample, alphabet);
    assert!(plain.chars().count() > 500);

    for key in 0..alphabet.len() as i64 {
        let cipher = encrypt(&plain, alphabet, key).unwrap();
        let recovered = recover_shift(&cipher, alphabet, table).unwrap();
        assert_eq!(recovered, key as usize, "{} key {}", language, key);
    }
}

#[test]
fn english_every_shift() {
    recovers_every_shift(ENGLISH_SAMPLE, Language::English);
}

#[test]
fn russian_every_shift() {
    recovers_every_shift(RUSSIAN_SAMPLE, Language::Russian);
}

#[test]
fn break_cipher_restores_plaintext() {
    let language = Language::English;
    let alphabet = language.alphabet();
    let plain = normalize(ENGLISH_SAMPLE, alphabet);
    let cipher = Caesar::new(language, 17).encrypt(ENGLISH_SAMPLE).unwrap();

    let cracked = break_cipher(&cipher, alphabet, language.frequencies()).unwrap();
    assert_eq!(cracked.shift, 17);
    assert_eq!(cracked.plaintext, plain);
    assert!(cracked.error >= 0.0);
}

#[test]
fn random_keys_are_recovered() {
    let language = Language::Russian;
    for _ in 0..10 {
        let caesar = Caesar::random(language);
        let cipher = caesar.encrypt(RUSSIAN_SAMPLE).unwrap();
        let recovered =
            recover_shift(&cipher, language.alphabet(), language.frequencies()).unwrap();
        assert_eq!(recovered, caesar.shift());
    }
}

#[test]
fn grouped_russian_ciphertext_breaks() {
    let language = Language::Russian;
    let alphabet = language.alphabet();
    let cipher = normalize(RUSSIAN_CIPHERTEXT, alphabet);

    let cracked = break_cipher(&cipher, alphabet, language.frequencies()).unwrap();
    assert_eq!(cracked.shift, 14);
    assert!(cracked.plaintext.starts_with("ВОТОТКРЫТБАЛАГАНЧИК"));
    assert_eq!(
        shift_text(&cracked.plaintext, alphabet, 14).unwrap(),
        cipher
    );
    assert!(group_blocks(&cracked.plaintext, 5).starts_with("ВОТОТ КРЫТБ АЛАГА"));
}

#[test]
fn correct_shift_clearly_beats_runner_up() {
    let language = Language::English;
    let alphabet = language.alphabet();
    let cipher = encrypt(&normalize(ENGLISH_SAMPLE, alphabet), alphabet, 5).unwrap();

    let ranked = rank_shifts(&cipher, alphabet, language.frequencies()).unwrap();
    assert_eq!(ranked.len(), 26);
    assert_eq!(ranked[0].shift, 5);
    assert!(ranked[1].error > ranked[0].error * 2.0);
}
