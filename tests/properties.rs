//! Randomized checks of the algebraic properties of the cipher, driven by a
//! seeded generator so failures reproduce.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crypto_caesar::algos::caesar::shift_text;
use crypto_caesar::algos::cryptanalysis::recover_shift;
use crypto_caesar::normalizer::normalize;
use crypto_caesar::{Alphabet, Language};

const ROUNDS: usize = 200;
const SHIFT_BOUND: i64 = 1_000_000;

fn random_letters(rng: &mut StdRng, alphabet: &Alphabet, len: usize) -> String {
    (0..len)
        .map(|_| alphabet.letter(rng.gen_range(0..alphabet.len())))
        .collect()
}

fn random_raw(rng: &mut StdRng, len: usize) -> String {
    const POOL: &[char] = &[
        'a', 'Z', 'q', ' ', '!', '7', 'ё', 'Ё', 'ж', 'Я', 'й', '\n', 'é', 'ß', '\u{0308}', 'е',
        'ﬁ',
    ];
    (0..len).map(|_| POOL[rng.gen_range(0..POOL.len())]).collect()
}

#[test]
fn shift_then_unshift_is_identity() {
    let mut rng = StdRng::seed_from_u64(0xCAE5A2);
    for language in [Language::English, Language::Russian] {
        let alphabet = language.alphabet();
        for _ in 0..ROUNDS {
            let len = rng.gen_range(0..64);
            let text = random_letters(&mut rng, alphabet, len);
            let shift = rng.gen_range(-SHIFT_BOUND..=SHIFT_BOUND);

            let cipher = shift_text(&text, alphabet, shift).unwrap();
            assert_eq!(shift_text(&cipher, alphabet, -shift).unwrap(), text);
        }
    }
}

#[test]
fn shift_is_periodic_in_alphabet_length() {
    let mut rng = StdRng::seed_from_u64(7);
    for language in [Language::English, Language::Russian] {
        let alphabet = language.alphabet();
        let len = alphabet.len() as i64;
        for _ in 0..ROUNDS {
            let text = random_letters(&mut rng, alphabet, 32);
            let shift = rng.gen_range(0..len);

            assert_eq!(
                shift_text(&text, alphabet, shift).unwrap(),
                shift_text(&text, alphabet, shift + len).unwrap()
            );
        }
    }
}

#[test]
fn normalize_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(42);
    for language in [Language::English, Language::Russian] {
        let alphabet = language.alphabet();
        for _ in 0..ROUNDS {
            let len = rng.gen_range(0..80);
            let raw = random_raw(&mut rng, len);

            let once = normalize(&raw, alphabet);
            assert_eq!(normalize(&once, alphabet), once);
            assert!(once.chars().all(|c| alphabet.contains(c)));
        }
    }
}

#[test]
fn each_character_normalizes_on_its_own() {
    // no combining marks here, so NFC never merges neighbours
    const POOL: &[char] = &['a', 'Z', ' ', 'ё', 'Ж', 'ß', 'ﬁ', 'ŉ', 'é', '7', 'x'];
    let mut rng = StdRng::seed_from_u64(1234);
    for language in [Language::English, Language::Russian] {
        let alphabet = language.alphabet();
        for _ in 0..ROUNDS {
            let len = rng.gen_range(0..40);
            let raw: String = (0..len).map(|_| POOL[rng.gen_range(0..POOL.len())]).collect();

            let piecewise: String = raw
                .chars()
                .map(|c| {
                    let letter = normalize(&c.to_string(), alphabet);
                    assert!(letter.chars().count() <= 1, "{:?} expanded to {:?}", c, letter);
                    letter
                })
                .collect();
            assert_eq!(normalize(&raw, alphabet), piecewise);
        }
    }
}

#[test]
fn recovered_shift_is_in_range() {
    let mut rng = StdRng::seed_from_u64(99);
    for language in [Language::English, Language::Russian] {
        let alphabet = language.alphabet();
        for _ in 0..ROUNDS {
            let len = rng.gen_range(1..40);
            let text = random_letters(&mut rng, alphabet, len);

            let shift = recover_shift(&text, alphabet, language.frequencies()).unwrap();
            assert!(shift < alphabet.len());
        }
    }
}

#[test]
fn empty_input_everywhere() {
    for language in [Language::English, Language::Russian] {
        let alphabet = language.alphabet();
        assert_eq!(normalize("", alphabet), "");
        assert_eq!(shift_text("", alphabet, 5).unwrap(), "");
        assert_eq!(
            recover_shift("", alphabet, language.frequencies()).unwrap(),
            0
        );
    }
}
