use crate::alphabet::Alphabet;
use crate::frequency::FrequencyTable;

pub const ENGLISH_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const RUSSIAN_LETTERS: &str = "АБВГДЕЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";

pub const RUSSIAN_FOLDS: [(char, char); 1] = [('Ё', 'Е')];

/// Width of the letter groups the front end prints.
pub const DEFAULT_BLOCK_SIZE: usize = 5;
/// Longest raw input the front end accepts, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 10_000;

pub const ENGLISH_FREQUENCIES: [(char, f64); 26] = [
    ('A', 0.08167),
    ('B', 0.01492),
    ('C', 0.02782),
    ('D', 0.04253),
    ('E', 0.12702),
    ('F', 0.02228),
    ('G', 0.02015),
    ('H', 0.06094),
    ('I', 0.06966),
    ('J', 0.00153),
    ('K', 0.00772),
    ('L', 0.04025),
    ('M', 0.02406),
    ('N', 0.06749),
    ('O', 0.07507),
    ('P', 0.01929),
    ('Q', 0.00095),
    ('R', 0.05987),
    ('S', 0.06327),
    ('T', 0.09056),
    ('U', 0.02758),
    ('V', 0.00978),
    ('W', 0.02360),
    ('X', 0.00150),
    ('Y', 0.01974),
    ('Z', 0.00074),
];

pub const RUSSIAN_FREQUENCIES: [(char, f64); 32] = [
    ('О', 0.090),
    ('Е', 0.072),
    ('А', 0.062),
    ('И', 0.062),
    ('Н', 0.053),
    ('Т', 0.053),
    ('С', 0.045),
    ('Р', 0.040),
    ('В', 0.038),
    ('Л', 0.035),
    ('К', 0.028),
    ('М', 0.026),
    ('Д', 0.025),
    ('П', 0.023),
    ('У', 0.021),
    ('Я', 0.018),
    ('Ы', 0.016),
    ('Ь', 0.014),
    ('Ъ', 0.014),
    ('Г', 0.013),
    ('З', 0.012),
    ('Б', 0.014),
    ('Ч', 0.012),
    ('Й', 0.010),
    ('Х', 0.009),
    ('Ж', 0.007),
    ('Ш', 0.006),
    ('Ю', 0.006),
    ('Ц', 0.003),
    ('Щ', 0.003),
    ('Э', 0.003),
    ('Ф', 0.002),
];

lazy_static! {
    pub static ref ENGLISH_ALPHABET: Alphabet =
        Alphabet::new(ENGLISH_LETTERS).expect("built-in English alphabet is valid");
    pub static ref RUSSIAN_ALPHABET: Alphabet = Alphabet::new(RUSSIAN_LETTERS)
        .and_then(|alphabet| alphabet.with_folds(&RUSSIAN_FOLDS))
        .expect("built-in Russian alphabet is valid");
    pub static ref ENGLISH_TABLE: FrequencyTable = FrequencyTable::from_pairs(ENGLISH_FREQUENCIES);
    pub static ref RUSSIAN_TABLE: FrequencyTable = FrequencyTable::from_pairs(RUSSIAN_FREQUENCIES);
}
