pub mod caesar;
pub mod cryptanalysis;
