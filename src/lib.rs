//! Російський Metaphone: фонетична нормалізація кирилічного тексту
//! та пословне порівняння двох текстів за звучанням

pub mod compare;
pub mod metaphone;

pub use compare::{compare, phonetic_codes};
pub use metaphone::get_phonetic_code;
