//! String drills. The hashing ones read uppercase text with `A..=Z`
//! mapped to `1..=26`.

pub mod modify_text;
pub mod same_characters;
pub mod same_substring;
pub mod string_comparison;
pub mod substring_hash;

fn letter_value(c: u8) -> u64 {
    u64::from(c - b'A' + 1)
}
