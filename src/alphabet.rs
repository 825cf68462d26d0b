//! The fixed A–Z alphabet used as the coordinate space for every
//! substitution.
//!
//! All internal machinery works on `u8` indices in `[0, 26)`; conversion to
//! and from `char` happens only at the API boundary.

use crate::error::EnigmaError;

/// Number of symbols in the alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// Converts an uppercase letter to its alphabet index.
///
/// # Parameters
/// - `letter`: The character to convert.
///
/// # Errors
/// Returns [`EnigmaError::InvalidLetter`] for anything outside `A..=Z`.
pub fn index_of(letter: char) -> Result<u8, EnigmaError> {
    if letter.is_ascii_uppercase() {
        Ok(letter as u8 - b'A')
    } else {
        Err(EnigmaError::InvalidLetter)
    }
}

/// Converts an alphabet index back to its uppercase letter.
///
/// # Panics
/// Panics if `index` is outside `[0, 26)`; indices are validated at every
/// construction site, so a violation here is a library bug.
pub fn letter_at(index: u8) -> char {
    assert!(index < ALPHABET_LEN, "alphabet index out of range");
    (b'A' + index) as char
}

/// Converts an uppercase A–Z string into alphabet indices.
///
/// # Errors
/// Returns [`EnigmaError::InvalidLetter`] on the first character outside
/// `A..=Z`.
pub fn indices_of(text: &str) -> Result<Vec<u8>, EnigmaError> {
    text.chars().map(index_of).collect()
}

/// Addition modulo the alphabet length.
pub(crate) fn add(a: u8, b: u8) -> u8 {
    (a + b) % ALPHABET_LEN
}

/// Subtraction modulo the alphabet length.
pub(crate) fn sub(a: u8, b: u8) -> u8 {
    (a + ALPHABET_LEN - b) % ALPHABET_LEN
}
