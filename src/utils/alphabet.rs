//! Letter/index conversion over the 26-letter Latin alphabet.
//!
//! Every substitution table in the machine is stored as 26 indices in
//! `0..26`. These helpers are the only place letters are turned into
//! indices and back.

use crate::error::EnigmaError;

/// Number of letters on the keyboard and contacts on every rotor.
pub const ALPHABET_LEN: usize = 26;

/// The keyboard alphabet in index order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Converts a letter to its index (`'A'` → 0, `'Z'` → 25).
///
/// Lowercase letters are accepted.
///
/// # Errors
/// Returns [`EnigmaError::InvalidLetter`] for anything outside A–Z.
pub fn letter_to_index(c: char) -> Result<usize, EnigmaError> {
    if c.is_ascii_alphabetic() {
        Ok((c.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        Err(EnigmaError::InvalidLetter(c))
    }
}

/// Converts an index to its uppercase letter. Indices wrap modulo 26.
pub fn index_to_letter(index: usize) -> char {
    (b'A' + (index % ALPHABET_LEN) as u8) as char
}

/// Parses a 26-letter wiring string into a table of indices.
///
/// # Errors
/// Returns [`EnigmaError::InvalidWiring`] if the string is not exactly a
/// permutation of A–Z.
pub fn parse_permutation(wiring: &str) -> Result<[u8; ALPHABET_LEN], EnigmaError> {
    let invalid = || EnigmaError::InvalidWiring(wiring.to_string());

    let letters: Vec<char> = wiring.chars().collect();
    if letters.len() != ALPHABET_LEN {
        return Err(invalid());
    }

    let mut table = [0u8; ALPHABET_LEN];
    let mut seen = [false; ALPHABET_LEN];
    for (slot, &c) in table.iter_mut().zip(letters.iter()) {
        let idx = letter_to_index(c).map_err(|_| invalid())?;
        if seen[idx] {
            return Err(invalid());
        }
        seen[idx] = true;
        *slot = idx as u8;
    }
    Ok(table)
}

/// Computes the inverse permutation, satisfying `inverse[table[i]] == i`.
pub fn invert(table: &[u8; ALPHABET_LEN]) -> [u8; ALPHABET_LEN] {
    let mut inverse = [0u8; ALPHABET_LEN];
    for (i, &out) in table.iter().enumerate() {
        inverse[out as usize] = i as u8;
    }
    inverse
}

/// Renders a table of indices back into its wiring string.
pub fn table_to_string(table: &[u8; ALPHABET_LEN]) -> String {
    table.iter().map(|&i| index_to_letter(i as usize)).collect()
}

/// Wraps a signed offset into `0..26`.
#[inline]
pub(crate) fn wrap(value: i32) -> usize {
    value.rem_euclid(ALPHABET_LEN as i32) as usize
}
