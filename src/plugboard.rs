//! Plugboard (Steckerbrett): symmetric letter swaps at both ends of the circuit.

use crate::error::EnigmaError;
use crate::utils::alphabet::{index_to_letter, letter_to_index, ALPHABET_LEN};

/// Involutive letter-pair substitution.
///
/// Each letter is either unplugged (maps to itself) or cabled to exactly one
/// partner. The table is fixed at construction; the same table is used on the
/// way in and on the way out, which is what makes the machine reciprocal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    wiring: [u8; ALPHABET_LEN],
}

impl Default for Plugboard {
    fn default() -> Self {
        Plugboard {
            wiring: identity(),
        }
    }
}

impl Plugboard {
    /// Builds a plugboard from letter pairs. Letters are case-insensitive.
    ///
    /// Up to 13 pairs fit on the board; any further pair must reuse a letter
    /// and is rejected as such.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidLetter`] if a pair contains a non-letter.
    /// - [`EnigmaError::PlugSelfConnection`] if a letter is paired with itself.
    /// - [`EnigmaError::PlugLetterReused`] if a letter appears in two pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Plugboard;
    ///
    /// let board = Plugboard::new(&[('A', 'Z'), ('b', 'y')]).unwrap();
    /// assert_eq!(board.forward('A'), 'Z');
    /// assert_eq!(board.forward('Y'), 'B');
    /// assert_eq!(board.forward('C'), 'C');
    ///
    /// assert!(Plugboard::new(&[('A', 'A')]).is_err());
    /// ```
    pub fn new(pairs: &[(char, char)]) -> Result<Self, EnigmaError> {
        let mut wiring = identity();
        let mut used = [false; ALPHABET_LEN];

        for &(a, b) in pairs {
            let ia = letter_to_index(a)?;
            let ib = letter_to_index(b)?;
            if ia == ib {
                return Err(EnigmaError::PlugSelfConnection(index_to_letter(ia)));
            }
            for idx in [ia, ib] {
                if used[idx] {
                    return Err(EnigmaError::PlugLetterReused(index_to_letter(idx)));
                }
                used[idx] = true;
            }
            wiring[ia] = ib as u8;
            wiring[ib] = ia as u8;
        }

        Ok(Plugboard { wiring })
    }

    /// Returns the letter `c` is cabled to, or `c` itself when unplugged.
    ///
    /// Output is uppercase. Characters outside A–Z have no socket and come
    /// back unchanged.
    pub fn forward(&self, c: char) -> char {
        match letter_to_index(c) {
            Ok(idx) => index_to_letter(self.swap(idx)),
            Err(_) => c,
        }
    }

    /// Index form of [`forward`](Self::forward).
    #[inline]
    pub(crate) fn swap(&self, signal: usize) -> usize {
        self.wiring[signal] as usize
    }

    /// Configured pairs, each ordered `(lower, higher)` and sorted.
    pub fn pairs(&self) -> Vec<(char, char)> {
        self.wiring
            .iter()
            .enumerate()
            .filter(|&(i, &partner)| (partner as usize) > i)
            .map(|(i, &partner)| (index_to_letter(i), index_to_letter(partner as usize)))
            .collect()
    }

    /// Number of cables plugged in.
    pub fn len(&self) -> usize {
        self.pairs().len()
    }

    pub fn is_empty(&self) -> bool {
        self.wiring.iter().enumerate().all(|(i, &p)| p as usize == i)
    }

    /// Unplugs every cable.
    pub(crate) fn clear(&mut self) {
        self.wiring = identity();
    }
}

fn identity() -> [u8; ALPHABET_LEN] {
    let mut wiring = [0u8; ALPHABET_LEN];
    for (i, item) in wiring.iter_mut().enumerate() {
        *item = i as u8;
    }
    wiring
}
