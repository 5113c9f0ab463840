//! Reflector (Umkehrwalze): the fixed turn-around at the far end of the rotors.

use crate::catalog::ReflectorId;
use crate::error::EnigmaError;
use crate::utils::alphabet::{index_to_letter, parse_permutation, ALPHABET_LEN};

/// Self-reciprocal substitution with no fixed points.
///
/// Because no letter reflects onto itself, the machine can never encipher a
/// letter as itself; because the table is an involution, enciphering is its
/// own inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    label: String,
    wiring: [u8; ALPHABET_LEN],
}

impl Reflector {
    /// Loads a catalog reflector.
    pub fn new(id: ReflectorId) -> Self {
        let mut wiring = [0u8; ALPHABET_LEN];
        for (slot, b) in wiring.iter_mut().zip(id.wiring().bytes()) {
            *slot = b - b'A';
        }
        Reflector {
            label: id.name().to_string(),
            wiring,
        }
    }

    /// Builds a reflector from a custom wiring string.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidWiring`] if `wiring` is not a permutation of A–Z.
    /// - [`EnigmaError::ReflectorFixedPoint`] if a letter maps to itself.
    /// - [`EnigmaError::ReflectorNotInvolution`] if the table is not its own inverse.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Reflector;
    ///
    /// // Swap neighbouring letters: AB CD EF ...
    /// assert!(Reflector::from_wiring("BADCFEHGJILKNMPORQTSVUXWZY").is_ok());
    /// assert!(Reflector::from_wiring("ABCDEFGHIJKLMNOPQRSTUVWXYZ").is_err());
    /// ```
    pub fn from_wiring(wiring: &str) -> Result<Self, EnigmaError> {
        let table = parse_permutation(wiring)?;
        for (i, &out) in table.iter().enumerate() {
            if out as usize == i {
                return Err(EnigmaError::ReflectorFixedPoint(index_to_letter(i)));
            }
            if table[out as usize] as usize != i {
                return Err(EnigmaError::ReflectorNotInvolution(index_to_letter(i)));
            }
        }
        Ok(Reflector {
            label: wiring.to_ascii_uppercase(),
            wiring: table,
        })
    }

    /// Catalog name for catalog reflectors, the wiring string otherwise.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Sends the signal back towards the rotors.
    pub fn reflect(&self, signal: usize) -> usize {
        self.wiring[signal % ALPHABET_LEN] as usize
    }
}
