//! Rotor (Walze): a stepping substitution unit with ring-offset correction.
//!
//! A rotor carries a fixed wiring permutation, the inverse of that wiring,
//! a turnover notch and a ring setting. Only its position changes, one
//! contact at a time, under control of the owning machine.

use crate::catalog::RotorId;
use crate::error::EnigmaError;
use crate::utils::alphabet::{
    index_to_letter, invert, letter_to_index, parse_permutation, wrap, ALPHABET_LEN,
};

/// A single rotor in a given window position and ring setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    label: String,
    wiring: [u8; ALPHABET_LEN],
    inverse: [u8; ALPHABET_LEN],
    notch: usize,
    ring: usize,
    position: usize,
}

impl Rotor {
    /// Creates a catalog rotor at window letter `position` with ring setting `ring`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidLetter`] if `position` or `ring` is not A–Z.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Rotor, RotorId};
    ///
    /// let rotor = Rotor::new(RotorId::I, 'A', 'A').unwrap();
    /// assert_eq!(rotor.forward(0), 4); // A exits at E
    /// assert_eq!(rotor.backward(4), 0);
    /// ```
    pub fn new(id: RotorId, position: char, ring: char) -> Result<Self, EnigmaError> {
        let mut rotor = Self::at_rest(id);
        rotor.ring = letter_to_index(ring)?;
        rotor.position = letter_to_index(position)?;
        Ok(rotor)
    }

    /// Catalog rotor at window A, ring A. Catalog tables are known-good.
    pub(crate) fn at_rest(id: RotorId) -> Self {
        let mut wiring = [0u8; ALPHABET_LEN];
        for (slot, b) in wiring.iter_mut().zip(id.wiring().bytes()) {
            *slot = b - b'A';
        }
        Rotor {
            label: id.name().to_string(),
            inverse: invert(&wiring),
            wiring,
            notch: (id.notch() as u8 - b'A') as usize,
            ring: 0,
            position: 0,
        }
    }

    /// Creates a rotor from an arbitrary wiring string.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidWiring`] if `wiring` is not a permutation of A–Z.
    /// - [`EnigmaError::InvalidNotch`] if `notch` is not A–Z.
    /// - [`EnigmaError::InvalidLetter`] if `position` or `ring` is not A–Z.
    pub fn from_wiring(
        wiring: &str,
        notch: char,
        position: char,
        ring: char,
    ) -> Result<Self, EnigmaError> {
        let table = parse_permutation(wiring)?;
        let notch = letter_to_index(notch).map_err(|_| EnigmaError::InvalidNotch(notch))?;
        Ok(Rotor {
            label: wiring.to_ascii_uppercase(),
            inverse: invert(&table),
            wiring: table,
            notch,
            ring: letter_to_index(ring)?,
            position: letter_to_index(position)?,
        })
    }

    /// Catalog name for catalog rotors, the wiring string otherwise.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current position, 0 = A.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Letter visible in the window.
    pub fn window(&self) -> char {
        index_to_letter(self.position)
    }

    /// Ring setting (Ringstellung), 0 = A.
    pub fn ring(&self) -> usize {
        self.ring
    }

    pub fn notch(&self) -> char {
        index_to_letter(self.notch)
    }

    /// True when the window shows the notch letter, i.e. this rotor will
    /// carry its left neighbour on the next keypress.
    pub fn is_at_notch(&self) -> bool {
        self.position == self.notch
    }

    /// Advances the rotor by one contact, wrapping Z → A.
    pub fn step(&mut self) {
        self.position = (self.position + 1) % ALPHABET_LEN;
    }

    /// Signal entering from the keyboard side (right to left).
    pub fn forward(&self, signal: usize) -> usize {
        self.encode(&self.wiring, signal)
    }

    /// Signal returning from the reflector side (left to right).
    pub fn backward(&self, signal: usize) -> usize {
        self.encode(&self.inverse, signal)
    }

    /// Overwrites the position. Ring and wiring are untouched.
    pub(crate) fn set_position(&mut self, position: usize) {
        self.position = position % ALPHABET_LEN;
    }

    /// Zeroes the key-dependent settings.
    pub(crate) fn clear(&mut self) {
        self.position = 0;
        self.ring = 0;
    }

    /// Passes `signal` through `table` with the rotor's angular offset.
    ///
    /// The position turns input and output contacts together; the ring shifts
    /// the wiring against the window letter in the opposite sense.
    fn encode(&self, table: &[u8; ALPHABET_LEN], signal: usize) -> usize {
        let offset = self.position as i32 - self.ring as i32;
        let shifted_in = wrap(signal as i32 + offset);
        let looked_up = table[shifted_in] as i32;
        wrap(looked_up - offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_at_rest() {
        let rotor = Rotor::new(RotorId::I, 'A', 'A').unwrap();
        // Position A, ring A: forward is the raw wiring.
        let out: String = (0..ALPHABET_LEN)
            .map(|i| index_to_letter(rotor.forward(i)))
            .collect();
        assert_eq!(out, RotorId::I.wiring());
    }

    #[test]
    fn test_backward_inverts_forward_everywhere() {
        for id in RotorId::ALL {
            for pos in ['A', 'F', 'Q', 'Z'] {
                for ring in ['A', 'C', 'Y'] {
                    let rotor = Rotor::new(id, pos, ring).unwrap();
                    for i in 0..ALPHABET_LEN {
                        assert_eq!(rotor.backward(rotor.forward(i)), i);
                        assert_eq!(rotor.forward(rotor.backward(i)), i);
                    }
                }
            }
        }
    }

    #[test]
    fn test_position_shifts_contacts() {
        // Rotor I at B: A enters contact B, exits K, shifted back to J.
        let rotor = Rotor::new(RotorId::I, 'B', 'A').unwrap();
        assert_eq!(rotor.forward(0), 9);
    }

    #[test]
    fn test_ring_offsets_against_position() {
        // Same offset (position - ring) gives the same substitution.
        let a = Rotor::new(RotorId::II, 'D', 'B').unwrap();
        let b = Rotor::new(RotorId::II, 'C', 'A').unwrap();
        for i in 0..ALPHABET_LEN {
            assert_eq!(a.forward(i), b.forward(i));
        }
        assert_ne!(a.window(), b.window());
    }

    #[test]
    fn test_step_wraps() {
        let mut rotor = Rotor::new(RotorId::III, 'Y', 'A').unwrap();
        rotor.step();
        assert_eq!(rotor.window(), 'Z');
        rotor.step();
        assert_eq!(rotor.window(), 'A');
        assert_eq!(rotor.position(), 0);
    }

    #[test]
    fn test_is_at_notch() {
        let mut rotor = Rotor::new(RotorId::II, 'D', 'A').unwrap();
        assert!(!rotor.is_at_notch());
        rotor.step();
        assert!(rotor.is_at_notch());
        rotor.step();
        assert!(!rotor.is_at_notch());
    }

    #[test]
    fn test_notch_ignores_ring() {
        let rotor = Rotor::new(RotorId::I, 'Q', 'M').unwrap();
        assert!(rotor.is_at_notch());
    }

    #[test]
    fn test_at_rest_matches_validated_wiring() {
        for id in RotorId::ALL {
            let trusted = Rotor::at_rest(id);
            let checked = Rotor::from_wiring(id.wiring(), id.notch(), 'A', 'A').unwrap();
            assert_eq!(trusted.wiring, checked.wiring);
            assert_eq!(trusted.inverse, checked.inverse);
            assert_eq!(trusted.notch, checked.notch);
        }
    }

    #[test]
    fn test_invalid_settings() {
        assert_eq!(
            Rotor::new(RotorId::I, '1', 'A'),
            Err(EnigmaError::InvalidLetter('1'))
        );
        assert_eq!(
            Rotor::new(RotorId::I, 'A', '?'),
            Err(EnigmaError::InvalidLetter('?'))
        );
    }

    #[test]
    fn test_from_wiring_validates() {
        assert!(matches!(
            Rotor::from_wiring("ABC", 'A', 'A', 'A'),
            Err(EnigmaError::InvalidWiring(_))
        ));
        assert_eq!(
            Rotor::from_wiring(RotorId::I.wiring(), '*', 'A', 'A'),
            Err(EnigmaError::InvalidNotch('*'))
        );
        let custom = Rotor::from_wiring("bdfhjlcprtxvznyeiwgakmusqo", 'v', 'a', 'a').unwrap();
        let catalog = Rotor::new(RotorId::III, 'A', 'A').unwrap();
        assert_eq!(custom.label(), RotorId::III.wiring());
        assert_eq!(custom.notch(), 'V');
        for i in 0..ALPHABET_LEN {
            assert_eq!(custom.forward(i), catalog.forward(i));
        }
    }

    #[test]
    fn test_set_position_keeps_ring() {
        let mut rotor = Rotor::new(RotorId::IV, 'A', 'H').unwrap();
        rotor.set_position(10);
        assert_eq!(rotor.window(), 'K');
        assert_eq!(rotor.ring(), 7);
    }
}
