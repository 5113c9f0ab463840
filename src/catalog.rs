//! Catalog of historical Enigma I rotor and reflector wirings.
//!
//! Wirings are given as the letter each contact exits at, entering from the
//! keyboard side with the rotor at window A and ring A. The tables are
//! process-wide constants and never change.

use std::fmt;
use std::str::FromStr;

use crate::error::EnigmaError;

/// Rotor wirings and turnover notches, indexed by [`RotorId`].
const ROTOR_TABLE: [(&str, char); 5] = [
    ("EKMFLGDQVZNTOWYHXUSPAIBRCJ", 'Q'),
    ("AJDKSIRUXBLHWTMCQGZNPYFVOE", 'E'),
    ("BDFHJLCPRTXVZNYEIWGAKMUSQO", 'V'),
    ("ESOVPZJAYQUIRHXLNFTGKDCMWB", 'J'),
    ("VZBRGITYUPSDNHLXAWMJQOFECK", 'Z'),
];

/// Reflector wirings, indexed by [`ReflectorId`].
const REFLECTOR_TABLE: [&str; 2] = [
    "YRUHQSLDPXNGOKMIEBFZCWVJAT",
    "FVPJIAOYEDRZXWGCTKUQSBNMHL",
];

/// Identity of a catalog rotor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorId {
    I,
    II,
    III,
    IV,
    V,
}

impl RotorId {
    /// All catalog rotors in numeric order.
    pub const ALL: [RotorId; 5] = [RotorId::I, RotorId::II, RotorId::III, RotorId::IV, RotorId::V];

    /// Wiring string, A–Z order.
    pub fn wiring(self) -> &'static str {
        ROTOR_TABLE[self as usize].0
    }

    /// Window letter at which this rotor carries its left neighbour.
    pub fn notch(self) -> char {
        ROTOR_TABLE[self as usize].1
    }

    /// Roman-numeral name, as engraved on the rotor.
    pub fn name(self) -> &'static str {
        match self {
            RotorId::I => "I",
            RotorId::II => "II",
            RotorId::III => "III",
            RotorId::IV => "IV",
            RotorId::V => "V",
        }
    }
}

impl fmt::Display for RotorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RotorId {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RotorId::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EnigmaError::UnknownRotor(s.to_string()))
    }
}

/// Identity of a catalog reflector (Umkehrwalze).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectorId {
    B,
    C,
}

impl ReflectorId {
    /// All catalog reflectors.
    pub const ALL: [ReflectorId; 2] = [ReflectorId::B, ReflectorId::C];

    /// Wiring string, A–Z order.
    pub fn wiring(self) -> &'static str {
        REFLECTOR_TABLE[self as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            ReflectorId::B => "B",
            ReflectorId::C => "C",
        }
    }
}

impl fmt::Display for ReflectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReflectorId {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReflectorId::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EnigmaError::UnknownReflector(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::alphabet::{letter_to_index, parse_permutation};

    #[test]
    fn test_rotor_wirings_are_permutations() {
        for id in RotorId::ALL {
            assert!(parse_permutation(id.wiring()).is_ok(), "rotor {}", id);
            assert!(letter_to_index(id.notch()).is_ok());
        }
    }

    #[test]
    fn test_reflectors_are_fixed_point_free_involutions() {
        for id in ReflectorId::ALL {
            let table = parse_permutation(id.wiring()).unwrap();
            for (i, &out) in table.iter().enumerate() {
                assert_ne!(out as usize, i, "reflector {} fixes {}", id, i);
                assert_eq!(table[out as usize] as usize, i);
            }
        }
    }

    #[test]
    fn test_notches() {
        let notches: String = RotorId::ALL.iter().map(|id| id.notch()).collect();
        assert_eq!(notches, "QEVJZ");
    }

    #[test]
    fn test_parse_and_display() {
        for id in RotorId::ALL {
            assert_eq!(id.to_string().parse::<RotorId>().unwrap(), id);
        }
        assert_eq!("iii".parse::<RotorId>().unwrap(), RotorId::III);
        assert_eq!("c".parse::<ReflectorId>().unwrap(), ReflectorId::C);
    }

    #[test]
    fn test_unknown_identities() {
        assert_eq!(
            "VI".parse::<RotorId>(),
            Err(EnigmaError::UnknownRotor("VI".to_string()))
        );
        assert_eq!(
            "A".parse::<ReflectorId>(),
            Err(EnigmaError::UnknownReflector("A".to_string()))
        );
    }
}
