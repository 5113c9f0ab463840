//! Error types for the Enigma machine library.

use std::fmt;

/// Configuration errors produced while assembling a machine or its parts.
///
/// Encryption itself never fails: once a machine is built, every substitution
/// table is total over A–Z.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnigmaError {
    /// The machine was given something other than exactly three rotors.
    WrongRotorCount(usize),
    /// Rotor identity is not in the catalog.
    UnknownRotor(String),
    /// Reflector identity is not in the catalog.
    UnknownReflector(String),
    /// Character is not a letter A–Z (case-insensitive).
    InvalidLetter(char),
    /// A plugboard cable connects a letter to itself.
    PlugSelfConnection(char),
    /// A letter appears in more than one plugboard pair.
    PlugLetterReused(char),
    /// Wiring table is not a permutation of A–Z.
    InvalidWiring(String),
    /// Notch is not a letter A–Z.
    InvalidNotch(char),
    /// Reflector table does not map the letter back onto itself when applied twice.
    ReflectorNotInvolution(char),
    /// Reflector table maps the letter to itself.
    ReflectorFixedPoint(char),
}

impl fmt::Display for EnigmaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnigmaError::WrongRotorCount(n) => {
                write!(f, "Exactly 3 rotors are required, got {}", n)
            }
            EnigmaError::UnknownRotor(name) => write!(f, "Unknown rotor '{}'", name),
            EnigmaError::UnknownReflector(name) => write!(f, "Unknown reflector '{}'", name),
            EnigmaError::InvalidLetter(c) => write!(f, "'{}' is not a letter A-Z", c),
            EnigmaError::PlugSelfConnection(c) => {
                write!(f, "Cannot connect a letter to itself: {}", c)
            }
            EnigmaError::PlugLetterReused(c) => {
                write!(f, "Letter already used in plugboard: {}", c)
            }
            EnigmaError::InvalidWiring(wiring) => {
                write!(f, "Wiring '{}' is not a permutation of A-Z", wiring)
            }
            EnigmaError::InvalidNotch(c) => write!(f, "Notch '{}' is not a letter A-Z", c),
            EnigmaError::ReflectorNotInvolution(c) => {
                write!(f, "Reflector wiring is not self-reciprocal at {}", c)
            }
            EnigmaError::ReflectorFixedPoint(c) => {
                write!(f, "Reflector wiring maps {} to itself", c)
            }
        }
    }
}

impl std::error::Error for EnigmaError {}
