//! Electromechanical signal-path simulation of the three-rotor Enigma I.
//!
//! Models the plugboard, three stepping rotors with ring settings (including
//! the double-step of the middle rotor), and the reflector. Enciphering is
//! reciprocal: resetting the rotor windows and enciphering the ciphertext
//! gives back the plaintext.
//!
//! # Architecture
//!
//! ```text
//! Plugboard  (involutive letter swaps, applied on the way in and out)
//! Rotor      (wiring + precomputed inverse, notch, ring, moving position)
//!     × 3    stepped right-to-left by the machine before each keypress
//! Reflector  (fixed-point-free involution turning the signal back)
//! EnigmaMachine (stepping protocol + signal path)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use enigma::EnigmaMachine;
//!
//! let mut machine = EnigmaMachine::from_settings(
//!     &["III", "IV", "II"],
//!     &['G', 'T', 'N'],
//!     &['C', 'H', 'F'],
//!     &[('A', 'Z'), ('B', 'X'), ('C', 'W')],
//!     "B",
//! )
//! .unwrap();
//!
//! let ciphertext = machine.encrypt("ATTACK AT DAWN");
//! assert_ne!(ciphertext, "ATTACK AT DAWN");
//!
//! machine.reset(['G', 'T', 'N']).unwrap();
//! assert_eq!(machine.decrypt(&ciphertext), "ATTACK AT DAWN");
//! ```
//!
//! Watch the double-step:
//!
//! ```
//! use enigma::EnigmaMachine;
//!
//! let mut machine =
//!     EnigmaMachine::from_settings(&["I", "II", "III"], &['A', 'D', 'U'], &['A'; 3], &[], "B")
//!         .unwrap();
//! let windows: Vec<String> = (0..4)
//!     .map(|_| {
//!         machine.press_key('A').unwrap();
//!         machine.window().iter().collect()
//!     })
//!     .collect();
//! assert_eq!(windows, ["ADV", "AEW", "BFX", "BFY"]);
//! ```

#![deny(clippy::all)]

pub mod catalog;
pub mod error;
pub mod machine;
pub mod plugboard;
pub mod reflector;
pub mod rotor;
pub mod utils;

pub use catalog::{ReflectorId, RotorId};
pub use error::EnigmaError;
pub use machine::{EnigmaMachine, MachineConfig, RotorSpec, SignalTrace};
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;
