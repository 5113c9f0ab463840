//! Alphabet arithmetic shared by the substitution components.

pub mod alphabet;
