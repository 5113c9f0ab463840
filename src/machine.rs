//! EnigmaMachine: three rotors, a plugboard and a reflector wired in series.
//!
//! Orchestrates the stepping mechanism (including the double-step of the
//! middle rotor) and the full signal path of a keypress:
//!
//! ```text
//! key → plugboard → R → M → L → reflector
//!                                   ↓
//! lamp ← plugboard ← R ← M ← L ←────┘
//! ```

use std::fmt;

use log::{debug, trace};

use crate::catalog::{ReflectorId, RotorId};
use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::utils::alphabet::{index_to_letter, letter_to_index};

/// Number of rotors in the machine.
pub const NUM_ROTORS: usize = 3;

const LEFT: usize = 0;
const MIDDLE: usize = 1;
const RIGHT: usize = 2;

/// Number of substitution stages a signal passes through per keypress.
pub const NUM_STAGES: usize = 9;

/// Stage names, in signal order, matching [`SignalTrace::stages`].
pub const STAGE_NAMES: [&str; NUM_STAGES] = [
    "plugboard",
    "right rotor",
    "middle rotor",
    "left rotor",
    "reflector",
    "left rotor",
    "middle rotor",
    "right rotor",
    "plugboard",
];

/// One rotor slot of a [`MachineConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotorSpec {
    /// Catalog identity, e.g. `"III"`.
    pub rotor: String,
    /// Starting window letter.
    pub position: char,
    /// Ring setting letter.
    pub ring: char,
}

impl RotorSpec {
    pub fn new(rotor: &str, position: char, ring: char) -> Self {
        RotorSpec {
            rotor: rotor.to_string(),
            position,
            ring,
        }
    }
}

/// Complete key for a machine: rotor order with windows and rings, plug
/// pairs and reflector.
///
/// Rotors are listed left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MachineConfig {
    pub rotors: Vec<RotorSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub plugboard: Vec<(char, char)>,
    pub reflector: String,
}

impl Default for MachineConfig {
    /// Rotors I, II, III at window A with ring A, no plugs, reflector B.
    fn default() -> Self {
        MachineConfig {
            rotors: vec![
                RotorSpec::new("I", 'A', 'A'),
                RotorSpec::new("II", 'A', 'A'),
                RotorSpec::new("III", 'A', 'A'),
            ],
            plugboard: Vec::new(),
            reflector: ReflectorId::B.name().to_string(),
        }
    }
}

impl MachineConfig {
    /// Config with the given rotors, no plugs and reflector B.
    pub fn with_rotors(rotors: Vec<RotorSpec>) -> Self {
        MachineConfig {
            rotors,
            ..Self::default()
        }
    }

    pub fn with_plugboard(mut self, pairs: &[(char, char)]) -> Self {
        self.plugboard = pairs.to_vec();
        self
    }

    pub fn with_reflector(mut self, reflector: &str) -> Self {
        self.reflector = reflector.to_string();
        self
    }
}

/// Record of a single keypress through the circuit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalTrace {
    /// Key pressed.
    pub input: char,
    /// Rotor windows (left, middle, right) after stepping, as seen while the
    /// current flows.
    pub window: [char; NUM_ROTORS],
    /// Letter leaving each stage, in the order of [`STAGE_NAMES`].
    pub stages: [char; NUM_STAGES],
}

impl SignalTrace {
    /// Lamp that lights up.
    pub fn output(&self) -> char {
        self.stages[NUM_STAGES - 1]
    }
}

impl fmt::Display for SignalTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [l, m, r] = self.window;
        write!(f, "[{}{}{}] {}", l, m, r, self.input)?;
        for letter in self.stages {
            write!(f, " > {}", letter)?;
        }
        Ok(())
    }
}

/// Three-rotor Enigma machine.
///
/// Rotor positions advance on every enciphered letter; everything else is
/// fixed at construction. Enciphering is its own inverse, so decrypting is
/// a [`reset`](Self::reset) to the starting windows followed by
/// [`encrypt`](Self::encrypt).
///
/// A machine is a single mutable state; callers enciphering in parallel
/// should give each thread its own machine.
#[derive(Debug, Clone)]
pub struct EnigmaMachine {
    rotors: [Rotor; NUM_ROTORS],
    plugboard: Plugboard,
    reflector: Reflector,
}

impl Default for EnigmaMachine {
    fn default() -> Self {
        EnigmaMachine::from_components(
            [
                Rotor::at_rest(RotorId::I),
                Rotor::at_rest(RotorId::II),
                Rotor::at_rest(RotorId::III),
            ],
            Plugboard::default(),
            Reflector::new(ReflectorId::B),
        )
    }
}

impl EnigmaMachine {
    /// Assembles a machine from a configuration.
    ///
    /// # Errors
    /// - [`EnigmaError::WrongRotorCount`] unless exactly three rotors are given.
    /// - [`EnigmaError::UnknownRotor`] / [`EnigmaError::UnknownReflector`] for
    ///   identities outside the catalog.
    /// - [`EnigmaError::InvalidLetter`] for a window or ring that is not A–Z.
    /// - Plugboard errors, see [`Plugboard::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{EnigmaMachine, MachineConfig, RotorSpec};
    ///
    /// let config = MachineConfig::with_rotors(vec![
    ///     RotorSpec::new("I", 'A', 'A'),
    ///     RotorSpec::new("II", 'A', 'A'),
    ///     RotorSpec::new("III", 'A', 'A'),
    /// ]);
    /// let mut machine = EnigmaMachine::new(&config).unwrap();
    /// assert_eq!(machine.encrypt("HELLO WORLD"), "ILBDA AMTAZ");
    ///
    /// let too_few = MachineConfig::with_rotors(vec![RotorSpec::new("I", 'A', 'A')]);
    /// assert!(EnigmaMachine::new(&too_few).is_err());
    /// ```
    pub fn new(config: &MachineConfig) -> Result<Self, EnigmaError> {
        if config.rotors.len() != NUM_ROTORS {
            return Err(EnigmaError::WrongRotorCount(config.rotors.len()));
        }

        let rotors = config
            .rotors
            .iter()
            .map(|spec| Rotor::new(spec.rotor.parse::<RotorId>()?, spec.position, spec.ring))
            .collect::<Result<Vec<_>, _>>()?;
        let rotors = <[Rotor; NUM_ROTORS]>::try_from(rotors)
            .map_err(|v| EnigmaError::WrongRotorCount(v.len()))?;
        let reflector = Reflector::new(config.reflector.parse::<ReflectorId>()?);
        let plugboard = Plugboard::new(&config.plugboard)?;

        Ok(Self::from_components(rotors, plugboard, reflector))
    }

    /// Assembles a machine from per-rotor setting lists, left to right.
    ///
    /// Each of `rotor_names`, `positions` and `rings` must hold three entries.
    ///
    /// # Errors
    /// As [`new`](Self::new); a list of the wrong length yields
    /// [`EnigmaError::WrongRotorCount`] with that list's length.
    pub fn from_settings(
        rotor_names: &[&str],
        positions: &[char],
        rings: &[char],
        plugboard: &[(char, char)],
        reflector: &str,
    ) -> Result<Self, EnigmaError> {
        for len in [rotor_names.len(), positions.len(), rings.len()] {
            if len != NUM_ROTORS {
                return Err(EnigmaError::WrongRotorCount(len));
            }
        }
        let rotors = rotor_names
            .iter()
            .zip(positions)
            .zip(rings)
            .map(|((name, &position), &ring)| RotorSpec::new(name, position, ring))
            .collect();
        let config = MachineConfig::with_rotors(rotors)
            .with_plugboard(plugboard)
            .with_reflector(reflector);
        Self::new(&config)
    }

    /// Assembles a machine from already-built parts, rotors left to right.
    pub fn from_components(
        rotors: [Rotor; NUM_ROTORS],
        plugboard: Plugboard,
        reflector: Reflector,
    ) -> Self {
        debug!(
            "assembled machine: rotors {}-{}-{}, reflector {}, {} plug(s)",
            rotors[LEFT].label(),
            rotors[MIDDLE].label(),
            rotors[RIGHT].label(),
            reflector.label(),
            plugboard.len()
        );
        EnigmaMachine {
            rotors,
            plugboard,
            reflector,
        }
    }

    /// Enciphers `text`. The same call deciphers when started from the same
    /// windows.
    ///
    /// Input is uppercased. Letters A–Z each step the rotors and are
    /// substituted; every other character is copied through without stepping.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::EnigmaMachine;
    ///
    /// let mut machine = EnigmaMachine::default();
    /// let ciphertext = machine.encrypt("attack at dawn");
    ///
    /// machine.reset(['A', 'A', 'A']).unwrap();
    /// assert_eq!(machine.encrypt(&ciphertext), "ATTACK AT DAWN");
    /// ```
    pub fn encrypt(&mut self, text: &str) -> String {
        let mut output = String::with_capacity(text.len());
        for c in text.chars().flat_map(char::to_uppercase) {
            match letter_to_index(c) {
                Ok(signal) => output.push(index_to_letter(self.encipher(signal))),
                Err(_) => output.push(c),
            }
        }
        output
    }

    /// Same operation as [`encrypt`](Self::encrypt).
    pub fn decrypt(&mut self, text: &str) -> String {
        self.encrypt(text)
    }

    /// Presses a single key and returns the lamp that lights.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidLetter`] if `key` is not A–Z; the rotors
    /// do not move in that case.
    pub fn press_key(&mut self, key: char) -> Result<char, EnigmaError> {
        let signal = letter_to_index(key)?;
        Ok(index_to_letter(self.encipher(signal)))
    }

    /// Presses a single key and records the letter after every stage.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidLetter`] if `key` is not A–Z; the rotors
    /// do not move in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::EnigmaMachine;
    ///
    /// let mut machine = EnigmaMachine::default();
    /// let trace = machine.trace_key('A').unwrap();
    /// assert_eq!(trace.window, ['A', 'A', 'B']);
    /// assert_eq!(trace.output(), 'B');
    /// ```
    pub fn trace_key(&mut self, key: char) -> Result<SignalTrace, EnigmaError> {
        let signal = letter_to_index(key)?;
        self.step_rotors();
        let stages = self.route(signal).map(index_to_letter);
        Ok(SignalTrace {
            input: index_to_letter(signal),
            window: self.window(),
            stages,
        })
    }

    /// Sets the rotor windows (left, middle, right). Rings, wiring, plugboard
    /// and reflector are left as they are.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidLetter`] if any letter is not A–Z; no
    /// rotor moves in that case.
    pub fn reset(&mut self, positions: [char; NUM_ROTORS]) -> Result<(), EnigmaError> {
        let mut indices = [0usize; NUM_ROTORS];
        for (slot, &c) in indices.iter_mut().zip(positions.iter()) {
            *slot = letter_to_index(c)?;
        }
        for (rotor, &idx) in self.rotors.iter_mut().zip(indices.iter()) {
            rotor.set_position(idx);
        }
        debug!("rotor windows reset to {}", self.window_string());
        Ok(())
    }

    /// Letters currently visible in the windows, left to right.
    pub fn window(&self) -> [char; NUM_ROTORS] {
        [
            self.rotors[LEFT].window(),
            self.rotors[MIDDLE].window(),
            self.rotors[RIGHT].window(),
        ]
    }

    /// Rotors, left to right.
    pub fn rotors(&self) -> &[Rotor; NUM_ROTORS] {
        &self.rotors
    }

    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    // ──────── Keypress ────────

    /// One keypress for a letter index: step, then route.
    fn encipher(&mut self, signal: usize) -> usize {
        self.step_rotors();
        self.route(signal)[NUM_STAGES - 1]
    }

    /// Advances the rotors as a keypress does, before current flows.
    ///
    /// Both notch checks read the positions from before this keypress. A
    /// middle rotor sitting on its notch steps itself and the left rotor
    /// (the double-step); otherwise a right rotor on its notch carries the
    /// middle rotor. The right rotor always steps.
    fn step_rotors(&mut self) {
        let middle_at_notch = self.rotors[MIDDLE].is_at_notch();
        let right_at_notch = self.rotors[RIGHT].is_at_notch();
        let before = self.window();

        if middle_at_notch {
            self.rotors[MIDDLE].step();
            self.rotors[LEFT].step();
            debug!(
                "double-step at {}: middle and left rotors advance",
                before.iter().collect::<String>()
            );
        } else if right_at_notch {
            self.rotors[MIDDLE].step();
        }
        self.rotors[RIGHT].step();

        trace!(
            "keypress: windows {} -> {}",
            before.iter().collect::<String>(),
            self.window_string()
        );
    }

    /// Signal path for the current rotor positions. Returns the index leaving
    /// each stage; the last entry is the lamp.
    fn route(&self, signal: usize) -> [usize; NUM_STAGES] {
        let mut stages = [0usize; NUM_STAGES];
        let mut x = self.plugboard.swap(signal);
        stages[0] = x;

        for (slot, rotor) in stages[1..4].iter_mut().zip(self.rotors.iter().rev()) {
            x = rotor.forward(x);
            *slot = x;
        }

        x = self.reflector.reflect(x);
        stages[4] = x;

        for (slot, rotor) in stages[5..8].iter_mut().zip(self.rotors.iter()) {
            x = rotor.backward(x);
            *slot = x;
        }

        stages[8] = self.plugboard.swap(x);
        stages
    }

    fn window_string(&self) -> String {
        self.window().iter().collect()
    }
}

impl Drop for EnigmaMachine {
    /// Clears the key settings on drop.
    fn drop(&mut self) {
        for rotor in self.rotors.iter_mut() {
            rotor.clear();
        }
        self.plugboard.clear();
    }
}
