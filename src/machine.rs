//! The machine: three rotors, a reflector, a plugboard, and the stepping
//! mechanism that drives them.

use crate::alphabet;
use crate::error::{EnigmaError, Result};
use crate::signal::{Direction, Plugboard, Reflector, Rotor};
use std::fmt;

/// Number of rotors in the modeled machine.
pub const ROTOR_COUNT: usize = 3;

/// A complete three-rotor machine.
///
/// Rotors are ordered left, middle, right; the signal enters on the right.
/// The machine's configuration (rotor choice and order, positions, ring
/// settings, plugboard pairs, reflector) is the cryptographic key; the
/// position state advances deterministically as characters are processed.
#[derive(Debug, Clone)]
pub struct Machine {
    rotors: [Rotor; ROTOR_COUNT],
    reflector: Reflector,
    plugboard: Plugboard,
}

impl Machine {
    /// Build a machine from exactly three rotors (ordered left, middle,
    /// right) and a reflector. The plugboard starts empty.
    ///
    /// # Errors
    /// [`EnigmaError::RotorCount`] unless exactly 3 rotors are supplied.
    pub fn new(rotors: Vec<Rotor>, reflector: Reflector) -> Result<Self> {
        let rotors: [Rotor; ROTOR_COUNT] = rotors
            .try_into()
            .map_err(|extra: Vec<Rotor>| EnigmaError::RotorCount(extra.len()))?;
        Ok(Self {
            rotors,
            reflector,
            plugboard: Plugboard::new(),
        })
    }

    /// Advance the rotor positions for one key press.
    ///
    /// The right rotor always moves. Its turnover is read after its own
    /// advance; the middle rotor's notch is read before the middle moves.
    /// Either engaged notch carries the middle and left rotors together,
    /// which is what produces the double-step: a middle rotor carried onto
    /// its notch advances again on the very next key press.
    fn step(&mut self) {
        let [left, middle, right] = &mut self.rotors;
        right.rotate();
        let turn_middle = right.is_at_notch();
        let turn_left = middle.is_at_notch();
        if turn_middle || turn_left {
            middle.rotate();
            left.rotate();
        }
    }

    /// The six-stage signal path for one key press: step, then
    /// plugboard → right → middle → left → reflector → left → middle →
    /// right → plugboard.
    fn scramble(&mut self, signal: usize) -> usize {
        self.step();
        let mut s = self.plugboard.lookup(signal);
        let [left, middle, right] = &self.rotors;
        s = right.process(s, Direction::Forward);
        s = middle.process(s, Direction::Forward);
        s = left.process(s, Direction::Forward);
        s = self.reflector.process(s);
        s = left.process(s, Direction::Backward);
        s = middle.process(s, Direction::Backward);
        s = right.process(s, Direction::Backward);
        self.plugboard.lookup(s)
    }

    /// Encrypt (or decrypt, the operation is its own inverse for equal
    /// starting state) a single letter, advancing the rotors first.
    /// Output is uppercase.
    ///
    /// # Errors
    /// [`EnigmaError::NonAlphabetic`] for non-letter input; rotor state is
    /// not advanced in that case.
    pub fn encrypt_char(&mut self, letter: char) -> Result<char> {
        let signal = alphabet::to_index(letter).ok_or(EnigmaError::NonAlphabetic(letter))?;
        Ok(alphabet::to_letter(self.scramble(signal)))
    }

    /// Encrypt (or decrypt) a whole message, character by character in
    /// sequence order. Alphabetic characters are substituted and
    /// uppercased; everything else passes through unchanged without
    /// advancing the rotors.
    pub fn encrypt(&mut self, message: &str) -> String {
        message
            .chars()
            .map(|c| match alphabet::to_index(c) {
                Some(signal) => alphabet::to_letter(self.scramble(signal)),
                None => c,
            })
            .collect()
    }

    /// Set the three rotor positions (left, middle, right), each reduced
    /// modulo 26.
    pub fn set_rotor_positions(&mut self, left: usize, middle: usize, right: usize) {
        self.rotors[0].set_position(left);
        self.rotors[1].set_position(middle);
        self.rotors[2].set_position(right);
    }

    /// Set the three ring settings (left, middle, right), each reduced
    /// modulo 26.
    pub fn set_ring_settings(&mut self, left: usize, middle: usize, right: usize) {
        self.rotors[0].set_ring_setting(left);
        self.rotors[1].set_ring_setting(middle);
        self.rotors[2].set_ring_setting(right);
    }

    /// Replace the plugboard with one built from `pairs`, wholesale. On
    /// any invalid pair the current plugboard is kept unchanged.
    pub fn set_plugboard_connections(&mut self, pairs: &[(char, char)]) -> Result<()> {
        self.plugboard = Plugboard::from_pairs(pairs)?;
        Ok(())
    }

    /// Current rotor positions (left, middle, right).
    pub fn rotor_positions(&self) -> [usize; ROTOR_COUNT] {
        [
            self.rotors[0].position(),
            self.rotors[1].position(),
            self.rotors[2].position(),
        ]
    }

    /// The plugboard, for diagnostics.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Diagnostic snapshot of the mutable state: rotor positions and
    /// plugboard pairs.
    pub fn state(&self) -> MachineState {
        MachineState {
            positions: self.rotor_positions(),
            plugboard: self.plugboard.connections().to_vec(),
        }
    }
}

/// Snapshot of a machine's mutable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineState {
    /// Rotor positions, ordered left, middle, right.
    pub positions: [usize; ROTOR_COUNT],
    /// Plugboard pairs in wiring order.
    pub plugboard: Vec<(char, char)>,
}

impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Positions: ")?;
        for &position in &self.positions {
            write!(f, "{}", alphabet::to_letter(position))?;
        }
        write!(f, " Plugboard:")?;
        if self.plugboard.is_empty() {
            write!(f, " (none)")?;
        }
        for (a, b) in &self.plugboard {
            write!(f, " {a}{b}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ReflectorType, RotorType};

    fn machine(left: RotorType, middle: RotorType, right: RotorType) -> Machine {
        let rotors = vec![
            left.rotor().unwrap(),
            middle.rotor().unwrap(),
            right.rotor().unwrap(),
        ];
        Machine::new(rotors, ReflectorType::B.reflector().unwrap()).unwrap()
    }

    fn default_machine() -> Machine {
        machine(RotorType::I, RotorType::II, RotorType::III)
    }

    #[test]
    fn test_new_rejects_wrong_rotor_count() {
        let reflector = ReflectorType::B.reflector().unwrap();
        let err = Machine::new(vec![RotorType::I.rotor().unwrap()], reflector).unwrap_err();
        assert!(matches!(err, EnigmaError::RotorCount(1)));

        let reflector = ReflectorType::B.reflector().unwrap();
        let four: Vec<_> = (0..4).map(|_| RotorType::I.rotor().unwrap()).collect();
        let err = Machine::new(four, reflector).unwrap_err();
        assert!(matches!(err, EnigmaError::RotorCount(4)));
    }

    #[test]
    fn test_right_rotor_steps_every_keystroke() {
        let mut machine = default_machine();
        machine.encrypt_char('A').unwrap();
        assert_eq!(machine.rotor_positions(), [0, 0, 1]);
        machine.encrypt_char('A').unwrap();
        assert_eq!(machine.rotor_positions(), [0, 0, 2]);
    }

    #[test]
    fn test_double_step_moves_all_three_rotors() {
        // Rotor II's notch is at index 4 (E). With the middle rotor
        // sitting on it, one keystroke advances every rotor.
        let mut machine = default_machine();
        machine.set_rotor_positions(0, 4, 0);
        machine.encrypt_char('A').unwrap();
        assert_eq!(machine.rotor_positions(), [1, 5, 1]);
    }

    #[test]
    fn test_right_notch_carries_middle_and_left() {
        // Rotor III's notch is at index 21 (V): arriving there carries
        // the neighbours.
        let mut machine = default_machine();
        machine.set_rotor_positions(0, 0, 20);
        machine.encrypt_char('A').unwrap();
        assert_eq!(machine.rotor_positions(), [1, 1, 21]);
        machine.encrypt_char('A').unwrap();
        assert_eq!(machine.rotor_positions(), [1, 1, 22]);
    }

    #[test]
    fn test_stepping_trace() {
        let mut machine = default_machine();
        machine.set_rotor_positions(0, 0, 19);
        let mut trace = Vec::new();
        for _ in 0..5 {
            machine.encrypt_char('A').unwrap();
            trace.push(machine.rotor_positions());
        }
        assert_eq!(
            trace,
            [[0, 0, 20], [1, 1, 21], [1, 1, 22], [1, 1, 23], [1, 1, 24]]
        );
    }

    #[test]
    fn test_encrypt_char_rejects_non_alphabetic() {
        let mut machine = default_machine();
        let err = machine.encrypt_char('!').unwrap_err();
        assert!(matches!(err, EnigmaError::NonAlphabetic('!')));
        // Rotors did not move.
        assert_eq!(machine.rotor_positions(), [0, 0, 0]);
    }

    #[test]
    fn test_encrypt_passes_non_alphabetic_through() {
        let mut machine = default_machine();
        assert_eq!(machine.encrypt("HI, MOM!"), "IO, KMH!");

        // The punctuation did not advance the rotors: the same letters
        // alone encrypt identically.
        let mut machine = default_machine();
        assert_eq!(machine.encrypt("HIMOM"), "IOKMH");
    }

    #[test]
    fn test_encrypt_uppercases_input() {
        let mut lower = default_machine();
        let mut upper = default_machine();
        assert_eq!(lower.encrypt("hello"), upper.encrypt("HELLO"));
    }

    #[test]
    fn test_encrypt_is_reciprocal() {
        let mut machine = default_machine();
        machine.set_rotor_positions(0, 1, 2);
        let ciphertext = machine.encrypt("HELLOENIGMA");

        machine.set_rotor_positions(0, 1, 2);
        assert_eq!(machine.encrypt(&ciphertext), "HELLOENIGMA");
    }

    #[test]
    fn test_full_pass_may_have_fixed_points() {
        // Unlike the reflector wiring, the whole six-stage pass can map a
        // letter to itself; encrypt the alphabet at many positions and
        // require only that output stays in range.
        let mut machine = default_machine();
        for start in 0..26 {
            machine.set_rotor_positions(0, 0, start);
            for letter in 'A'..='Z' {
                let out = machine.encrypt_char(letter).unwrap();
                assert!(out.is_ascii_uppercase());
            }
        }
    }

    #[test]
    fn test_set_plugboard_connections_is_wholesale() {
        let mut machine = default_machine();
        machine
            .set_plugboard_connections(&[('A', 'B'), ('C', 'D')])
            .unwrap();
        assert_eq!(machine.plugboard().connections(), &[('A', 'B'), ('C', 'D')]);

        // A bad batch leaves the previous board in place.
        let err = machine
            .set_plugboard_connections(&[('E', 'F'), ('F', 'G')])
            .unwrap_err();
        assert!(matches!(err, EnigmaError::AlreadyConnected('F')));
        assert_eq!(machine.plugboard().connections(), &[('A', 'B'), ('C', 'D')]);

        // A fresh batch replaces, not extends.
        machine.set_plugboard_connections(&[('X', 'Z')]).unwrap();
        assert_eq!(machine.plugboard().connections(), &[('X', 'Z')]);
    }

    #[test]
    fn test_state_snapshot() {
        let mut machine = default_machine();
        machine.set_rotor_positions(0, 0, 20);
        machine.set_plugboard_connections(&[('A', 'B')]).unwrap();
        let state = machine.state();
        assert_eq!(state.positions, [0, 0, 20]);
        assert_eq!(state.plugboard, vec![('A', 'B')]);
        assert_eq!(state.to_string(), "Positions: AAU Plugboard: AB");
    }

    #[test]
    fn test_state_display_without_plugboard() {
        let machine = default_machine();
        assert_eq!(machine.state().to_string(), "Positions: AAA Plugboard: (none)");
    }

    #[test]
    fn test_setters_reduce_modulo_26() {
        let mut machine = default_machine();
        machine.set_rotor_positions(26, 27, 51);
        assert_eq!(machine.rotor_positions(), [0, 1, 25]);
    }
}
