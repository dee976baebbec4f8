//! The plugboard: a symmetric partial pairing over the 26 letters.

use crate::alphabet::{self, ALPHABET_SIZE};
use crate::error::{EnigmaError, Result};

/// Cable connections swapping letters before and after the rotor pass.
///
/// Each letter has at most one partner and every pairing is symmetric:
/// connecting `A` to `B` also routes `B` to `A`. Unpaired letters pass
/// through unchanged. At most 13 disjoint pairs fit on the board.
#[derive(Debug, Clone, Default)]
pub struct Plugboard {
    partner: [Option<usize>; ALPHABET_SIZE],
    pairs: Vec<(char, char)>,
}

impl Plugboard {
    /// An empty board: every letter passes through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from a batch of letter pairs. All-or-nothing: any
    /// invalid pair fails the whole batch and no board is produced.
    pub fn from_pairs(pairs: &[(char, char)]) -> Result<Self> {
        let mut board = Self::new();
        for &(a, b) in pairs {
            board.connect(a, b)?;
        }
        Ok(board)
    }

    /// Wire two letters together (case-insensitive).
    ///
    /// # Errors
    /// - [`EnigmaError::NonAlphabetic`] for non-letter input.
    /// - [`EnigmaError::SelfConnection`] if `a` and `b` are the same letter.
    /// - [`EnigmaError::AlreadyConnected`] if either letter has a partner.
    ///
    /// On failure the existing pairings are left untouched.
    pub fn connect(&mut self, a: char, b: char) -> Result<()> {
        let first = alphabet::to_index(a).ok_or(EnigmaError::NonAlphabetic(a))?;
        let second = alphabet::to_index(b).ok_or(EnigmaError::NonAlphabetic(b))?;
        if first == second {
            return Err(EnigmaError::SelfConnection(alphabet::to_letter(first)));
        }
        if self.partner[first].is_some() {
            return Err(EnigmaError::AlreadyConnected(alphabet::to_letter(first)));
        }
        if self.partner[second].is_some() {
            return Err(EnigmaError::AlreadyConnected(alphabet::to_letter(second)));
        }

        self.partner[first] = Some(second);
        self.partner[second] = Some(first);
        self.pairs
            .push((alphabet::to_letter(first), alphabet::to_letter(second)));
        Ok(())
    }

    /// Remove every pair. Used before bulk reconfiguration, never
    /// mid-message.
    pub fn clear(&mut self) {
        self.partner = [None; ALPHABET_SIZE];
        self.pairs.clear();
    }

    /// Substitute one letter: the paired letter if a cable is present,
    /// otherwise the input itself, case-normalized to uppercase.
    /// Non-alphabetic input is returned unchanged.
    pub fn process(&self, letter: char) -> char {
        match alphabet::to_index(letter) {
            Some(signal) => alphabet::to_letter(self.lookup(signal)),
            None => letter,
        }
    }

    /// Index-level substitution used by the machine's signal path.
    pub(crate) fn lookup(&self, signal: usize) -> usize {
        let signal = signal % ALPHABET_SIZE;
        self.partner[signal].unwrap_or(signal)
    }

    /// The connected pairs, each reported exactly once, in the order they
    /// were wired. Diagnostics only.
    pub fn connections(&self) -> &[(char, char)] {
        &self.pairs
    }
}
