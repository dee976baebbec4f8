//! Fixed reflectors: one-way wired components.

use super::wiring::Wiring;
use crate::error::Result;

/// A reflector: a fixed, non-rotating wiring that turns the signal back
/// toward the rotors. Defined in one direction only: there is no inverse
/// pass and no notch. Historical reflector wirings are involutions, but
/// nothing here relies on that.
#[derive(Debug, Clone)]
pub struct Reflector {
    wiring: Wiring,
}

impl Reflector {
    /// Build a reflector from a 26-letter wiring table.
    ///
    /// # Errors
    /// Fails if `table` is not a 26-letter permutation of the alphabet.
    pub fn new(table: &str) -> Result<Self> {
        Ok(Self {
            wiring: Wiring::parse(table)?,
        })
    }

    /// Reflect a signal back toward the rotors.
    pub fn process(&self, signal: usize) -> usize {
        self.wiring.map(signal)
    }
}
