//! Rotating wired wheels and the position/ring offset transform.

use super::wiring::Wiring;
use crate::alphabet::ALPHABET_SIZE;
use crate::error::Result;

/// Travel direction of a signal through a rotor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Entering from the plugboard side, toward the reflector.
    Forward,
    /// Returning from the reflector, toward the plugboard.
    Backward,
}

/// A rotor: a wired permutation read through a rotational offset, plus the
/// notch that triggers the neighbouring rotor's advance.
///
/// `position` and `ring_setting` are always kept in `0..=25`; every setter
/// reduces its argument modulo 26.
#[derive(Debug, Clone)]
pub struct Rotor {
    wiring: Wiring,
    position: usize,
    ring_setting: usize,
    notch: usize,
}

impl Rotor {
    /// Build a rotor from a 26-letter wiring table and a notch index.
    ///
    /// Starts at position 0 with ring setting 0.
    ///
    /// # Errors
    /// Fails if `table` is not a 26-letter permutation of the alphabet.
    pub fn new(table: &str, notch: usize) -> Result<Self> {
        Ok(Self {
            wiring: Wiring::parse(table)?,
            position: 0,
            ring_setting: 0,
            notch: notch % ALPHABET_SIZE,
        })
    }

    /// Current rotational position in `0..=25`.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Set the rotational position, reduced modulo 26.
    pub fn set_position(&mut self, position: usize) {
        self.position = position % ALPHABET_SIZE;
    }

    /// Current ring setting in `0..=25`.
    pub fn ring_setting(&self) -> usize {
        self.ring_setting
    }

    /// Set the ring setting, reduced modulo 26. Fixed at configuration
    /// time; constant during message processing.
    pub fn set_ring_setting(&mut self, ring_setting: usize) {
        self.ring_setting = ring_setting % ALPHABET_SIZE;
    }

    /// Notch index in `0..=25`.
    pub fn notch(&self) -> usize {
        self.notch
    }

    /// Move the notch, reduced modulo 26.
    pub fn set_notch(&mut self, notch: usize) {
        self.notch = notch % ALPHABET_SIZE;
    }

    /// Advance one position, wrapping from 25 back to 0. The only way the
    /// position moves during message processing.
    pub fn rotate(&mut self) {
        self.position = (self.position + 1) % ALPHABET_SIZE;
    }

    /// True iff the rotor currently sits on its notch.
    pub fn is_at_notch(&self) -> bool {
        self.position == self.notch
    }

    /// Contact offset between the wiring and the fixed entry plate,
    /// normalized to `0..=25`.
    fn offset(&self) -> usize {
        (ALPHABET_SIZE + self.position - self.ring_setting) % ALPHABET_SIZE
    }

    /// Pass a signal through the rotor: shift it into the rotated wiring
    /// frame, substitute, shift back out to absolute contact space.
    ///
    /// The offset wrap is identical in both directions; only the
    /// permutation table differs, so the backward pass is the exact
    /// inverse of the forward pass at any fixed position.
    pub fn process(&self, signal: usize, direction: Direction) -> usize {
        let offset = self.offset();
        let entry = (signal + offset) % ALPHABET_SIZE;
        let wired = match direction {
            Direction::Forward => self.wiring.map(entry),
            Direction::Backward => self.wiring.map_inverse(entry),
        };
        (ALPHABET_SIZE + wired - offset) % ALPHABET_SIZE
    }
}
