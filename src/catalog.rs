//! Historical wiring catalog for the Enigma I rotor set.
//!
//! Static lookup data only: the wiring tables and notch positions of the
//! standard rotors and reflectors, and constructors building components
//! from them. Nothing here is computed.

use crate::error::{EnigmaError, Result};
use crate::signal::{Reflector, Rotor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Standard rotor types of the Enigma I.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotorType {
    I,
    II,
    III,
    IV,
    V,
}

impl RotorType {
    /// Forward wiring table, entry side in A–Z order.
    pub fn wiring(self) -> &'static str {
        match self {
            Self::I => "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
            Self::II => "AJDKSIRUXBLHWTMCQGZNPYFVOE",
            Self::III => "BDFHJLCPRTXVZNYEIWGAKMUSQO",
            Self::IV => "ESOVPZJAYQUIRHXLNFTGKDCMBW",
            Self::V => "VZBRGITYUPSDNHLXAWMJQOFECK",
        }
    }

    /// Turnover notch index.
    pub fn notch(self) -> usize {
        match self {
            Self::I => 16,    // Q
            Self::II => 4,    // E
            Self::III => 21,  // V
            Self::IV => 9,    // J
            Self::V => 25,    // Z
        }
    }

    /// Build a rotor of this type at position 0, ring setting 0.
    pub fn rotor(self) -> Result<Rotor> {
        Rotor::new(self.wiring(), self.notch())
    }
}

impl fmt::Display for RotorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
            Self::IV => "IV",
            Self::V => "V",
        };
        f.write_str(name)
    }
}

impl FromStr for RotorType {
    type Err = EnigmaError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "I" => Ok(Self::I),
            "II" => Ok(Self::II),
            "III" => Ok(Self::III),
            "IV" => Ok(Self::IV),
            "V" => Ok(Self::V),
            _ => Err(EnigmaError::UnknownRotor(s.to_string())),
        }
    }
}

/// Standard reflector types of the Enigma I.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReflectorType {
    A,
    B,
    C,
}

impl ReflectorType {
    /// Reflector wiring table, entry side in A–Z order.
    pub fn wiring(self) -> &'static str {
        match self {
            Self::A => "EJMZALYXVBWFCRQUONTSPIKHGD",
            Self::B => "YRUHQSLDPXNGOKMIEBFZCWVJAT",
            Self::C => "FVPJIAOYEDRZXWGCTKUQSBNMHL",
        }
    }

    /// Build a reflector of this type.
    pub fn reflector(self) -> Result<Reflector> {
        Reflector::new(self.wiring())
    }
}

impl fmt::Display for ReflectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        };
        f.write_str(name)
    }
}

impl FromStr for ReflectorType {
    type Err = EnigmaError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            _ => Err(EnigmaError::UnknownReflector(s.to_string())),
        }
    }
}
