//! Machine settings: the full cryptographic key for a session.

use crate::catalog::{ReflectorType, RotorType};
use crate::error::Result;
use crate::machine::{Machine, ROTOR_COUNT};
use serde::{Deserialize, Serialize};

/// The complete configuration of a machine: rotor choice and order,
/// reflector choice, starting positions, ring settings, and plugboard
/// pairs. This is the key material: two machines built from equal
/// settings produce identical ciphertext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSettings {
    /// Rotor types ordered left, middle, right.
    pub rotors: [RotorType; ROTOR_COUNT],
    /// Reflector type.
    pub reflector: ReflectorType,
    /// Starting rotor positions (left, middle, right), 0–25.
    pub positions: [usize; ROTOR_COUNT],
    /// Ring settings (left, middle, right), 0–25.
    pub ring_settings: [usize; ROTOR_COUNT],
    /// Plugboard letter pairs.
    #[serde(default)]
    pub plugboard: Vec<(char, char)>,
}

impl Default for MachineSettings {
    /// Rotors I/II/III, reflector B, all positions and ring settings at
    /// zero, empty plugboard.
    fn default() -> Self {
        Self {
            rotors: [RotorType::I, RotorType::II, RotorType::III],
            reflector: ReflectorType::B,
            positions: [0; ROTOR_COUNT],
            ring_settings: [0; ROTOR_COUNT],
            plugboard: Vec::new(),
        }
    }
}

impl MachineSettings {
    /// Build a machine in the configured starting state.
    pub fn build(&self) -> Result<Machine> {
        let rotors = self
            .rotors
            .iter()
            .map(|rotor_type| rotor_type.rotor())
            .collect::<Result<Vec<_>>>()?;
        let mut machine = Machine::new(rotors, self.reflector.reflector()?)?;
        machine.set_rotor_positions(self.positions[0], self.positions[1], self.positions[2]);
        machine.set_ring_settings(
            self.ring_settings[0],
            self.ring_settings[1],
            self.ring_settings[2],
        );
        machine.set_plugboard_connections(&self.plugboard)?;
        Ok(machine)
    }

    /// Serialize to JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Deserialize from JSON bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }
}
