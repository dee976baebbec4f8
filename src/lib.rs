//! Enigma - Three-Rotor Electromechanical Cipher Machine
//!
//! Reproduces the signal path of a three-rotor Enigma: a reciprocal
//! substitution cipher whose substitution alphabet changes after every
//! character via a mechanical stepping mechanism.
//!
//! ## Signal Path
//!
//! Every key press first advances the rotors, then the signal crosses six
//! substitution stages:
//!
//! ```text
//! Input → Plugboard → Right → Middle → Left → Reflector → Left → Middle → Right → Plugboard → Output
//! ```
//!
//! - **Plugboard**: symmetric letter swaps, applied on entry and exit
//! - **Rotors**: wired permutations read through a position/ring offset,
//!   right-to-left on the way in, left-to-right on the way back
//! - **Reflector**: a fixed wiring that turns the signal around
//!
//! The right rotor advances on every key press; a rotor arriving on its
//! notch carries its neighbours, producing the double-step anomaly where
//! the middle rotor moves on two consecutive key presses.
//!
//! Because the reflector sends each signal back through an inverse pass of
//! the same wirings, encryption and decryption are the same operation:
//! feeding ciphertext to a machine reset to the starting state reproduces
//! the plaintext.
//!
//! ## Example
//!
//! ```
//! use enigma::MachineSettings;
//!
//! let settings = MachineSettings {
//!     positions: [0, 1, 2],
//!     ..Default::default()
//! };
//!
//! let mut encoder = settings.build().unwrap();
//! let ciphertext = encoder.encrypt("HELLO ENIGMA");
//! assert_eq!(ciphertext, "ROMUL XYRXKH");
//!
//! let mut decoder = settings.build().unwrap();
//! assert_eq!(decoder.encrypt(&ciphertext), "HELLO ENIGMA");
//! ```

pub mod alphabet;
pub mod catalog;
pub mod error;
pub mod machine;
pub mod settings;
pub mod signal;

pub use catalog::{ReflectorType, RotorType};
pub use error::{EnigmaError, Result};
pub use machine::{Machine, MachineState, ROTOR_COUNT};
pub use settings::MachineSettings;
pub use signal::{Direction, Plugboard, Reflector, Rotor, Wiring};
