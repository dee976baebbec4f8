//! Signal-path components: everything a key press travels through.
//!
//! A signal enters as a `0..=25` contact index, crosses the plugboard,
//! the three rotors, the reflector, the rotors again in reverse, and the
//! plugboard once more. The char codec lives in [`crate::alphabet`]; the
//! components here work on indices only.

pub mod plugboard;
pub mod reflector;
pub mod rotor;
pub mod wiring;

pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::{Direction, Rotor};
pub use wiring::Wiring;
