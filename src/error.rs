use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnigmaError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Wiring must be exactly 26 letters, got {0}")]
    WiringLength(usize),

    #[error("Wiring maps two contacts to letter '{0}'")]
    DuplicateWiring(char),

    #[error("Non-alphabetic character: {0:?}")]
    NonAlphabetic(char),

    #[error("Machine requires exactly 3 rotors, got {0}")]
    RotorCount(usize),

    #[error("Letter '{0}' is already connected")]
    AlreadyConnected(char),

    #[error("Letter '{0}' cannot be connected to itself")]
    SelfConnection(char),

    #[error("Unknown rotor type: {0}")]
    UnknownRotor(String),

    #[error("Unknown reflector type: {0}")]
    UnknownReflector(String),
}

pub type Result<T> = std::result::Result<T, EnigmaError>;
