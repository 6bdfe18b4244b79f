//! Error types for the Enigma library.

use thiserror::Error;

/// Broad classification of an [`EnigmaError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A machine setting (rotor, key, plug pair) was malformed.
    InvalidConfiguration,
    /// A letter or message handed to an encoding call was malformed.
    InvalidInput,
}

/// Errors produced by the Enigma library.
///
/// Every error is raised at the call that caused it, before any machine
/// state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// Rotor identifier is not one of the supported wirings.
    #[error("Please select I, II, III, or V for your rotor number (got {0:?})")]
    UnknownRotor(String),
    /// Window setting is not a single letter A-Z.
    #[error("Window setting must be a single letter A-Z (got {0:?})")]
    InvalidWindow(String),
    /// Key is not exactly three letters.
    #[error("Key must be exactly 3 letters A-Z (got {0:?})")]
    InvalidKey(String),
    /// Rotor order does not name exactly three rotors.
    #[error("Rotor order must name exactly 3 rotors (got {0})")]
    InvalidRotorCount(usize),
    /// Plug pair is not two distinct letters.
    #[error("Plug pair must be two distinct letters A-Z (got {0:?})")]
    InvalidPlugPair(String),
    /// Plug pair reuses a letter that is already plugged.
    #[error("Letter {0} is already plugged to another letter")]
    PlugConflict(char),
    /// More than six plug pairs were requested at construction.
    #[error("Plugboard holds at most 6 pairs (got {0})")]
    TooManyPlugPairs(usize),
    /// Letter input is not exactly one alphabetic character.
    #[error("Input must be a single letter A-Z (got {0:?})")]
    InvalidLetter(String),
    /// Contact index is outside `0..26`.
    #[error("Contact index must be between 0 and 25 (got {0})")]
    InvalidContact(usize),
    /// Message holds a character other than letters and spaces.
    #[error("Message may only contain letters and spaces (found {0:?})")]
    InvalidMessage(char),
}

impl EnigmaError {
    /// Returns whether this error rejects a setting or an input.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EnigmaError::UnknownRotor(_)
            | EnigmaError::InvalidWindow(_)
            | EnigmaError::InvalidKey(_)
            | EnigmaError::InvalidRotorCount(_)
            | EnigmaError::InvalidPlugPair(_)
            | EnigmaError::PlugConflict(_)
            | EnigmaError::TooManyPlugPairs(_) => ErrorKind::InvalidConfiguration,
            EnigmaError::InvalidLetter(_)
            | EnigmaError::InvalidContact(_)
            | EnigmaError::InvalidMessage(_) => ErrorKind::InvalidInput,
        }
    }
}
