//! Error types for the enigmacrypt library.

use std::fmt;

/// Errors produced by the enigmacrypt library.
///
/// All variants describe configuration or input problems detected before any
/// encoding takes place. Once a machine or crib has been constructed, the
/// per-keystroke operations are infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnigmaError {
    /// A character outside the A–Z alphabet was supplied.
    InvalidLetter,
    /// The rotor stack is not 3 wheels (M3) or 4 wheels (M4).
    InvalidRotorCount,
    /// The same rotor identity was mounted in two slots.
    DuplicateRotor,
    /// A thin wheel (Beta/Gamma) was mounted outside the leftmost slot of a
    /// 4-wheel stack, or a regular wheel was mounted in that slot.
    ThinWheelMisplaced,
    /// A thin reflector was paired with a 3-wheel stack, or a standard
    /// reflector with a 4-wheel stack.
    ReflectorMismatch,
    /// The number of ring settings or start positions does not match the
    /// number of mounted rotors.
    SettingsLengthMismatch,
    /// A ring setting is outside the valid range [0, 26).
    RingSettingOutOfRange,
    /// A start position is outside the valid range [0, 26).
    StartPositionOutOfRange,
    /// A plugboard pair connects a letter to itself.
    PlugboardSelfPair,
    /// A letter appears in more than one plugboard pair.
    PlugboardLetterReused,
    /// A crib word and its ciphertext fragment differ in length, are empty,
    /// or the word is longer than the ciphertext it is slid across.
    CribLengthMismatch,
    /// A crib position pairs a letter with itself, which the machine can
    /// never produce.
    CribSelfEncryption,
}

impl fmt::Display for EnigmaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnigmaError::InvalidLetter => {
                write!(f, "Character is not a letter in the A-Z alphabet")
            }
            EnigmaError::InvalidRotorCount => {
                write!(f, "Rotor stack must hold exactly 3 or 4 wheels")
            }
            EnigmaError::DuplicateRotor => {
                write!(f, "Each rotor identity can be mounted only once")
            }
            EnigmaError::ThinWheelMisplaced => {
                write!(
                    f,
                    "Thin wheels are only valid in the leftmost slot of a 4-wheel stack"
                )
            }
            EnigmaError::ReflectorMismatch => {
                write!(
                    f,
                    "Reflector class does not match the rotor count (thin reflectors pair with 4-wheel stacks)"
                )
            }
            EnigmaError::SettingsLengthMismatch => {
                write!(
                    f,
                    "Ring settings and start positions must match the number of mounted rotors"
                )
            }
            EnigmaError::RingSettingOutOfRange => {
                write!(f, "Ring setting is outside the valid range [0, 26)")
            }
            EnigmaError::StartPositionOutOfRange => {
                write!(f, "Start position is outside the valid range [0, 26)")
            }
            EnigmaError::PlugboardSelfPair => {
                write!(f, "A plugboard cable cannot connect a letter to itself")
            }
            EnigmaError::PlugboardLetterReused => {
                write!(f, "A letter can appear in at most one plugboard pair")
            }
            EnigmaError::CribLengthMismatch => {
                write!(
                    f,
                    "Crib word and ciphertext fragment must be non-empty and of compatible length"
                )
            }
            EnigmaError::CribSelfEncryption => {
                write!(f, "A crib position cannot pair a letter with itself")
            }
        }
    }
}

impl std::error::Error for EnigmaError {}
