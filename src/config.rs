//! Machine configuration: the validated, immutable daily-key settings.
//!
//! A configuration names the mounted wheels (left to right), their ring
//! settings and start positions, the reflector, and the plugboard cables.
//! Every rule from the historical code-book setup is checked at
//! construction, so a constructed configuration can always be mounted.

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::wiring::{ReflectorId, RotorId};

/// A validated machine configuration.
///
/// 3-wheel stacks (Enigma I / M3) take wheels I–VIII and a standard
/// reflector. 4-wheel stacks (M4) additionally mount Beta or Gamma in the
/// leftmost slot and pair with a thin reflector.
///
/// # Examples
///
/// ```
/// use enigmacrypt::{EnigmaConfig, Plugboard, ReflectorId, RotorId};
///
/// let config = EnigmaConfig::new(
///     &[RotorId::I, RotorId::II, RotorId::III],
///     &[0, 0, 0],
///     &[0, 0, 0],
///     ReflectorId::UkwB,
///     Plugboard::empty(),
/// )
/// .unwrap();
/// assert_eq!(config.rotors().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnigmaConfig {
    rotors: Vec<RotorId>,
    rings: Vec<u8>,
    starts: Vec<u8>,
    reflector: ReflectorId,
    plugboard: Plugboard,
}

impl EnigmaConfig {
    /// Creates a configuration from numeric ring settings and start
    /// positions (0 ≙ A … 25 ≙ Z).
    ///
    /// # Parameters
    /// - `rotors`: Mounted wheels, left to right (3 or 4 of them).
    /// - `rings`: Ring setting per wheel, same order.
    /// - `starts`: Start position per wheel, same order.
    /// - `reflector`: Reflector identity matching the stack size.
    /// - `plugboard`: Validated plugboard.
    ///
    /// # Errors
    /// Returns the first violated rule as an [`EnigmaError`]; see the error
    /// type for the full taxonomy.
    pub fn new(
        rotors: &[RotorId],
        rings: &[u8],
        starts: &[u8],
        reflector: ReflectorId,
        plugboard: Plugboard,
    ) -> Result<EnigmaConfig, EnigmaError> {
        if rotors.len() != 3 && rotors.len() != 4 {
            return Err(EnigmaError::InvalidRotorCount);
        }
        if rings.len() != rotors.len() || starts.len() != rotors.len() {
            return Err(EnigmaError::SettingsLengthMismatch);
        }
        for (i, &id) in rotors.iter().enumerate() {
            if rotors[..i].contains(&id) {
                return Err(EnigmaError::DuplicateRotor);
            }
        }
        let four_wheel = rotors.len() == 4;
        if four_wheel {
            if !rotors[0].is_thin() {
                return Err(EnigmaError::ThinWheelMisplaced);
            }
            if rotors[1..].iter().any(|id| id.is_thin()) {
                return Err(EnigmaError::ThinWheelMisplaced);
            }
        } else if rotors.iter().any(|id| id.is_thin()) {
            return Err(EnigmaError::ThinWheelMisplaced);
        }
        if reflector.is_thin() != four_wheel {
            return Err(EnigmaError::ReflectorMismatch);
        }
        if rings.iter().any(|&r| r >= ALPHABET_LEN) {
            return Err(EnigmaError::RingSettingOutOfRange);
        }
        if starts.iter().any(|&s| s >= ALPHABET_LEN) {
            return Err(EnigmaError::StartPositionOutOfRange);
        }
        Ok(EnigmaConfig {
            rotors: rotors.to_vec(),
            rings: rings.to_vec(),
            starts: starts.to_vec(),
            reflector,
            plugboard,
        })
    }

    /// Creates a configuration from code-book style letter settings,
    /// e.g. rings `"AAA"` and starts `"ADU"`.
    ///
    /// # Errors
    /// Same as [`new`](Self::new), plus [`EnigmaError::InvalidLetter`] for
    /// characters outside `A..=Z`.
    pub fn from_letters(
        rotors: &[RotorId],
        rings: &str,
        starts: &str,
        reflector: ReflectorId,
        plugboard: Plugboard,
    ) -> Result<EnigmaConfig, EnigmaError> {
        let rings = alphabet::indices_of(rings)?;
        let starts = alphabet::indices_of(starts)?;
        EnigmaConfig::new(rotors, &rings, &starts, reflector, plugboard)
    }

    /// Mounted wheels, left to right.
    pub fn rotors(&self) -> &[RotorId] {
        &self.rotors
    }

    /// Ring settings, left to right.
    pub fn rings(&self) -> &[u8] {
        &self.rings
    }

    /// Start positions, left to right.
    pub fn starts(&self) -> &[u8] {
        &self.starts
    }

    /// Reflector identity.
    pub fn reflector(&self) -> ReflectorId {
        self.reflector
    }

    /// Plugboard cables.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }
}
