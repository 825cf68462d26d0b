//! The Enigma rotor-stack state machine.
//!
//! An [`Enigma`] owns the mutable rotational offsets of its mounted wheels;
//! wiring tables are shared immutable data. Each keystroke first steps the
//! stack (rightmost wheel always, dependent wheels on turnover, with the
//! double-step anomaly of the middle wheel), then traces the electrical
//! path: plugboard, wheels right-to-left, reflector, wheels left-to-right,
//! plugboard again.
//!
//! The substitution at any fixed state is a fixed-point-free involution, so
//! a letter never encodes to itself and a machine re-initialized to the same
//! start state decodes its own output.

use crate::alphabet::{self, ALPHABET_LEN};
use crate::config::EnigmaConfig;
use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::wiring::{self, Reflector, ReflectorId, Rotor, RotorId};

/// A wheel mounted in a slot: shared wiring plus this machine's ring
/// setting and rotational offset.
#[derive(Clone)]
struct MountedRotor {
    rotor: &'static Rotor,
    ring: u8,
    offset: u8,
}

impl MountedRotor {
    /// Substitution on the way in (right to left).
    ///
    /// Ring setting and offset combine into a single rotation of the wiring
    /// against the fixed entry alphabet: indexes are shifted by
    /// `offset − ring` before the lookup and shifted back after it.
    fn forward(&self, letter: u8) -> u8 {
        let shift = alphabet::sub(self.offset, self.ring);
        let wired = self.rotor.forward[alphabet::add(letter, shift) as usize];
        alphabet::sub(wired, shift)
    }

    /// Substitution on the way back (left to right), using the inverse wiring.
    fn backward(&self, letter: u8) -> u8 {
        let shift = alphabet::sub(self.offset, self.ring);
        let wired = self.rotor.inverse[alphabet::add(letter, shift) as usize];
        alphabet::sub(wired, shift)
    }

    /// Whether the currently visible letter is a turnover notch.
    fn at_notch(&self) -> bool {
        self.rotor.notched_at(self.offset)
    }

    /// Advances the wheel by `by` positions.
    fn advance(&mut self, by: u8) {
        self.offset = alphabet::add(self.offset, by);
    }
}

/// An Enigma machine: plugboard, 3 or 4 mounted wheels, reflector.
///
/// # Examples
///
/// ```
/// use enigmacrypt::{Enigma, EnigmaConfig, Plugboard, ReflectorId, RotorId};
///
/// let config = EnigmaConfig::from_letters(
///     &[RotorId::I, RotorId::II, RotorId::III],
///     "AAA",
///     "AAA",
///     ReflectorId::UkwB,
///     Plugboard::empty(),
/// )
/// .unwrap();
///
/// let mut machine = Enigma::new(&config);
/// assert_eq!(machine.encode_text("AAAAA").unwrap(), "BDZGO");
/// ```
#[derive(Clone)]
pub struct Enigma {
    rotors: Vec<MountedRotor>,
    reflector: &'static Reflector,
    plugboard: Plugboard,
}

impl Enigma {
    /// Mounts a machine from a validated configuration.
    pub fn new(config: &EnigmaConfig) -> Enigma {
        Enigma::from_parts(
            config.rotors(),
            config.rings(),
            config.starts(),
            config.reflector(),
            config.plugboard().clone(),
        )
    }

    /// Internal constructor for callers that guarantee consistent parts
    /// (trial configurations in the crib search are valid by construction).
    pub(crate) fn from_parts(
        ids: &[RotorId],
        rings: &[u8],
        starts: &[u8],
        reflector: ReflectorId,
        plugboard: Plugboard,
    ) -> Enigma {
        let rotors = ids
            .iter()
            .zip(rings.iter())
            .zip(starts.iter())
            .map(|((&id, &ring), &start)| MountedRotor {
                rotor: wiring::rotor(id),
                ring,
                offset: start,
            })
            .collect();
        Enigma {
            rotors,
            reflector: wiring::reflector(reflector),
            plugboard,
        }
    }

    /// Encodes one keystroke: steps the stack, then substitutes.
    ///
    /// Symmetric by construction — the same call decrypts ciphertext on a
    /// machine re-initialized to the same start state.
    ///
    /// # Parameters
    /// - `letter`: Alphabet index in `[0, 26)`.
    ///
    /// # Panics
    /// Panics on an out-of-range index; letter validation happens at the
    /// text boundary, so a violation here is a caller bug.
    pub fn encode(&mut self, letter: u8) -> u8 {
        assert!(letter < ALPHABET_LEN, "letter index out of range");
        self.step();
        let plugged = self.plugboard.swap(letter);
        let through = self.rotor_path(plugged);
        self.plugboard.swap(through)
    }

    /// Encodes a whole letters-only message.
    ///
    /// The input is validated in full before any state advances, so a
    /// rejected message leaves the machine untouched.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidLetter`] for anything outside `A..=Z`;
    /// use [`text::prepare`](crate::text::prepare) first for raw text.
    pub fn encode_text(&mut self, text: &str) -> Result<String, EnigmaError> {
        let letters = alphabet::indices_of(text)?;
        Ok(letters
            .into_iter()
            .map(|letter| alphabet::letter_at(self.encode(letter)))
            .collect())
    }

    /// Currently visible window letters, left to right (e.g. `"ADU"`).
    pub fn positions(&self) -> String {
        self.rotors
            .iter()
            .map(|mounted| alphabet::letter_at(mounted.offset))
            .collect()
    }

    /// Current rotational offsets, left to right.
    pub fn offsets(&self) -> Vec<u8> {
        self.rotors.iter().map(|mounted| mounted.offset).collect()
    }

    /// Advances the stack without encoding, as the mechanism does before
    /// every substitution. Used by the crib search to walk a trial machine
    /// to a crib position.
    pub(crate) fn advance_key(&mut self) {
        self.step();
    }

    /// Full substitution table of the rotor path at the current state,
    /// bypassing the plugboard. The crib search derives plugboard pairs by
    /// comparing this live path against crib letters.
    pub(crate) fn bare_map(&self) -> [u8; 26] {
        let mut map = [0u8; 26];
        for (letter, slot) in map.iter_mut().enumerate() {
            *slot = self.rotor_path(letter as u8);
        }
        map
    }

    /// Steps the stack for one keystroke.
    ///
    /// The middle wheel advances at most once per keystroke: on its own
    /// notch (dragging the left wheel — the double-step anomaly) or on the
    /// right wheel's notch. A stationary M4 thin wheel sits to the left of
    /// the stepping trio and never moves.
    fn step(&mut self) {
        let right = self.rotors.len() - 1;
        let middle = right - 1;
        let left = right - 2;

        let middle_turnover = self.rotors[middle].at_notch();
        let right_turnover = self.rotors[right].at_notch();
        if middle_turnover {
            self.rotors[middle].advance(1);
            self.rotors[left].advance(1);
        } else if right_turnover {
            self.rotors[middle].advance(1);
        }
        let step = self.rotors[right].rotor.step;
        self.rotors[right].advance(step);
    }

    /// Plugboard-less electrical path: wheels right-to-left, reflector,
    /// wheels left-to-right.
    fn rotor_path(&self, letter: u8) -> u8 {
        let mut signal = letter;
        for mounted in self.rotors.iter().rev() {
            signal = mounted.forward(signal);
        }
        signal = self.reflector.reflect(signal);
        for mounted in self.rotors.iter() {
            signal = mounted.backward(signal);
        }
        signal
    }
}
