//! Historical wheel and reflector wiring tables.
//!
//! The tables cover the Enigma I / M3 wheel set (I–VIII), the M4 thin wheels
//! (Beta, Gamma), the standard reflectors UKW-B / UKW-C and their thin M4
//! counterparts. Each wiring is an immutable bijection over the 26-letter
//! alphabet; forward and inverse lookup arrays are built once at first use
//! and handed out as `&'static` references, so machine instances and scan
//! loops share the same read-only data.

use std::fmt;
use std::sync::OnceLock;

use crate::alphabet::ALPHABET_LEN;

/// Identity of a mountable wheel.
///
/// I–VIII are the interchangeable stepping wheels; Beta and Gamma are the
/// stationary thin wheels introduced with the M4, valid only in the leftmost
/// slot of a 4-wheel stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorId {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
    Beta,
    Gamma,
}

impl RotorId {
    /// The eight interchangeable wheels of the M3 set.
    pub const STANDARD: [RotorId; 8] = [
        RotorId::I,
        RotorId::II,
        RotorId::III,
        RotorId::IV,
        RotorId::V,
        RotorId::VI,
        RotorId::VII,
        RotorId::VIII,
    ];

    /// The five-wheel pool the crib search enumerates by default.
    pub const BOMBE_POOL: [RotorId; 5] = [
        RotorId::I,
        RotorId::II,
        RotorId::III,
        RotorId::IV,
        RotorId::V,
    ];

    /// Whether this is a stationary M4 thin wheel.
    pub fn is_thin(self) -> bool {
        matches!(self, RotorId::Beta | RotorId::Gamma)
    }

    /// Wiring string, notch letters, and per-keystroke step count.
    fn definition(self) -> (&'static str, &'static str, u8) {
        match self {
            RotorId::I => ("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q", 1),
            RotorId::II => ("AJDKSIRUXBLHWTMCQGZNPYFVOE", "E", 1),
            RotorId::III => ("BDFHJLCPRTXVZNYEIWGAKMUSQO", "V", 1),
            RotorId::IV => ("ESOVPZJAYQUIRHXLNFTGKDCMWB", "J", 1),
            RotorId::V => ("VZBRGITYUPSDNHLXAWMJQOFECK", "Z", 1),
            RotorId::VI => ("JPGVOUMFYQBENHZRDKASXLICTW", "ZM", 1),
            RotorId::VII => ("NZJHGRCXMYSWBOUFAIVLPEKQDT", "ZM", 1),
            RotorId::VIII => ("FKQHTLXOCBJSPDZRAMEWNIUYGV", "ZM", 1),
            RotorId::Beta => ("LEYJVCNIXWPBQMDRTAKZGFUHOS", "", 1),
            RotorId::Gamma => ("FSOKANUERHMBTIYCWLQPZXVGJD", "", 1),
        }
    }

    fn table_index(self) -> usize {
        match self {
            RotorId::I => 0,
            RotorId::II => 1,
            RotorId::III => 2,
            RotorId::IV => 3,
            RotorId::V => 4,
            RotorId::VI => 5,
            RotorId::VII => 6,
            RotorId::VIII => 7,
            RotorId::Beta => 8,
            RotorId::Gamma => 9,
        }
    }
}

impl fmt::Display for RotorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RotorId::I => "I",
            RotorId::II => "II",
            RotorId::III => "III",
            RotorId::IV => "IV",
            RotorId::V => "V",
            RotorId::VI => "VI",
            RotorId::VII => "VII",
            RotorId::VIII => "VIII",
            RotorId::Beta => "Beta",
            RotorId::Gamma => "Gamma",
        };
        write!(f, "{}", name)
    }
}

/// Identity of a reflector (Umkehrwalze).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectorId {
    /// Standard UKW-B, for 3-wheel stacks.
    UkwB,
    /// Standard UKW-C, for 3-wheel stacks.
    UkwC,
    /// Thin UKW-B, for 4-wheel stacks.
    BThin,
    /// Thin UKW-C, for 4-wheel stacks.
    CThin,
}

impl ReflectorId {
    /// The standard reflectors used with 3-wheel stacks.
    pub const STANDARD: [ReflectorId; 2] = [ReflectorId::UkwB, ReflectorId::UkwC];

    /// Whether this is an M4 thin reflector.
    pub fn is_thin(self) -> bool {
        matches!(self, ReflectorId::BThin | ReflectorId::CThin)
    }

    fn wiring(self) -> &'static str {
        match self {
            ReflectorId::UkwB => "YRUHQSLDPXNGOKMIEBFZCWVJAT",
            ReflectorId::UkwC => "FVPJIAOYEDRZXWGCTKUQSBNMHL",
            ReflectorId::BThin => "ENKQAUYWJICOPBLMDXZVFTHRGS",
            ReflectorId::CThin => "RDOBJNTKVEHMLFCWZAXGYIPSUQ",
        }
    }

    fn table_index(self) -> usize {
        match self {
            ReflectorId::UkwB => 0,
            ReflectorId::UkwC => 1,
            ReflectorId::BThin => 2,
            ReflectorId::CThin => 3,
        }
    }
}

impl fmt::Display for ReflectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReflectorId::UkwB => "UKW-B",
            ReflectorId::UkwC => "UKW-C",
            ReflectorId::BThin => "UKW-B-thin",
            ReflectorId::CThin => "UKW-C-thin",
        };
        write!(f, "{}", name)
    }
}

/// An immutable wired wheel: forward and inverse permutation, turnover
/// notches, and the per-keystroke step count of the rightmost slot.
pub(crate) struct Rotor {
    pub(crate) forward: [u8; 26],
    pub(crate) inverse: [u8; 26],
    notches: u32,
    pub(crate) step: u8,
}

impl Rotor {
    /// Builds a rotor from a 26-letter wiring string and notch letters.
    ///
    /// # Parameters
    /// - `wiring`: Permutation as the image of A–Z, in order.
    /// - `notches`: Zero, one, or two notch letters.
    /// - `step`: Positions advanced per keystroke in the rightmost slot.
    pub(crate) fn new(wiring: &str, notches: &str, step: u8) -> Rotor {
        assert_eq!(wiring.len(), ALPHABET_LEN as usize, "wiring must cover A-Z");
        let mut forward = [0u8; 26];
        let mut inverse = [0u8; 26];
        for (i, byte) in wiring.bytes().enumerate() {
            let target = byte - b'A';
            forward[i] = target;
            inverse[target as usize] = i as u8;
        }
        let mut notch_mask = 0u32;
        for byte in notches.bytes() {
            notch_mask |= 1 << (byte - b'A');
        }
        Rotor {
            forward,
            inverse,
            notches: notch_mask,
            step,
        }
    }

    /// Whether the visible letter at `position` is a turnover notch.
    pub(crate) fn notched_at(&self, position: u8) -> bool {
        self.notches & (1 << position) != 0
    }
}

/// An immutable involutive reflector permutation.
pub(crate) struct Reflector {
    map: [u8; 26],
}

impl Reflector {
    fn new(wiring: &str) -> Reflector {
        assert_eq!(wiring.len(), ALPHABET_LEN as usize, "wiring must cover A-Z");
        let mut map = [0u8; 26];
        for (i, byte) in wiring.bytes().enumerate() {
            map[i] = byte - b'A';
        }
        for (i, &image) in map.iter().enumerate() {
            assert_eq!(
                map[image as usize], i as u8,
                "reflector wiring must be involutive"
            );
        }
        Reflector { map }
    }

    /// Applies the reflector substitution.
    pub(crate) fn reflect(&self, letter: u8) -> u8 {
        self.map[letter as usize]
    }
}

/// Returns the shared wiring table for a wheel identity.
pub(crate) fn rotor(id: RotorId) -> &'static Rotor {
    static TABLE: OnceLock<Vec<Rotor>> = OnceLock::new();
    let table = TABLE.get_or_init(|| {
        let all = [
            RotorId::I,
            RotorId::II,
            RotorId::III,
            RotorId::IV,
            RotorId::V,
            RotorId::VI,
            RotorId::VII,
            RotorId::VIII,
            RotorId::Beta,
            RotorId::Gamma,
        ];
        all.iter()
            .map(|id| {
                let (wiring, notches, step) = id.definition();
                Rotor::new(wiring, notches, step)
            })
            .collect()
    });
    &table[id.table_index()]
}

/// Returns the shared wiring table for a reflector identity.
pub(crate) fn reflector(id: ReflectorId) -> &'static Reflector {
    static TABLE: OnceLock<Vec<Reflector>> = OnceLock::new();
    let table = TABLE.get_or_init(|| {
        [
            ReflectorId::UkwB,
            ReflectorId::UkwC,
            ReflectorId::BThin,
            ReflectorId::CThin,
        ]
        .iter()
        .map(|id| Reflector::new(id.wiring()))
        .collect()
    });
    &table[id.table_index()]
}
