//! Deterministic daily-key generation.
//!
//! Reproduces the code-book setup procedure: pick three distinct wheels,
//! ring settings, start positions, a reflector, and ten disjoint plugboard
//! pairs. The generator is seeded and fully deterministic, so a key sheet
//! can be regenerated from its seed — the same property the cipher engine
//! itself relies on for reproducible key derivation.

use crate::alphabet::ALPHABET_LEN;
use crate::config::EnigmaConfig;
use crate::plugboard::Plugboard;
use crate::wiring::{ReflectorId, RotorId};

/// Number of plugboard cables in a standard daily key.
const DAILY_CABLES: usize = 10;

/// A small deterministic generator (xorshift64*) for key-sheet sampling.
///
/// Statistical quality far exceeds what key sampling needs; the point is
/// determinism and a fixed, auditable algorithm with no platform variance.
pub struct KeyGenerator {
    state: u64,
}

impl KeyGenerator {
    /// Creates a generator from a seed. Any seed is valid.
    pub fn new(seed: u64) -> KeyGenerator {
        // A zero state would be a fixed point of the shift network.
        let state = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
        KeyGenerator { state }
    }

    /// Advances the generator and returns the next raw value.
    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Uniform-enough draw below `bound` for the tiny bounds used here.
    fn next_below(&mut self, bound: u32) -> u32 {
        (self.next_u64() % bound as u64) as u32
    }

    /// Samples `count` distinct wheels from `pool`.
    fn sample_rotors(&mut self, pool: &[RotorId], count: usize) -> Vec<RotorId> {
        let mut chosen = Vec::with_capacity(count);
        while chosen.len() < count {
            let candidate = pool[self.next_below(pool.len() as u32) as usize];
            if !chosen.contains(&candidate) {
                chosen.push(candidate);
            }
        }
        chosen
    }

    /// Samples `count` alphabet values.
    fn sample_settings(&mut self, count: usize) -> Vec<u8> {
        (0..count)
            .map(|_| self.next_below(ALPHABET_LEN as u32) as u8)
            .collect()
    }

    /// Samples ten disjoint plugboard pairs via an alphabet shuffle.
    fn sample_plugboard(&mut self) -> Plugboard {
        let mut letters: Vec<u8> = (0..ALPHABET_LEN).collect();
        for i in (1..letters.len()).rev() {
            let j = self.next_below(i as u32 + 1) as usize;
            letters.swap(i, j);
        }
        let pairs: Vec<(u8, u8)> = letters
            .chunks(2)
            .take(DAILY_CABLES)
            .map(|pair| (pair[0], pair[1]))
            .collect();
        Plugboard::from_indices(&pairs).expect("shuffled pairs are disjoint")
    }

    /// Generates a complete 3-wheel (M3) daily key.
    pub fn m3_config(&mut self) -> EnigmaConfig {
        let rotors = self.sample_rotors(&RotorId::STANDARD, 3);
        let rings = self.sample_settings(3);
        let starts = self.sample_settings(3);
        let reflector = ReflectorId::STANDARD[self.next_below(2) as usize];
        let plugboard = self.sample_plugboard();
        EnigmaConfig::new(&rotors, &rings, &starts, reflector, plugboard)
            .expect("generated key respects all configuration rules")
    }

    /// Generates a complete 4-wheel (M4) daily key.
    pub fn m4_config(&mut self) -> EnigmaConfig {
        let thin = if self.next_below(2) == 0 {
            RotorId::Beta
        } else {
            RotorId::Gamma
        };
        let mut rotors = vec![thin];
        rotors.extend(self.sample_rotors(&RotorId::STANDARD, 3));
        let rings = self.sample_settings(4);
        let starts = self.sample_settings(4);
        let reflector = if self.next_below(2) == 0 {
            ReflectorId::BThin
        } else {
            ReflectorId::CThin
        };
        let plugboard = self.sample_plugboard();
        EnigmaConfig::new(&rotors, &rings, &starts, reflector, plugboard)
            .expect("generated key respects all configuration rules")
    }
}
