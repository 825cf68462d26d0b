//! Bombe-style search for machine configurations consistent with a crib.
//!
//! The session is staged the way an operator would drive the real search:
//!
//! 1. Build the menu of loops for an aligned crib ([`Bombe::new`]).
//! 2. Narrow the wheel order and reflector ([`Bombe::scan_rotors`]).
//! 3. Narrow the start positions ([`Bombe::scan_start`]), optionally
//!    chaining repeated scans one wheel at a time.
//! 4. Derive plugboard hypotheses per loop ([`Bombe::derive_plugboard`])
//!    and merge them across loops ([`Bombe::merge_plugboards`]).
//! 5. Score any candidate by decoding the fragment ([`Bombe::decode`]).
//!
//! Every stage is a pure enumeration over immutable wiring tables: stages
//! report empty sets instead of failing, and a caller can abandon any scan
//! mid-iteration without leaving state behind.

use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::fmt;

use crate::alphabet::{self, ALPHABET_LEN};
use crate::analysis::crib::Crib;
use crate::analysis::menu::{Menu, MenuLoop};
use crate::error::EnigmaError;
use crate::machine::Enigma;
use crate::plugboard::Plugboard;
use crate::wiring::{ReflectorId, RotorId};

/// A trial machine configuration under test: everything but the plugboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialSetup {
    /// Wheel order, left to right.
    pub rotors: [RotorId; 3],
    /// Reflector identity.
    pub reflector: ReflectorId,
    /// Start positions, left to right.
    pub starts: [u8; 3],
    /// Ring settings, left to right.
    pub rings: [u8; 3],
}

impl TrialSetup {
    /// The fixed reference point the wheel-order scan holds constant:
    /// start positions ZZZ, ring settings AAA.
    pub fn baseline(rotors: [RotorId; 3], reflector: ReflectorId) -> TrialSetup {
        TrialSetup {
            rotors,
            reflector,
            starts: [25; 3],
            rings: [0; 3],
        }
    }

    /// Mounts a machine for this trial.
    fn machine(&self, plugboard: Plugboard) -> Enigma {
        Enigma::from_parts(
            &self.rotors,
            &self.rings,
            &self.starts,
            self.reflector,
            plugboard,
        )
    }
}

impl fmt::Display for TrialSetup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{} {} start {} rings {}",
            self.rotors[0],
            self.rotors[1],
            self.rotors[2],
            self.reflector,
            letters(&self.starts),
            letters(&self.rings),
        )
    }
}

fn letters(settings: &[u8]) -> String {
    settings
        .iter()
        .map(|&value| alphabet::letter_at(value))
        .collect()
}

/// A plugboard hypothesis: a globally consistent set of switch pairs.
///
/// A pair may connect a letter to itself — the hypothesis that the letter
/// is unplugged — which still excludes that letter from every other pair.
/// Self-pairs are dropped when the hypothesis is turned into a machine
/// [`Plugboard`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwitchSet {
    pairs: BTreeSet<(u8, u8)>,
}

impl SwitchSet {
    /// Creates an empty hypothesis.
    pub fn new() -> SwitchSet {
        SwitchSet::default()
    }

    /// Builds a hypothesis from uppercase letter pairs.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidLetter`] for characters outside `A..=Z`.
    /// - [`EnigmaError::PlugboardLetterReused`] if the pairs conflict.
    pub fn from_pairs(pairs: &[(char, char)]) -> Result<SwitchSet, EnigmaError> {
        let mut set = SwitchSet::new();
        for &(a, b) in pairs {
            let a = alphabet::index_of(a)?;
            let b = alphabet::index_of(b)?;
            if !set.insert_checked(a, b) {
                return Err(EnigmaError::PlugboardLetterReused);
            }
        }
        Ok(set)
    }

    /// Inserts a pair if it is consistent with every pair already present:
    /// identical pairs coexist, but a letter can never acquire a second
    /// partner. Returns whether the hypothesis is still consistent.
    pub(crate) fn insert_checked(&mut self, a: u8, b: u8) -> bool {
        let pair = (a.min(b), a.max(b));
        if self.pairs.contains(&pair) {
            return true;
        }
        if self.touches(a) || self.touches(b) {
            return false;
        }
        self.pairs.insert(pair);
        true
    }

    /// Whether any pair involves `letter`.
    fn touches(&self, letter: u8) -> bool {
        self.pairs.iter().any(|&(x, y)| x == letter || y == letter)
    }

    /// Whether every pair of `other` could be inserted into `self`.
    pub fn compatible_with(&self, other: &SwitchSet) -> bool {
        other.pairs.iter().all(|&(a, b)| {
            self.pairs.contains(&(a, b)) || (!self.touches(a) && !self.touches(b))
        })
    }

    /// Absorbs all pairs of a compatible hypothesis.
    pub(crate) fn union_with(&mut self, other: &SwitchSet) {
        for &(a, b) in other.pairs.iter() {
            self.pairs.insert((a, b));
        }
    }

    /// The switch pairs as uppercase letters, including self-pairs.
    pub fn pairs(&self) -> Vec<(char, char)> {
        self.pairs
            .iter()
            .map(|&(a, b)| (alphabet::letter_at(a), alphabet::letter_at(b)))
            .collect()
    }

    /// Number of pairs in the hypothesis.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the hypothesis is empty.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Materializes the hypothesis as a machine plugboard, dropping
    /// self-pairs (an unplugged letter needs no cable).
    pub fn to_plugboard(&self) -> Plugboard {
        let cables: Vec<(u8, u8)> = self
            .pairs
            .iter()
            .filter(|&&(a, b)| a != b)
            .copied()
            .collect();
        Plugboard::from_indices(&cables).expect("hypothesis pairs are disjoint")
    }
}

/// A scored configuration candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The trial configuration.
    pub setup: TrialSetup,
    /// The plugboard hypothesis used for decoding.
    pub plugboard: SwitchSet,
    /// Crib positions the decode reproduced.
    pub matches: usize,
    /// The decoded fragment.
    pub text: String,
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cables: Vec<String> = self
            .plugboard
            .pairs()
            .into_iter()
            .filter(|(a, b)| a != b)
            .map(|(a, b)| format!("{}{}", a, b))
            .collect();
        write!(
            f,
            "{} plugboard [{}] matches {} text {}",
            self.setup,
            cables.join(" "),
            self.matches,
            self.text,
        )
    }
}

/// A start position that admitted at least one plugboard hypothesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartCandidate {
    /// Start positions, left to right.
    pub starts: [u8; 3],
    /// Hypotheses derived at this start.
    pub hypotheses: Vec<SwitchSet>,
}

/// A crib-search session over one aligned crib and its menu.
#[derive(Debug)]
pub struct Bombe {
    crib: Crib,
    menu: Menu,
}

impl Bombe {
    /// Opens a session for a guessed word aligned with a ciphertext
    /// fragment of the same length.
    ///
    /// # Errors
    /// Same as [`Crib::new`].
    pub fn new(word: &str, fragment: &str) -> Result<Bombe, EnigmaError> {
        let crib = Crib::new(word, fragment)?;
        let menu = Menu::build(&crib);
        Ok(Bombe { crib, menu })
    }

    /// Opens a session for a word aligned at `offset` into a full
    /// ciphertext (an offset produced by
    /// [`find_alignments`](crate::analysis::find_alignments)).
    ///
    /// # Errors
    /// [`EnigmaError::CribLengthMismatch`] if the word does not fit at the
    /// offset, plus the [`Crib::new`] rules.
    pub fn from_alignment(word: &str, cipher: &str, offset: usize) -> Result<Bombe, EnigmaError> {
        let word = alphabet::indices_of(word)?;
        let cipher = alphabet::indices_of(cipher)?;
        if word.is_empty() || offset + word.len() > cipher.len() {
            return Err(EnigmaError::CribLengthMismatch);
        }
        let crib = Crib::from_indices(&word, &cipher[offset..offset + word.len()])?;
        let menu = Menu::build(&crib);
        Ok(Bombe { crib, menu })
    }

    /// The aligned crib under analysis.
    pub fn crib(&self) -> &Crib {
        &self.crib
    }

    /// The menu of loops the crib admits.
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Exhaustive wheel-order and reflector scan at the baseline setup.
    ///
    /// Tests the shortest loop for plugboard consistency under every
    /// ordered selection of three distinct wheels from `pool` crossed with
    /// every reflector, and scores each surviving hypothesis (or the empty
    /// hypothesis where none survived) against the full crib. Candidates
    /// come back best-first.
    ///
    /// Returns an empty list when the menu has no loops.
    pub fn scan_rotors(&self, pool: &[RotorId], reflectors: &[ReflectorId]) -> Vec<Candidate> {
        let shortest = match self.menu.shortest() {
            Some(lp) => lp,
            None => return Vec::new(),
        };
        let mut candidates = Vec::new();
        for rotors in permutations3(pool) {
            for &reflector in reflectors {
                let setup = TrialSetup::baseline(rotors, reflector);
                let hypotheses = self.derive_plugboard(shortest, &setup);
                if hypotheses.is_empty() {
                    candidates.push(self.decode(&setup, &SwitchSet::new()));
                } else {
                    for hypothesis in hypotheses {
                        candidates.push(self.decode(&setup, &hypothesis));
                    }
                }
            }
        }
        candidates.sort_by_key(|candidate| Reverse(candidate.matches));
        candidates
    }

    /// Start-position sweep for a fixed wheel order and reflector, at ring
    /// settings AAA.
    ///
    /// With `previous` empty, sweeps the middle and right wheels across all
    /// 676 combinations with the left wheel held at Z. With `previous`
    /// holding the survivors of an earlier sweep, sweeps the left wheel
    /// across each survivor instead — chaining scans narrows one wheel at a
    /// time. Only starts that admit a plugboard-consistent assignment of
    /// the loop are returned.
    pub fn scan_start(
        &self,
        lp: &MenuLoop,
        rotors: [RotorId; 3],
        reflector: ReflectorId,
        previous: &[[u8; 3]],
    ) -> Vec<StartCandidate> {
        let mut found = Vec::new();
        if previous.is_empty() {
            for middle in 0..ALPHABET_LEN {
                for right in 0..ALPHABET_LEN {
                    let starts = [25, middle, right];
                    if let Some(candidate) = self.start_candidate(lp, rotors, reflector, starts) {
                        found.push(candidate);
                    }
                }
            }
        } else {
            for survivor in previous {
                for left in 0..ALPHABET_LEN {
                    let starts = [left, survivor[1], survivor[2]];
                    if let Some(candidate) = self.start_candidate(lp, rotors, reflector, starts) {
                        found.push(candidate);
                    }
                }
            }
        }
        found
    }

    fn start_candidate(
        &self,
        lp: &MenuLoop,
        rotors: [RotorId; 3],
        reflector: ReflectorId,
        starts: [u8; 3],
    ) -> Option<StartCandidate> {
        let setup = TrialSetup {
            rotors,
            reflector,
            starts,
            rings: [0; 3],
        };
        let hypotheses = self.derive_plugboard(lp, &setup);
        if hypotheses.is_empty() {
            None
        } else {
            Some(StartCandidate { starts, hypotheses })
        }
    }

    /// Derives every plugboard hypothesis a loop admits under a trial
    /// configuration.
    ///
    /// Sweeps all assignments of a trial letter to each loop edge — the
    /// steckered value of the edge's plaintext letter. An assignment
    /// survives if the implied pairs stay globally consistent: the guessed
    /// (plain, trial) pairs, and for each edge the pair of the live rotor
    /// path's output with the observed cipher letter. An empty result means
    /// this loop rules the trial configuration out.
    pub fn derive_plugboard(&self, lp: &MenuLoop, setup: &TrialSetup) -> Vec<SwitchSet> {
        let maps = self.stack_maps(lp, setup);
        let width = lp.len();
        let mut trial = vec![0u8; width];
        let mut found = Vec::new();
        loop {
            if let Some(hypothesis) = self.try_assignment(lp, &trial, &maps) {
                found.push(hypothesis);
            }
            let mut digit = width;
            loop {
                if digit == 0 {
                    return found;
                }
                digit -= 1;
                trial[digit] += 1;
                if trial[digit] < ALPHABET_LEN {
                    break;
                }
                trial[digit] = 0;
            }
        }
    }

    /// Tests one trial-letter assignment against a loop.
    fn try_assignment(
        &self,
        lp: &MenuLoop,
        trial: &[u8],
        maps: &[[u8; 26]],
    ) -> Option<SwitchSet> {
        let mut hypothesis = SwitchSet::new();
        // Cheap filter first: the guessed stecker of each plaintext letter.
        for (slot, edge) in lp.edges().iter().enumerate() {
            let pair = self.crib.pair(edge.position);
            if !hypothesis.insert_checked(pair.plain, trial[slot]) {
                return None;
            }
        }
        // Then the machine-backed pairs from the live rotor path.
        for (slot, edge) in lp.edges().iter().enumerate() {
            let pair = self.crib.pair(edge.position);
            let live = maps[slot][trial[slot] as usize];
            if !hypothesis.insert_checked(live, pair.cipher) {
                return None;
            }
        }
        Some(hypothesis)
    }

    /// Plugboard-less substitution tables of the trial machine at each loop
    /// position, computed by walking one machine forward once.
    fn stack_maps(&self, lp: &MenuLoop, setup: &TrialSetup) -> Vec<[u8; 26]> {
        let mut machine = setup.machine(Plugboard::empty());
        let max_position = lp.max_position();
        let mut per_position = Vec::with_capacity(max_position + 1);
        for _ in 0..=max_position {
            machine.advance_key();
            per_position.push(machine.bare_map());
        }
        lp.edges()
            .iter()
            .map(|edge| per_position[edge.position])
            .collect()
    }

    /// Merges the hypotheses of a fresh loop into an accumulated pool.
    ///
    /// Each fresh hypothesis absorbs every accumulated hypothesis it is
    /// compatible with; an empty fresh result leaves the pool unchanged
    /// (the loop's search was exhausted, sibling loops may still succeed).
    pub fn merge_plugboards(
        accumulated: Vec<SwitchSet>,
        fresh: Vec<SwitchSet>,
    ) -> Vec<SwitchSet> {
        if fresh.is_empty() {
            return accumulated;
        }
        if accumulated.is_empty() {
            return fresh;
        }
        let mut merged = fresh;
        for prior in accumulated.iter() {
            for hypothesis in merged.iter_mut() {
                if hypothesis.compatible_with(prior) {
                    hypothesis.union_with(prior);
                }
            }
        }
        merged
    }

    /// Decodes the crib's ciphertext under a trial configuration and
    /// hypothesis, counting reproduced plaintext positions.
    pub fn decode(&self, setup: &TrialSetup, hypothesis: &SwitchSet) -> Candidate {
        let mut machine = setup.machine(hypothesis.to_plugboard());
        let mut matches = 0;
        let mut text = String::with_capacity(self.crib.len());
        for pair in self.crib.pairs() {
            let decoded = machine.encode(pair.cipher);
            if decoded == pair.plain {
                matches += 1;
            }
            text.push(alphabet::letter_at(decoded));
        }
        Candidate {
            setup: *setup,
            plugboard: hypothesis.clone(),
            matches,
            text,
        }
    }
}

/// Ordered selections of three distinct wheels from a pool.
fn permutations3(pool: &[RotorId]) -> Vec<[RotorId; 3]> {
    let mut selections = Vec::new();
    for (a, &left) in pool.iter().enumerate() {
        for (b, &middle) in pool.iter().enumerate() {
            if b == a {
                continue;
            }
            for (c, &right) in pool.iter().enumerate() {
                if c == a || c == b {
                    continue;
                }
                selections.push([left, middle, right]);
            }
        }
    }
    selections
}
