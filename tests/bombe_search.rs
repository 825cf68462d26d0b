//! End-to-end crib search scenarios.
//!
//! The staged pipeline is driven against ciphertext generated in-test, so
//! every expectation is anchored to the machine itself rather than frozen
//! search output. The crib word is a 26-letter run of a single letter: its
//! cipher image can never contain that letter, and 26 edges over 25
//! possible letters force a repeat, so the menu always holds a two-edge
//! loop.

use enigmacrypt::alphabet;
use enigmacrypt::analysis::{find_alignments, Bombe, SwitchSet, TrialSetup};
use enigmacrypt::{Enigma, EnigmaConfig, Plugboard, ReflectorId, RotorId};

const TRUTH_ROTORS: [RotorId; 3] = [RotorId::I, RotorId::II, RotorId::III];

fn crib_word() -> String {
    "A".repeat(26)
}

fn truth_setup() -> TrialSetup {
    TrialSetup::baseline(TRUTH_ROTORS, ReflectorId::UkwB)
}

/// Encrypts the crib word at the head of a message under the truth
/// configuration (start ZZZ, rings AAA — the scan baseline).
fn encrypt_fragment(plugboard: Plugboard) -> String {
    let config = EnigmaConfig::from_letters(
        &TRUTH_ROTORS,
        "AAA",
        "ZZZ",
        ReflectorId::UkwB,
        plugboard,
    )
    .unwrap();
    Enigma::new(&config).encode_text(&crib_word()).unwrap()
}

/// Whether every pair of a hypothesis agrees with a reference plugboard
/// (self-pairs assert the letter is unplugged).
fn agrees_with(hypothesis: &SwitchSet, board: &Plugboard) -> bool {
    hypothesis.pairs().iter().all(|&(a, b)| {
        let a = alphabet::index_of(a).unwrap();
        let b = alphabet::index_of(b).unwrap();
        board.swap(a) == b
    })
}

// ═══════════════════════════════════════════════════════════════════════
// Stage 1 — alignment scanning
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn alignment_scan_rejects_letter_for_letter_matches() {
    // At offset 0 the leading A self-encrypts; at offset 1 the T at
    // position 2 does. No admissible alignment remains.
    assert_eq!(
        find_alignments("ATTACKATDAWN", "QATTACKATDAWN").unwrap(),
        Vec::<usize>::new()
    );
}

#[test]
fn alignment_scan_accepts_shifted_fragment() {
    // A Caesar-shifted image differs from the word at every position.
    assert_eq!(
        find_alignments("ATTACKATDAWN", "BUUBDLBUEBXO").unwrap(),
        vec![0]
    );
}

#[test]
fn alignment_scan_finds_true_offset_in_real_traffic() {
    let fragment = encrypt_fragment(Plugboard::empty());
    let offsets = find_alignments(&crib_word(), &fragment).unwrap();
    assert_eq!(offsets, vec![0], "a 26-letter run admits only its own offset");
}

// ═══════════════════════════════════════════════════════════════════════
// Stage 2 — menu construction on real traffic
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn single_letter_crib_always_yields_loops() {
    let fragment = encrypt_fragment(Plugboard::empty());
    let bombe = Bombe::new(&crib_word(), &fragment).unwrap();
    let menu = bombe.menu();
    assert!(!menu.is_empty());
    assert_eq!(menu.shortest().unwrap().len(), 2);
    for lp in menu.loops() {
        assert!(lp.len() <= 4);
        assert_eq!(lp.edges()[0].from, lp.start());
        assert_eq!(lp.edges()[lp.len() - 1].to, lp.start());
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Stages 3–5 — scans and plugboard derivation, unplugged traffic
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn decode_at_truth_reproduces_the_plaintext() {
    let fragment = encrypt_fragment(Plugboard::empty());
    let bombe = Bombe::new(&crib_word(), &fragment).unwrap();
    let candidate = bombe.decode(&truth_setup(), &SwitchSet::new());
    assert_eq!(candidate.matches, 26);
    assert_eq!(candidate.text, crib_word());
}

#[test]
fn every_loop_derives_an_unplugged_hypothesis_at_truth() {
    let fragment = encrypt_fragment(Plugboard::empty());
    let bombe = Bombe::new(&crib_word(), &fragment).unwrap();
    for lp in bombe.menu().loops() {
        let hypotheses = bombe.derive_plugboard(lp, &truth_setup());
        assert!(!hypotheses.is_empty(), "loop at truth must stay consistent");
        assert!(
            hypotheses
                .iter()
                .any(|h| h.pairs().iter().all(|&(a, b)| a == b)),
            "the all-unplugged assignment must survive"
        );
    }
}

#[test]
fn scan_rotors_ranks_the_true_wheel_order_first() {
    let fragment = encrypt_fragment(Plugboard::empty());
    let bombe = Bombe::new(&crib_word(), &fragment).unwrap();
    let candidates = bombe.scan_rotors(&RotorId::BOMBE_POOL, &ReflectorId::STANDARD);
    assert!(!candidates.is_empty());
    assert_eq!(candidates[0].matches, 26, "a full match must rank first");
    assert!(
        candidates
            .iter()
            .any(|c| c.setup.rotors == TRUTH_ROTORS
                && c.setup.reflector == ReflectorId::UkwB
                && c.matches == 26),
        "the true wheel order must score a full match"
    );
}

#[test]
fn scan_start_fresh_sweep_contains_the_true_start() {
    let fragment = encrypt_fragment(Plugboard::empty());
    let bombe = Bombe::new(&crib_word(), &fragment).unwrap();
    let lp = bombe.menu().shortest().unwrap();
    let found = bombe.scan_start(lp, TRUTH_ROTORS, ReflectorId::UkwB, &[]);
    assert!(
        found.iter().any(|c| c.starts == [25, 25, 25]),
        "the sweep must keep ZZZ"
    );
}

#[test]
fn scan_start_chained_sweep_narrows_the_left_wheel() {
    let fragment = encrypt_fragment(Plugboard::empty());
    let bombe = Bombe::new(&crib_word(), &fragment).unwrap();
    let lp = bombe.menu().shortest().unwrap();
    // Survivor of an earlier sweep with the left wheel still unknown.
    let previous = [[0u8, 25, 25]];
    let found = bombe.scan_start(lp, TRUTH_ROTORS, ReflectorId::UkwB, &previous);
    assert!(
        found.iter().any(|c| c.starts == [25, 25, 25]),
        "chaining must rediscover the true left-wheel position"
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Stages 5–6 — plugged traffic
// ═══════════════════════════════════════════════════════════════════════

fn truth_plugboard() -> Plugboard {
    Plugboard::new(&[('A', 'B'), ('S', 'T'), ('N', 'O')]).unwrap()
}

#[test]
fn derive_plugboard_recovers_cables_from_plugged_traffic() {
    let fragment = encrypt_fragment(truth_plugboard());
    let bombe = Bombe::new(&crib_word(), &fragment).unwrap();
    let board = truth_plugboard();
    for lp in bombe.menu().loops() {
        let hypotheses = bombe.derive_plugboard(lp, &truth_setup());
        assert!(!hypotheses.is_empty());
        assert!(
            hypotheses.iter().any(|h| agrees_with(h, &board)),
            "some hypothesis must agree with the real cables"
        );
    }
}

#[test]
fn decode_with_the_full_hypothesis_matches_everywhere() {
    let fragment = encrypt_fragment(truth_plugboard());
    let bombe = Bombe::new(&crib_word(), &fragment).unwrap();
    let hypothesis =
        SwitchSet::from_pairs(&[('A', 'B'), ('S', 'T'), ('N', 'O')]).unwrap();
    let candidate = bombe.decode(&truth_setup(), &hypothesis);
    assert_eq!(candidate.matches, 26);
    assert_eq!(candidate.text, crib_word());
}

#[test]
fn merge_accumulates_hypotheses_across_loops() {
    let fragment = encrypt_fragment(truth_plugboard());
    let bombe = Bombe::new(&crib_word(), &fragment).unwrap();
    let mut pool: Vec<SwitchSet> = Vec::new();
    for lp in bombe.menu().loops() {
        let fresh = bombe.derive_plugboard(lp, &truth_setup());
        pool = Bombe::merge_plugboards(pool, fresh);
    }
    assert!(!pool.is_empty(), "plugged traffic must leave hypotheses");
}

// ═══════════════════════════════════════════════════════════════════════
// Full pipeline over a longer message
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn staged_search_recovers_a_message_head() {
    let plaintext = format!("{}XWETTERBERICHT", crib_word());
    let config = EnigmaConfig::from_letters(
        &TRUTH_ROTORS,
        "AAA",
        "ZZZ",
        ReflectorId::UkwB,
        truth_plugboard(),
    )
    .unwrap();
    let cipher = Enigma::new(&config).encode_text(&plaintext).unwrap();

    let word = crib_word();
    let offsets = find_alignments(&word, &cipher).unwrap();
    assert!(offsets.contains(&0), "the true offset must be admissible");

    let bombe = Bombe::from_alignment(&word, &cipher, 0).unwrap();
    assert!(!bombe.menu().is_empty());

    let candidate = bombe.decode(
        &truth_setup(),
        &SwitchSet::from_pairs(&[('A', 'B'), ('S', 'T'), ('N', 'O')]).unwrap(),
    );
    assert_eq!(candidate.matches, 26);
    assert!(format!("{}", candidate).contains("matches 26"));
}
