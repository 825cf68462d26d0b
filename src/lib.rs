//! Enigma rotor-machine engine and Bombe-style cryptanalysis.
//!
//! enigmacrypt simulates the Enigma I / M3 family (and the 4-wheel M4
//! variant) wire-for-wire, and attacks its traffic with the crib-based
//! search procedure of the Turing–Welchman Bombe.
//!
//! # Architecture
//!
//! ```text
//! Plugboard            (disjoint letter-swap pairs, applied twice per path)
//!     ↕
//! Rotor stack          (3 or 4 mounted wheels — ring setting + stepping
//!                       offset over immutable wiring tables)
//!     ↕
//! Reflector            (fixed involutive substitution)
//!     = Enigma         (steps, then traces the electrical path per key)
//!
//! Crib ──► Menu loops ──► Bombe session
//!          (letter graph)  (wheel scan → start scan → plugboard
//!                           derivation → merge → scored candidates)
//! ```
//!
//! The machine is the leaf component: the search instantiates trial
//! machines under candidate configurations and never the other way around.
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use enigmacrypt::{Enigma, EnigmaConfig, Plugboard, ReflectorId, RotorId};
//!
//! let config = EnigmaConfig::from_letters(
//!     &[RotorId::I, RotorId::II, RotorId::III],
//!     "AAA",
//!     "ADU",
//!     ReflectorId::UkwB,
//!     Plugboard::new(&[('D', 'W'), ('A', 'O')]).unwrap(),
//! )
//! .unwrap();
//!
//! let mut encoder = Enigma::new(&config);
//! let cipher = encoder.encode_text("ATTACKATDAWN").unwrap();
//! assert_ne!(cipher, "ATTACKATDAWN");
//!
//! let mut decoder = Enigma::new(&config);
//! assert_eq!(decoder.encode_text(&cipher).unwrap(), "ATTACKATDAWN");
//! ```
//!
//! Search for the configuration behind a ciphertext:
//!
//! ```
//! use enigmacrypt::analysis::{find_alignments, Bombe};
//!
//! let cipher = "QWERT"; // ciphertext under analysis
//! let offsets = find_alignments("WET", cipher).unwrap();
//! for offset in offsets {
//!     let session = Bombe::from_alignment("WET", cipher, offset).unwrap();
//!     let _loops = session.menu().loops();
//! }
//! ```

#![deny(clippy::all)]

pub mod error;

pub mod alphabet;
pub mod analysis;
pub mod text;

mod config;
mod keygen;
mod machine;
mod plugboard;
mod wiring;

pub use config::EnigmaConfig;
pub use error::EnigmaError;
pub use keygen::KeyGenerator;
pub use machine::Enigma;
pub use plugboard::Plugboard;
pub use wiring::{ReflectorId, RotorId};
