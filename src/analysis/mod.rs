//! Bombe-style cryptanalysis of machine traffic.
//!
//! Implements the crib-based attack: alignment scanning, menu/loop
//! construction, and the staged configuration search modeled on the
//! Turing–Welchman Bombe procedure.

pub mod bombe;
pub mod crib;
pub mod menu;

pub use bombe::{Bombe, Candidate, StartCandidate, SwitchSet, TrialSetup};
pub use crib::{find_alignments, Crib, CribPair};
pub use menu::{Menu, MenuEdge, MenuLoop};
