//! Crib construction and alignment scanning.
//!
//! A crib is a guessed plaintext word aligned against a ciphertext
//! fragment. Because the machine never encodes a letter to itself, any
//! alignment with a letter-for-letter match is impossible and is rejected
//! up front — the first and cheapest filter of the whole search.

use crate::alphabet;
use crate::error::EnigmaError;

/// One aligned position: the assumed plaintext letter and the ciphertext
/// letter it would have produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CribPair {
    /// Assumed plaintext letter (alphabet index).
    pub plain: u8,
    /// Observed ciphertext letter (alphabet index).
    pub cipher: u8,
}

/// A validated crib: per-position plain/cipher pairs with no fixed points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crib {
    pairs: Vec<CribPair>,
}

impl Crib {
    /// Builds a crib from a guessed word and the ciphertext fragment it is
    /// assumed to align with.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidLetter`] for characters outside `A..=Z`.
    /// - [`EnigmaError::CribLengthMismatch`] if the inputs are empty or of
    ///   different lengths.
    /// - [`EnigmaError::CribSelfEncryption`] if any position pairs a letter
    ///   with itself.
    pub fn new(word: &str, fragment: &str) -> Result<Crib, EnigmaError> {
        let word = alphabet::indices_of(word)?;
        let fragment = alphabet::indices_of(fragment)?;
        Crib::from_indices(&word, &fragment)
    }

    /// Index-level constructor shared with the alignment machinery.
    pub(crate) fn from_indices(word: &[u8], fragment: &[u8]) -> Result<Crib, EnigmaError> {
        if word.is_empty() || word.len() != fragment.len() {
            return Err(EnigmaError::CribLengthMismatch);
        }
        if !admissible(word, fragment) {
            return Err(EnigmaError::CribSelfEncryption);
        }
        let pairs = word
            .iter()
            .zip(fragment.iter())
            .map(|(&plain, &cipher)| CribPair { plain, cipher })
            .collect();
        Ok(Crib { pairs })
    }

    /// Number of aligned positions.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the crib holds no positions (never true for a constructed crib).
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// All aligned positions, in order.
    pub fn pairs(&self) -> &[CribPair] {
        &self.pairs
    }

    /// The pair at a crib position.
    pub(crate) fn pair(&self, position: usize) -> CribPair {
        self.pairs[position]
    }
}

/// Slides a guessed word across a ciphertext and returns every offset where
/// no position encodes a letter to itself.
///
/// An empty result means the crib cannot fit anywhere — a finding, not a
/// failure.
///
/// # Errors
/// - [`EnigmaError::InvalidLetter`] for characters outside `A..=Z`.
/// - [`EnigmaError::CribLengthMismatch`] if the word is empty or longer
///   than the ciphertext.
///
/// # Examples
///
/// ```
/// use enigmacrypt::analysis::find_alignments;
///
/// let offsets = find_alignments("AB", "BABA").unwrap();
/// assert_eq!(offsets, vec![0, 2]);
/// ```
pub fn find_alignments(word: &str, cipher: &str) -> Result<Vec<usize>, EnigmaError> {
    let word = alphabet::indices_of(word)?;
    let cipher = alphabet::indices_of(cipher)?;
    if word.is_empty() || word.len() > cipher.len() {
        return Err(EnigmaError::CribLengthMismatch);
    }
    Ok((0..=cipher.len() - word.len())
        .filter(|&offset| admissible(&word, &cipher[offset..offset + word.len()]))
        .collect())
}

/// Whether no position of the candidate alignment is a fixed point.
fn admissible(word: &[u8], fragment: &[u8]) -> bool {
    word.iter().zip(fragment.iter()).all(|(w, c)| w != c)
}
