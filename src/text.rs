//! Text preparation and presentation helpers.
//!
//! These are collaborators around the machine core, which only ever sees
//! letters-only sequences. Preparation follows operator convention: spaces
//! become `X`, commas become `QQ`, line breaks and punctuation are dropped,
//! and anything left outside A–Z (digits, say) is rejected.

use crate::error::EnigmaError;

/// Normalizes raw text into the letters-only form the machine accepts.
///
/// # Errors
/// Returns [`EnigmaError::InvalidLetter`] if a non-convertible character
/// (such as a digit) remains after the conventional replacements.
///
/// # Examples
///
/// ```
/// use enigmacrypt::text;
///
/// assert_eq!(text::prepare("attack at dawn").unwrap(), "ATTACKXATXDAWN");
/// assert_eq!(text::prepare("yes, sir!").unwrap(), "YESQQXSIR");
/// assert!(text::prepare("flight 101").is_err());
/// ```
pub fn prepare(text: &str) -> Result<String, EnigmaError> {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        let c = c.to_ascii_uppercase();
        match c {
            ' ' => out.push('X'),
            ',' => out.push_str("QQ"),
            '\n' | '\r' => {}
            c if c.is_ascii_punctuation() => {}
            c if c.is_ascii_uppercase() => out.push(c),
            _ => return Err(EnigmaError::InvalidLetter),
        }
    }
    Ok(out)
}

/// Formats a letters-only message into the conventional five-letter groups.
///
/// Purely presentational; the grouping carries no meaning to the machine.
///
/// # Examples
///
/// ```
/// use enigmacrypt::text;
///
/// assert_eq!(text::into_blocks("BDZGOW"), "BDZGO W");
/// ```
pub fn into_blocks(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(5)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
