//! Fretboard note naming
//!
//! Resolves a (fret, string) position to the name of the sounding
//! pitch, given a string tuning or a score to take it from.

use crate::error::TheoryError;
use crate::notation::{note_name, NoteNameFormat};
use crate::score::Score;

use super::tuning::STANDARD_TUNING;

/// Highest supported fret number
pub const MAX_FRET: u8 = 24;

/// Name of the pitch sounding at a fret of a string
///
/// `string` is the zero-based index into `tuning` (staff storage
/// order). Out-of-range frets and string indices are caller contract
/// violations and fail fast.
///
/// # Errors
///
/// [`TheoryError::InvalidInput`] when `fret` exceeds [`MAX_FRET`] or
/// `string` is outside the tuning.
///
/// # Example
///
/// ```
/// use score_theory::{note_name_at, NoteNameFormat};
///
/// let standard = [64, 59, 55, 50, 45, 40];
/// // Third fret of the A string
/// let name = note_name_at(3, 4, &standard, NoteNameFormat::English)?;
/// assert_eq!(name, "C");
/// # Ok::<(), score_theory::TheoryError>(())
/// ```
pub fn note_name_at(
    fret: u8,
    string: usize,
    tuning: &[u8],
    format: NoteNameFormat,
) -> Result<&'static str, TheoryError> {
    if fret > MAX_FRET {
        return Err(TheoryError::InvalidInput(format!(
            "Fret {} out of range (0-{})",
            fret, MAX_FRET
        )));
    }
    let base = tuning.get(string).copied().ok_or_else(|| {
        TheoryError::InvalidInput(format!(
            "String {} out of range for {}-string tuning",
            string,
            tuning.len()
        ))
    })?;

    Ok(note_name(base + fret, format))
}

/// Name of the pitch sounding at a fret of a string, with the tuning
/// taken from the score's first staff (standard tuning when absent)
pub fn fret_note_name(
    fret: u8,
    string: usize,
    score: &Score,
    format: NoteNameFormat,
) -> Result<&'static str, TheoryError> {
    let tuning = score.first_tuning().unwrap_or(&STANDARD_TUNING);
    note_name_at(fret, string, tuning, format)
}
