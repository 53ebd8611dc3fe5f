//! Tuning identification
//!
//! Matches a staff's per-string base pitches against a table of known
//! named tunings, substituting the standard guitar tuning when the
//! score carries no tuning data.

use crate::analysis::result::TuningInfo;
use crate::notation::{note_name, NoteNameFormat};
use crate::score::Score;

/// Standard guitar tuning in staff storage order
/// (string 1 first: E4, B3, G3, D3, A2, E2)
pub const STANDARD_TUNING: [u8; 6] = [64, 59, 55, 50, 45, 40];

// Known tunings, lowest string first. Staff tunings arrive in the
// opposite string order, so the matcher walks each row from the far
// end; keep both conventions in sync when adding rows.
const KNOWN_TUNINGS: [(&str, [u8; 6]); 9] = [
    ("Standard (E)", [40, 45, 50, 55, 59, 64]),
    ("Drop D", [38, 45, 50, 55, 59, 64]),
    ("Drop C", [36, 43, 48, 53, 57, 62]),
    ("Drop B", [35, 42, 47, 52, 56, 61]),
    ("Open D", [38, 45, 50, 54, 59, 62]),
    ("Open G", [38, 43, 50, 55, 59, 62]),
    ("DADGAD", [38, 45, 50, 55, 57, 62]),
    ("Half Step Down", [39, 44, 49, 54, 58, 63]),
    ("Whole Step Down", [38, 43, 48, 53, 57, 62]),
];

/// Identify the tuning of a score's instrument
///
/// Reads the per-string base pitches of the first staff of the first
/// track; a score without tuning data gets the standard guitar tuning
/// substituted. The result carries the matched tuning name ("Custom"
/// when no known tuning matches), per-string note names and the raw
/// pitches, all in the staff's storage order.
///
/// # Example
///
/// ```
/// use score_theory::{tuning_info, Score};
///
/// // No tuning data: standard tuning is assumed
/// let info = tuning_info(&Score::from_pitches(&[60]));
/// assert_eq!(info.name, "Standard (E)");
/// assert_eq!(info.notes, ["E", "B", "G", "D", "A", "E"]);
/// ```
pub fn tuning_info(score: &Score) -> TuningInfo {
    let midi_values: Vec<u8> = match score.first_tuning() {
        Some(tuning) => tuning.to_vec(),
        None => {
            log::debug!("Score carries no tuning, using standard");
            STANDARD_TUNING.to_vec()
        }
    };

    let notes = midi_values
        .iter()
        .map(|&pitch| note_name(pitch, NoteNameFormat::English).to_string())
        .collect();
    let name = identify_tuning(&midi_values).to_string();

    log::debug!("Identified tuning: {} ({:?})", name, midi_values);

    TuningInfo {
        name,
        notes,
        midi_values,
    }
}

/// Name of the known tuning matching these string pitches, or "Custom"
///
/// `pitches` is in staff storage order; the table rows are stored in
/// the reverse string order, so `pitches[i]` is compared against
/// `row[len - 1 - i]`.
pub fn identify_tuning(pitches: &[u8]) -> &'static str {
    for (name, values) in &KNOWN_TUNINGS {
        if pitches.len() == values.len()
            && pitches
                .iter()
                .enumerate()
                .all(|(i, &pitch)| pitch == values[values.len() - 1 - i])
        {
            return name;
        }
    }
    "Custom"
}

/// Display form of a tuning: note order reversed and joined with " - ",
/// since storage order and display order run in opposite directions.
///
/// # Example
///
/// ```
/// use score_theory::{format_tuning, tuning_info, Score};
///
/// let info = tuning_info(&Score::default());
/// assert_eq!(format_tuning(&info), "E - A - D - G - B - E");
/// ```
pub fn format_tuning(info: &TuningInfo) -> String {
    info.notes
        .iter()
        .rev()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" - ")
}
