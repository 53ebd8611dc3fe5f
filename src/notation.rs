//! Pitch-class names and octave math
//!
//! Converts absolute MIDI pitches to letter names in several naming
//! systems. Every conversion is a single table lookup on the pitch
//! class; no accidental spelling is ever synthesized.

use serde::{Deserialize, Serialize};

const NOTE_NAMES_ENGLISH: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

const NOTE_NAMES_ENGLISH_FLAT: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

// German convention: B natural is written H, B flat is written B.
const NOTE_NAMES_GERMAN: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "B", "H",
];

const NOTE_NAMES_GERMAN_FLAT: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "B", "H",
];

const NOTE_NAMES_SOLFEGE: [&str; 12] = [
    "Do", "Do#", "Re", "Re#", "Mi", "Fa", "Fa#", "Sol", "Sol#", "La", "La#", "Si",
];

const NOTE_NAMES_SOLFEGE_FLAT: [&str; 12] = [
    "Do", "Reb", "Re", "Mib", "Mi", "Fa", "Solb", "Sol", "Lab", "La", "Sib", "Si",
];

/// Note naming system used for pitch-to-name conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteNameFormat {
    /// English letters with sharps (C, C#, D, ...)
    #[default]
    English,
    /// English letters with flats (C, Db, D, ...)
    EnglishFlat,
    /// German letters with sharps (..., A, B, H)
    German,
    /// German letters with flats (..., A, B, H)
    GermanFlat,
    /// Solfège syllables with sharps (Do, Do#, Re, ...)
    Solfege,
    /// Solfège syllables with flats (Do, Reb, Re, ...)
    SolfegeFlat,
}

impl NoteNameFormat {
    /// The 12-entry pitch-class name table for this format
    pub fn names(self) -> &'static [&'static str; 12] {
        match self {
            NoteNameFormat::English => &NOTE_NAMES_ENGLISH,
            NoteNameFormat::EnglishFlat => &NOTE_NAMES_ENGLISH_FLAT,
            NoteNameFormat::German => &NOTE_NAMES_GERMAN,
            NoteNameFormat::GermanFlat => &NOTE_NAMES_GERMAN_FLAT,
            NoteNameFormat::Solfege => &NOTE_NAMES_SOLFEGE,
            NoteNameFormat::SolfegeFlat => &NOTE_NAMES_SOLFEGE_FLAT,
        }
    }
}

/// Pitch class (0-11) of an absolute MIDI pitch
pub fn pitch_class(pitch: u8) -> usize {
    (pitch % 12) as usize
}

/// Octave number of an absolute MIDI pitch, middle C convention:
/// pitch 60 is C4, pitch 0 is C-1.
pub fn octave(pitch: u8) -> i32 {
    pitch as i32 / 12 - 1
}

/// Letter name of a pitch in the given naming system
///
/// # Example
///
/// ```
/// use score_theory::{note_name, NoteNameFormat};
///
/// assert_eq!(note_name(61, NoteNameFormat::English), "C#");
/// assert_eq!(note_name(61, NoteNameFormat::EnglishFlat), "Db");
/// assert_eq!(note_name(71, NoteNameFormat::German), "H");
/// ```
pub fn note_name(pitch: u8, format: NoteNameFormat) -> &'static str {
    format.names()[pitch_class(pitch)]
}

/// English letter name of a pitch, optionally suffixed with its octave
///
/// # Example
///
/// ```
/// use score_theory::note_name_with_octave;
///
/// assert_eq!(note_name_with_octave(60, true), "C4");
/// assert_eq!(note_name_with_octave(61, false), "C#");
/// ```
pub fn note_name_with_octave(pitch: u8, include_octave: bool) -> String {
    let name = note_name(pitch, NoteNameFormat::English);
    if include_octave {
        format!("{}{}", name, octave(pitch))
    } else {
        name.to_string()
    }
}
