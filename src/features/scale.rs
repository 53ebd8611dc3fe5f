//! Scale degrees and per-note degree mapping
//!
//! Maps a detected key onto its 7 scale-degree descriptors and scale
//! notes, and resolves an arbitrary pitch to its nearest degree.

use serde::Serialize;

use crate::analysis::result::{KeyInfo, Mode};
use crate::notation::{note_name, NoteNameFormat};

/// Semitone offsets of the major scale degrees from the tonic
pub const MAJOR_SCALE_OFFSETS: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Semitone offsets of the natural minor scale degrees from the tonic
pub const MINOR_SCALE_OFFSETS: [u8; 7] = [0, 2, 3, 5, 7, 8, 10];

// Keys spelled with flats: F, Bb, Eb, Ab, Db, Gb.
const FLAT_TONICS: [u8; 6] = [5, 10, 3, 8, 1, 6];

/// One of the 7 diatonic scale degrees
///
/// The catalogue is a constant: degree labels are the same for major
/// and minor keys, only the pitch offsets used to place notes differ
/// by mode. `interval` is the step up to the next degree ("T" = whole
/// step, "S" = half step), following the major-scale pattern
/// Tone-Tone-Semitone-Tone-Tone-Tone-Semitone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScaleDegree {
    /// Degree number, 1-7
    pub degree: u8,

    /// Short code (T, S, M, SD, D, SM, L)
    pub short: &'static str,

    /// Full English name
    pub full_name: &'static str,

    /// Full Russian name
    pub full_name_ru: &'static str,

    /// Interval to the next degree, "T" or "S"
    pub interval: &'static str,

    /// Interval to the next degree, spelled out
    pub interval_full: &'static str,
}

const SCALE_DEGREES: [ScaleDegree; 7] = [
    ScaleDegree {
        degree: 1,
        short: "T",
        full_name: "Tonic",
        full_name_ru: "Тоника",
        interval: "T",
        interval_full: "Tone",
    },
    ScaleDegree {
        degree: 2,
        short: "S",
        full_name: "Supertonic",
        full_name_ru: "Супертоника",
        interval: "T",
        interval_full: "Tone",
    },
    ScaleDegree {
        degree: 3,
        short: "M",
        full_name: "Mediant",
        full_name_ru: "Медианта",
        interval: "S",
        interval_full: "Semitone",
    },
    ScaleDegree {
        degree: 4,
        short: "SD",
        full_name: "Subdominant",
        full_name_ru: "Субдоминанта",
        interval: "T",
        interval_full: "Tone",
    },
    ScaleDegree {
        degree: 5,
        short: "D",
        full_name: "Dominant",
        full_name_ru: "Доминанта",
        interval: "T",
        interval_full: "Tone",
    },
    ScaleDegree {
        degree: 6,
        short: "SM",
        full_name: "Submediant",
        full_name_ru: "Субмедианта",
        interval: "T",
        interval_full: "Tone",
    },
    ScaleDegree {
        degree: 7,
        short: "L",
        full_name: "Leading tone",
        full_name_ru: "Вводный тон",
        interval: "S",
        interval_full: "Semitone",
    },
];

/// The fixed catalogue of the 7 scale degrees
pub fn scale_degrees() -> &'static [ScaleDegree; 7] {
    &SCALE_DEGREES
}

fn offsets_for(mode: Mode) -> &'static [u8; 7] {
    match mode {
        Mode::Major => &MAJOR_SCALE_OFFSETS,
        Mode::Minor => &MINOR_SCALE_OFFSETS,
    }
}

/// The 7 letter names of the key's scale, tonic first
///
/// Flat spelling is chosen when the tonic pitch class is one of the
/// flat keys (F, Bb, Eb, Ab, Db, Gb), sharp spelling otherwise; the
/// choice depends on the tonic only, never on individual notes.
///
/// # Example
///
/// ```
/// use score_theory::{scale_notes, KeyInfo, Mode};
///
/// let f_major = KeyInfo { tonic: 5, mode: Mode::Major, confidence: 1.0 };
/// assert_eq!(
///     scale_notes(&f_major),
///     ["F", "G", "A", "Bb", "C", "D", "E"]
/// );
/// ```
pub fn scale_notes(key: &KeyInfo) -> [&'static str; 7] {
    let tonic = key.tonic % 12;
    let offsets = offsets_for(key.mode);
    let format = if FLAT_TONICS.contains(&tonic) {
        NoteNameFormat::EnglishFlat
    } else {
        NoteNameFormat::English
    };

    std::array::from_fn(|i| note_name((tonic + offsets[i]) % 12, format))
}

/// Short code of the scale degree a pitch falls on in the given key
///
/// The interval from the tonic is looked up in the mode's offset list.
/// A chromatic note not in the scale collapses onto the first degree
/// (scan order 1..7) whose offset lies within 1 semitone; it is
/// approximated, not relabeled with an accidental. "?" when no degree
/// is within tolerance.
///
/// # Example
///
/// ```
/// use score_theory::{scale_degree_for_note, KeyInfo, Mode};
///
/// let c_major = KeyInfo { tonic: 0, mode: Mode::Major, confidence: 1.0 };
/// assert_eq!(scale_degree_for_note(67, &c_major), "D"); // G, the dominant
/// assert_eq!(scale_degree_for_note(61, &c_major), "T"); // C# approximated
/// ```
pub fn scale_degree_for_note(pitch: u8, key: &KeyInfo) -> &'static str {
    let offsets = offsets_for(key.mode);
    let interval = (pitch % 12 + 12 - key.tonic % 12) % 12;

    if let Some(index) = offsets.iter().position(|&offset| offset == interval) {
        return SCALE_DEGREES[index].short;
    }

    // Altered note: approximate with the nearest in-scale degree.
    for (index, &offset) in offsets.iter().enumerate() {
        if (offset as i32 - interval as i32).abs() <= 1 {
            return SCALE_DEGREES[index].short;
        }
    }

    "?"
}

/// Roman numeral for a degree short code (T -> I, ..., L -> VII)
///
/// Codes outside the catalogue pass through unchanged.
pub fn to_roman_numeral(code: &str) -> &str {
    match code {
        "T" => "I",
        "S" => "II",
        "M" => "III",
        "SD" => "IV",
        "D" => "V",
        "SM" => "VI",
        "L" => "VII",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(tonic: u8, mode: Mode) -> KeyInfo {
        KeyInfo {
            tonic,
            mode,
            confidence: 1.0,
        }
    }

    #[test]
    fn test_catalogue_shape() {
        let degrees = scale_degrees();
        assert_eq!(degrees.len(), 7);
        let codes: Vec<_> = degrees.iter().map(|d| d.short).collect();
        assert_eq!(codes, ["T", "S", "M", "SD", "D", "SM", "L"]);
        // Major-scale step pattern: T-T-S-T-T-T-S
        let steps: Vec<_> = degrees.iter().map(|d| d.interval).collect();
        assert_eq!(steps, ["T", "T", "S", "T", "T", "T", "S"]);
        for (i, degree) in degrees.iter().enumerate() {
            assert_eq!(degree.degree as usize, i + 1);
        }
    }

    #[test]
    fn test_scale_notes_sharp_keys() {
        assert_eq!(
            scale_notes(&key(0, Mode::Major)),
            ["C", "D", "E", "F", "G", "A", "B"]
        );
        assert_eq!(
            scale_notes(&key(9, Mode::Minor)),
            ["A", "B", "C", "D", "E", "F", "G"]
        );
        assert_eq!(
            scale_notes(&key(4, Mode::Major)),
            ["E", "F#", "G#", "A", "B", "C#", "D#"]
        );
    }

    #[test]
    fn test_scale_notes_flat_keys() {
        assert_eq!(
            scale_notes(&key(5, Mode::Major)),
            ["F", "G", "A", "Bb", "C", "D", "E"]
        );
        assert_eq!(
            scale_notes(&key(10, Mode::Major)),
            ["Bb", "C", "D", "Eb", "F", "G", "A"]
        );
        // Single table lookups: pitch class 11 stays "B" even in a
        // flat key, no "Cb" spelling is synthesized.
        assert_eq!(
            scale_notes(&key(3, Mode::Minor)),
            ["Eb", "F", "Gb", "Ab", "Bb", "B", "Db"]
        );
    }

    #[test]
    fn test_degree_for_in_scale_notes() {
        let c_major = key(0, Mode::Major);
        assert_eq!(scale_degree_for_note(60, &c_major), "T");
        assert_eq!(scale_degree_for_note(62, &c_major), "S");
        assert_eq!(scale_degree_for_note(64, &c_major), "M");
        assert_eq!(scale_degree_for_note(65, &c_major), "SD");
        assert_eq!(scale_degree_for_note(67, &c_major), "D");
        assert_eq!(scale_degree_for_note(69, &c_major), "SM");
        assert_eq!(scale_degree_for_note(71, &c_major), "L");

        let a_minor = key(9, Mode::Minor);
        assert_eq!(scale_degree_for_note(57, &a_minor), "T");
        assert_eq!(scale_degree_for_note(60, &a_minor), "M"); // minor third
        assert_eq!(scale_degree_for_note(67, &a_minor), "L"); // minor seventh
    }

    #[test]
    fn test_chromatic_notes_collapse_to_nearest_degree() {
        // Deliberately coarse policy: altered notes take the label of
        // the first degree within one semitone, never an accidental
        // label like "#T". D# in C major sits one semitone from both
        // degree 2 and degree 3; the scan returns degree 2.
        let c_major = key(0, Mode::Major);
        assert_eq!(scale_degree_for_note(61, &c_major), "T"); // C#
        assert_eq!(scale_degree_for_note(63, &c_major), "S"); // D#
        assert_eq!(scale_degree_for_note(66, &c_major), "SD"); // F#
        assert_eq!(scale_degree_for_note(68, &c_major), "D"); // G#
        assert_eq!(scale_degree_for_note(70, &c_major), "SM"); // A#

        // Minor mode has its own offset list
        let a_minor = key(9, Mode::Minor);
        assert_eq!(scale_degree_for_note(58, &a_minor), "T"); // A#
        assert_eq!(scale_degree_for_note(63, &a_minor), "SD"); // D#
    }

    #[test]
    fn test_degree_round_trip_all_keys() {
        // Every scale note maps back to the degree at its position.
        for tonic in 0..12u8 {
            for mode in [Mode::Major, Mode::Minor] {
                let key = key(tonic, mode);
                let offsets = offsets_for(mode);
                for (i, &offset) in offsets.iter().enumerate() {
                    let pitch = 60 + ((tonic + offset) % 12);
                    assert_eq!(
                        scale_degree_for_note(pitch, &key),
                        SCALE_DEGREES[i].short,
                        "degree {} of {}",
                        i + 1,
                        key.name()
                    );
                }
            }
        }
    }

    #[test]
    fn test_roman_numerals() {
        let codes = ["T", "S", "M", "SD", "D", "SM", "L"];
        let numerals = ["I", "II", "III", "IV", "V", "VI", "VII"];
        for (code, numeral) in codes.iter().zip(numerals.iter()) {
            assert_eq!(to_roman_numeral(code), *numeral);
        }
        // Unknown codes pass through
        assert_eq!(to_roman_numeral("?"), "?");
        assert_eq!(to_roman_numeral("X"), "X");
    }
}
