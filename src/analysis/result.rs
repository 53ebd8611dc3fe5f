//! Analysis result types

use serde::{Deserialize, Serialize};

use crate::notation::{self, NoteNameFormat};

/// Mode of a musical key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Major mode
    Major,
    /// Natural minor mode
    Minor,
}

impl Mode {
    /// Lowercase English mode name ("major" / "minor")
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Major => "major",
            Mode::Minor => "minor",
        }
    }
}

/// Detected musical key
///
/// Produced fresh per detection call and immutable once returned.
/// `confidence` of 0 signals "no evidence" (an empty score), not
/// "keyless": the tonic/mode then hold the C major sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyInfo {
    /// Tonic pitch class (0 = C, 1 = C#, ..., 11 = B)
    pub tonic: u8,

    /// Major or minor
    pub mode: Mode,

    /// Detection confidence in [0, 1]
    pub confidence: f64,
}

impl KeyInfo {
    /// Sharp-spelled letter name of the tonic (e.g. "C", "F#")
    pub fn tonic_name(&self) -> &'static str {
        notation::note_name(self.tonic % 12, NoteNameFormat::English)
    }

    /// Full key name (e.g. "C major", "A minor")
    ///
    /// # Example
    ///
    /// ```
    /// use score_theory::{KeyInfo, Mode};
    ///
    /// let key = KeyInfo { tonic: 9, mode: Mode::Minor, confidence: 1.0 };
    /// assert_eq!(key.name(), "A minor");
    /// ```
    pub fn name(&self) -> String {
        format!("{} {}", self.tonic_name(), self.mode.name())
    }
}

/// Identified instrument tuning
///
/// `notes` and `midi_values` follow the staff's string storage order;
/// use [`crate::format_tuning`] for the display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuningInfo {
    /// Name of a known tuning, or "Custom"
    pub name: String,

    /// Letter name of each string's base pitch
    pub notes: Vec<String>,

    /// Raw per-string base pitches
    pub midi_values: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tonic_name() {
        let key = |tonic| KeyInfo {
            tonic,
            mode: Mode::Major,
            confidence: 1.0,
        };
        assert_eq!(key(0).tonic_name(), "C");
        assert_eq!(key(1).tonic_name(), "C#");
        assert_eq!(key(6).tonic_name(), "F#");
        assert_eq!(key(11).tonic_name(), "B");
    }

    #[test]
    fn test_key_name() {
        let c_major = KeyInfo {
            tonic: 0,
            mode: Mode::Major,
            confidence: 0.9,
        };
        let gs_minor = KeyInfo {
            tonic: 8,
            mode: Mode::Minor,
            confidence: 0.9,
        };
        assert_eq!(c_major.name(), "C major");
        assert_eq!(gs_minor.name(), "G# minor");
    }
}
