//! # score-theory
//!
//! A music-theory analysis core for symbolic scores, providing key
//! detection, tuning identification, scale-degree mapping and note
//! naming.
//!
//! ## Features
//!
//! - **Key Detection**: Krumhansl-Schmuckler profile correlation over a
//!   normalized pitch-class histogram, with a confidence score
//! - **Tuning Identification**: matches string tunings against a table
//!   of known named tunings (Standard, Drop D, DADGAD, ...)
//! - **Scale Degrees**: the 7-degree catalogue, per-key scale notes and
//!   nearest-degree labels for arbitrary notes
//! - **Note Naming**: pitch-to-name conversion in English, German and
//!   solfège systems, sharp and flat variants
//!
//! ## Quick Start
//!
//! ```
//! use score_theory::{detect_key, scale_degree_for_note, Score};
//!
//! // Hosts translate their notation model into the minimal score tree
//! let score = Score::from_pitches(&[60, 64, 67, 60, 64, 67, 62, 65]);
//!
//! let key = detect_key(&score);
//! println!("Key: {} (confidence: {:.2})", key.name(), key.confidence);
//!
//! // Label a note with its scale degree in the detected key
//! let degree = scale_degree_for_note(67, &key);
//! assert_eq!(degree, "D"); // the dominant
//! ```
//!
//! ## Architecture
//!
//! Data flows one way:
//!
//! ```text
//! Score -> Pitch Histogram -> Key Estimator -> per-note degree labels
//! ```
//!
//! The tuning identifier runs independently off the score's string
//! configuration, and the note namer is a stateless utility used by
//! both. All analysis functions are pure and synchronous; hosts that
//! re-query the key per rendered note can put a [`KeyCache`] at the
//! boundary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod error;
pub mod features;
pub mod notation;
pub mod score;

// Re-export main types
pub use analysis::cache::KeyCache;
pub use analysis::result::{KeyInfo, Mode, TuningInfo};
pub use error::TheoryError;
pub use features::fretboard::{fret_note_name, note_name_at, MAX_FRET};
pub use features::histogram::PitchHistogram;
pub use features::key::{detect_key, detect_key_from_histogram};
pub use features::scale::{
    scale_degree_for_note, scale_degrees, scale_notes, to_roman_numeral, ScaleDegree,
};
pub use features::tuning::{format_tuning, identify_tuning, tuning_info, STANDARD_TUNING};
pub use notation::{note_name, note_name_with_octave, octave, pitch_class, NoteNameFormat};
pub use score::{Bar, Beat, Note, Score, Staff, Track, Voice};
