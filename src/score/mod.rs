//! Minimal read-only score model
//!
//! The analysis core does not own score loading. Hosts deserialize or
//! translate their notation library's object model into this tree and
//! hand it over by reference; the core only ever reads pitch values and
//! the first staff's string tuning.

use serde::{Deserialize, Serialize};

/// A single note. Pitch is an absolute MIDI semitone number (0-127).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Absolute pitch in MIDI semitones (60 = middle C)
    pub pitch: u8,
}

/// Notes sounding together at one rhythmic position
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Beat {
    /// Notes of this beat
    pub notes: Vec<Note>,
}

/// One voice of a bar
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    /// Beats in playback order
    pub beats: Vec<Beat>,
}

/// A single bar (measure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Voices of this bar
    pub voices: Vec<Voice>,
}

/// A staff of a track
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    /// Per-string base pitches in the staff's storage order
    /// (string 1 first, as tab formats store them). Empty when the
    /// staff carries no tuning, e.g. a standard-notation staff.
    pub tuning: Vec<u8>,

    /// Bars in score order
    pub bars: Vec<Bar>,
}

/// A track (instrument part)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Staves of this track
    pub staves: Vec<Staff>,
}

/// A complete score
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// Tracks in score order
    pub tracks: Vec<Track>,
}

impl Note {
    /// Create a note from an absolute MIDI pitch
    pub fn new(pitch: u8) -> Self {
        Self { pitch }
    }
}

impl Score {
    /// Build a score holding the given pitches as a single voice,
    /// one note per beat. Convenient for tests and synthetic input.
    ///
    /// # Example
    ///
    /// ```
    /// use score_theory::Score;
    ///
    /// let score = Score::from_pitches(&[60, 64, 67]);
    /// assert_eq!(score.note_count(), 3);
    /// ```
    pub fn from_pitches(pitches: &[u8]) -> Self {
        let beats = pitches
            .iter()
            .map(|&pitch| Beat {
                notes: vec![Note::new(pitch)],
            })
            .collect();
        Self {
            tracks: vec![Track {
                staves: vec![Staff {
                    tuning: Vec::new(),
                    bars: vec![Bar {
                        voices: vec![Voice { beats }],
                    }],
                }],
            }],
        }
    }

    /// Iterate over the absolute pitches of every note reachable from
    /// every track, staff, bar, voice and beat, in storage order.
    pub fn pitches(&self) -> impl Iterator<Item = u8> + '_ {
        self.tracks
            .iter()
            .flat_map(|track| &track.staves)
            .flat_map(|staff| &staff.bars)
            .flat_map(|bar| &bar.voices)
            .flat_map(|voice| &voice.beats)
            .flat_map(|beat| &beat.notes)
            .map(|note| note.pitch)
    }

    /// Total number of notes in the score
    pub fn note_count(&self) -> usize {
        self.pitches().count()
    }

    /// The string tuning of the first staff of the first track, if it
    /// carries one. `None` for partial trees (no tracks, no staves) or
    /// staves without tuning data; callers substitute the standard
    /// guitar tuning in that case.
    pub fn first_tuning(&self) -> Option<&[u8]> {
        let staff = self.tracks.first()?.staves.first()?;
        if staff.tuning.is_empty() {
            None
        } else {
            Some(&staff.tuning)
        }
    }
}
