//! Pitch-class histogram
//!
//! Reduces a score to a normalized 12-bin pitch-class distribution, the
//! input of the key estimator.

use crate::score::Score;

/// Normalized pitch-class distribution of a score
///
/// `bins[pc]` is the relative frequency of pitch class `pc` (index =
/// absolute pitch mod 12). Bins sum to 1 when the score has notes and
/// are all zero otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchHistogram {
    /// Relative frequency per pitch class
    pub bins: [f64; 12],

    /// Number of notes counted
    pub total_notes: usize,
}

impl PitchHistogram {
    /// Build the histogram from every note reachable in the score
    ///
    /// Linear in the total note count; pure function of the score's
    /// pitch values.
    pub fn from_score(score: &Score) -> Self {
        Self::from_pitches(score.pitches())
    }

    /// Build the histogram from raw pitch values
    pub fn from_pitches(pitches: impl IntoIterator<Item = u8>) -> Self {
        let mut counts = [0usize; 12];
        let mut total_notes = 0usize;
        for pitch in pitches {
            counts[(pitch % 12) as usize] += 1;
            total_notes += 1;
        }

        let mut bins = [0.0f64; 12];
        if total_notes > 0 {
            for (bin, &count) in bins.iter_mut().zip(counts.iter()) {
                *bin = count as f64 / total_notes as f64;
            }
        }

        log::debug!(
            "Built pitch histogram from {} notes: {:?}",
            total_notes,
            bins
        );

        Self { bins, total_notes }
    }

    /// True when no notes were counted
    pub fn is_empty(&self) -> bool {
        self.total_notes == 0
    }
}
