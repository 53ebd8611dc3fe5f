//! Key detection algorithm
//!
//! Correlates a score's pitch-class histogram against Krumhansl-Schmuckler
//! tonal profiles to estimate the key of a symbolic score.
//!
//! # Reference
//!
//! Krumhansl, C. L., & Kessler, E. J. (1982). Tracing the Dynamic Changes in
//! Perceived Tonal Organization in a Spatial Representation of Musical Keys.
//! *Psychological Review*, 89(4), 334-368.

use crate::analysis::result::{KeyInfo, Mode};
use crate::features::histogram::PitchHistogram;
use crate::score::Score;

use super::profiles::{MAJOR_PROFILE, MINOR_PROFILE};

/// Detect the musical key of a score
///
/// Builds the pitch-class histogram over every note of the score and
/// hands it to [`detect_key_from_histogram`]. Every input produces a
/// valid [`KeyInfo`]; a score with no notes yields the C major sentinel
/// with confidence 0.
///
/// # Example
///
/// ```
/// use score_theory::{detect_key, Mode, Score};
///
/// // A C major triad, repeated
/// let score = Score::from_pitches(&[60, 64, 67, 60, 64, 67]);
/// let key = detect_key(&score);
///
/// assert_eq!(key.tonic, 0);
/// assert_eq!(key.mode, Mode::Major);
/// assert!(key.confidence > 0.8);
/// ```
pub fn detect_key(score: &Score) -> KeyInfo {
    log::debug!("Analyzing score for key detection");
    detect_key_from_histogram(&PitchHistogram::from_score(score))
}

/// Detect the musical key from a pre-built pitch-class histogram
///
/// For every candidate tonic 0..12 and both modes, the mode's reference
/// profile is rotated to the tonic and Pearson-correlated against the
/// histogram. The single best-correlating candidate wins; on exact ties
/// the first candidate in scan order (ascending tonic, major before
/// minor) is kept, so results are reproducible. Confidence maps the
/// winning correlation from [-1, 1] into [0, 1].
pub fn detect_key_from_histogram(histogram: &PitchHistogram) -> KeyInfo {
    if histogram.is_empty() {
        log::debug!("No notes to analyze, returning C major with zero confidence");
        return KeyInfo {
            tonic: 0,
            mode: Mode::Major,
            confidence: 0.0,
        };
    }

    let mut best_tonic = 0u8;
    let mut best_mode = Mode::Major;
    let mut best_correlation = f64::NEG_INFINITY;

    for tonic in 0..12u8 {
        let major = correlation(&histogram.bins, &MAJOR_PROFILE, tonic);
        if major > best_correlation {
            best_correlation = major;
            best_tonic = tonic;
            best_mode = Mode::Major;
        }

        let minor = correlation(&histogram.bins, &MINOR_PROFILE, tonic);
        if minor > best_correlation {
            best_correlation = minor;
            best_tonic = tonic;
            best_mode = Mode::Minor;
        }
    }

    let confidence = ((best_correlation + 1.0) / 2.0).clamp(0.0, 1.0);

    let key = KeyInfo {
        tonic: best_tonic,
        mode: best_mode,
        confidence,
    };
    log::debug!(
        "Detected key: {} (correlation {:.4}, confidence {:.2})",
        key.name(),
        best_correlation,
        confidence
    );
    key
}

/// Pearson correlation between the histogram and a profile rotated so
/// the tonic sits at the given pitch class. Returns 0 when either side
/// has zero variance.
fn correlation(bins: &[f64; 12], profile: &[f64; 12], tonic: u8) -> f64 {
    let mut rotated = [0.0f64; 12];
    for (i, slot) in rotated.iter_mut().enumerate() {
        *slot = profile[(i + 12 - tonic as usize) % 12];
    }

    let mean_bins: f64 = bins.iter().sum::<f64>() / 12.0;
    let mean_profile: f64 = rotated.iter().sum::<f64>() / 12.0;

    let mut numerator = 0.0;
    let mut bins_ss = 0.0;
    let mut profile_ss = 0.0;
    for (&bin, &value) in bins.iter().zip(rotated.iter()) {
        let bin_dev = bin - mean_bins;
        let profile_dev = value - mean_profile;
        numerator += bin_dev * profile_dev;
        bins_ss += bin_dev * bin_dev;
        profile_ss += profile_dev * profile_dev;
    }

    if bins_ss == 0.0 || profile_ss == 0.0 {
        return 0.0;
    }

    numerator / (bins_ss * profile_ss).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Histogram whose bins are exactly the given profile rotated to a
    /// tonic, normalized to sum 1.
    fn profile_histogram(profile: &[f64; 12], tonic: u8) -> PitchHistogram {
        let mut bins = [0.0f64; 12];
        for (i, slot) in bins.iter_mut().enumerate() {
            *slot = profile[(i + 12 - tonic as usize) % 12];
        }
        let sum: f64 = bins.iter().sum();
        for bin in bins.iter_mut() {
            *bin /= sum;
        }
        PitchHistogram {
            bins,
            total_notes: 100,
        }
    }

    #[test]
    fn test_empty_histogram_sentinel() {
        let key = detect_key_from_histogram(&PitchHistogram {
            bins: [0.0; 12],
            total_notes: 0,
        });
        assert_eq!(key.tonic, 0);
        assert_eq!(key.mode, Mode::Major);
        assert_eq!(key.confidence, 0.0);
    }

    #[test]
    fn test_empty_score_sentinel() {
        let key = detect_key(&Score::default());
        assert_eq!((key.tonic, key.mode, key.confidence), (0, Mode::Major, 0.0));
    }

    #[test]
    fn test_recovers_all_24_keys_from_exact_profiles() {
        // Feeding the exact rotated reference profile must recover that
        // (tonic, mode) with correlation ~1, i.e. confidence ~1.
        for tonic in 0..12u8 {
            for (mode, profile) in [(Mode::Major, &MAJOR_PROFILE), (Mode::Minor, &MINOR_PROFILE)] {
                let key = detect_key_from_histogram(&profile_histogram(profile, tonic));
                assert_eq!(key.tonic, tonic, "tonic for {:?} {}", mode, tonic);
                assert_eq!(key.mode, mode, "mode for {:?} {}", mode, tonic);
                assert!(
                    key.confidence > 0.999,
                    "confidence {} for {:?} {}",
                    key.confidence,
                    mode,
                    tonic
                );
            }
        }
    }

    #[test]
    fn test_c_major_triad() {
        let pitches: Vec<u8> = [60u8, 64, 67].repeat(20);
        let key = detect_key(&Score::from_pitches(&pitches));
        assert_eq!(key.tonic, 0);
        assert_eq!(key.mode, Mode::Major);
        assert!(key.confidence > 0.8, "confidence {}", key.confidence);
    }

    #[test]
    fn test_uniform_histogram_tie_break() {
        // A flat histogram has zero variance, so every candidate
        // correlates at exactly 0 and the first in scan order wins.
        let key = detect_key_from_histogram(&PitchHistogram {
            bins: [1.0 / 12.0; 12],
            total_notes: 12,
        });
        assert_eq!(key.tonic, 0);
        assert_eq!(key.mode, Mode::Major);
        assert_eq!(key.confidence, 0.5);
    }

    #[test]
    fn test_minor_melody() {
        // A natural minor with the tonic and dominant emphasized
        let pitches: Vec<u8> = vec![57, 57, 57, 57, 64, 64, 64, 60, 60, 59, 62, 65, 67];
        let key = detect_key(&Score::from_pitches(&pitches));
        assert_eq!(key.tonic, 9);
        assert_eq!(key.mode, Mode::Minor);
        assert!(key.confidence > 0.5);
    }
}
