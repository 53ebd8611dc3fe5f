//! Key detection
//!
//! Estimates the key of a score by correlating its pitch-class
//! histogram against Krumhansl-Schmuckler tonal profiles:
//! - Reference profiles for major and minor
//! - Pearson correlation over all 24 (tonic, mode) candidates
//! - Confidence mapped from the winning correlation

pub mod detector;
pub mod profiles;

pub use detector::{detect_key, detect_key_from_histogram};
pub use profiles::{MAJOR_PROFILE, MINOR_PROFILE};
