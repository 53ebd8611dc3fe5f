//! Analysis feature modules
//!
//! This module contains the analysis algorithms:
//! - Pitch-class histogram
//! - Key detection (Krumhansl-Schmuckler)
//! - Scale degrees and per-note degree mapping
//! - Tuning identification
//! - Fretboard note naming

pub mod fretboard;
pub mod histogram;
pub mod key;
pub mod scale;
pub mod tuning;
