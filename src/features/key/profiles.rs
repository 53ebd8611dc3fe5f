//! Krumhansl-Schmuckler tonal profiles
//!
//! Each profile gives the empirically expected relative weight of each
//! scale step when the tonic is pitch class 0. The detector rotates
//! them over all 12 candidate tonics.

/// Major-key tonal profile (tonic at index 0)
pub const MAJOR_PROFILE: [f64; 12] = [
    6.35, 2.23, 3.48, 2.33, 4.38, 4.09, 2.52, 5.19, 2.39, 3.66, 2.29, 2.88,
];

/// Minor-key tonal profile (tonic at index 0)
pub const MINOR_PROFILE: [f64; 12] = [
    6.33, 2.68, 3.52, 5.38, 2.60, 3.53, 2.54, 4.75, 3.98, 2.69, 3.34, 3.17,
];
