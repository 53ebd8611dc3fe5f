//! Error types for the score analysis core

use std::fmt;

/// Errors that can occur during score analysis
///
/// Analysis over a score never fails: empty scores, absent tunings and
/// out-of-scale notes all produce defined sentinel results. The only
/// fallible surface is the fretboard helpers, where an out-of-range fret
/// or string index is a caller contract violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TheoryError {
    /// Invalid input parameters
    InvalidInput(String),
}

impl fmt::Display for TheoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TheoryError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for TheoryError {}
