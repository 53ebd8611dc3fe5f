//! Analysis result types and boundary adapters
//!
//! - Result types handed to the host (key, tuning)
//! - Per-score key memoization for repeated downstream lookups

pub mod cache;
pub mod result;
