//! Per-score key memoization
//!
//! Key detection walks every note of the score, while downstream
//! consumers (per-note degree labels) may ask for the same key hundreds
//! of times per render. The analysis functions themselves stay pure;
//! this single-entry cache is the boundary adapter hosts can use to
//! avoid re-running the full traversal for an unchanged score.

use crate::features::key::detect_key;
use crate::score::Score;

use super::result::KeyInfo;

/// Single-entry memoizer for [`detect_key`], keyed by score identity
///
/// Identity is the score's address, mirroring a host that keeps one
/// loaded score alive at a time. The entry must be dropped with
/// [`KeyCache::invalidate`] whenever a new score is loaded; an address
/// reused by a different score would otherwise serve a stale key.
///
/// # Example
///
/// ```
/// use score_theory::{KeyCache, Score};
///
/// let score = Score::from_pitches(&[60, 64, 67]);
/// let mut cache = KeyCache::new();
///
/// let first = cache.get_or_detect(&score);
/// let second = cache.get_or_detect(&score); // served from the cache
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Default)]
pub struct KeyCache {
    entry: Option<(usize, KeyInfo)>,
}

impl KeyCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached key for this score, detecting it on a miss
    pub fn get_or_detect(&mut self, score: &Score) -> KeyInfo {
        let id = score as *const Score as usize;
        if let Some((cached_id, key)) = self.entry {
            if cached_id == id {
                log::debug!("Key cache hit: {}", key.name());
                return key;
            }
        }
        let key = detect_key(score);
        self.entry = Some((id, key));
        key
    }

    /// Drop the cached entry. Must be called when a new score is loaded.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::{Beat, Note};

    #[test]
    fn test_cache_serves_stale_entry_until_invalidated() {
        let mut score = Score::from_pitches(&[60, 64, 67, 60, 64, 67]);
        let mut cache = KeyCache::new();

        let first = cache.get_or_detect(&score);
        assert_eq!(first.tonic, 0);

        // Mutating the score in place does not change its identity, so
        // the cache keeps answering with the old key.
        let beats = &mut score.tracks[0].staves[0].bars[0].voices[0].beats;
        for pitch in [57, 60, 64, 57, 60, 64, 57, 57, 57, 57] {
            beats.push(Beat {
                notes: vec![Note::new(pitch)],
            });
        }
        let cached = cache.get_or_detect(&score);
        assert_eq!(cached, first);

        // After invalidation the key is recomputed from the new notes.
        cache.invalidate();
        let fresh = cache.get_or_detect(&score);
        assert_ne!(fresh, first);
    }
}
