//! Transposition cache for search results
//!
//! Maps (board fingerprint, side to move) to the score computed at some
//! remaining depth, so identical positions reached through different move
//! orders are searched once. Entries carry a bound flag because alpha-beta
//! rarely computes exact scores away from the principal variation.
//!
//! There is no eviction: the map grows for the lifetime of the engine.
//! Sessions are one move decision long, so callers bound memory by using a
//! fresh engine (or calling [`TranspositionCache::clear`]) per session.
//!
//! # Example
//!
//! ```
//! use caro::search::{Bound, TranspositionCache};
//! use caro::{Mark, Pos};
//!
//! let mut cache = TranspositionCache::new();
//! cache.store(0xABCD, Mark::X, 3, 1200, Bound::Exact, Some(Pos::new(4, 4)));
//!
//! // Usable at the stored depth or shallower...
//! assert_eq!(cache.probe(0xABCD, Mark::X, 3, -10_000, 10_000), Some(1200));
//! assert_eq!(cache.probe(0xABCD, Mark::X, 2, -10_000, 10_000), Some(1200));
//! // ...but never to answer a deeper request.
//! assert_eq!(cache.probe(0xABCD, Mark::X, 4, -10_000, 10_000), None);
//! ```

use std::collections::HashMap;

use crate::board::{Mark, Pos};

/// How a cached score relates to the true node value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The search completed inside the window
    Exact,
    /// True value >= stored score (cutoff at a maximizing node)
    Lower,
    /// True value <= stored score (cutoff at a minimizing node)
    Upper,
}

/// One cached search result.
#[derive(Debug, Clone, Copy)]
pub struct CacheEntry {
    /// Remaining depth the score was computed at
    pub depth: u8,
    pub score: i32,
    pub bound: Bound,
    /// Best move found, kept for move ordering even when the score itself
    /// is not usable
    pub best_move: Option<Pos>,
}

/// Unbounded (fingerprint, side) -> [`CacheEntry`] map.
#[derive(Debug, Default)]
pub struct TranspositionCache {
    entries: HashMap<(u64, Mark), CacheEntry>,
}

impl TranspositionCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a score usable at `depth` remaining plies under the given
    /// window.
    ///
    /// A hit requires an entry searched at least as deep as the request;
    /// bound entries additionally have to fail the current window the same
    /// way they failed when stored.
    #[must_use]
    pub fn probe(&self, fingerprint: u64, side: Mark, depth: u8, alpha: i32, beta: i32) -> Option<i32> {
        let entry = self.entries.get(&(fingerprint, side))?;
        if entry.depth < depth {
            return None;
        }
        match entry.bound {
            Bound::Exact => Some(entry.score),
            Bound::Lower if entry.score >= beta => Some(entry.score),
            Bound::Upper if entry.score <= alpha => Some(entry.score),
            _ => None,
        }
    }

    /// Best move recorded for a position, regardless of entry depth.
    #[must_use]
    pub fn best_move(&self, fingerprint: u64, side: Mark) -> Option<Pos> {
        self.entries
            .get(&(fingerprint, side))
            .and_then(|e| e.best_move)
    }

    /// Store a result, keeping the deeper entry when the position is
    /// already known.
    pub fn store(
        &mut self,
        fingerprint: u64,
        side: Mark,
        depth: u8,
        score: i32,
        bound: Bound,
        best_move: Option<Pos>,
    ) {
        let entry = CacheEntry {
            depth,
            score,
            bound,
            best_move,
        };
        self.entries
            .entry((fingerprint, side))
            .and_modify(|e| {
                if depth >= e.depth {
                    *e = entry;
                }
            })
            .or_insert(entry);
    }

    /// Number of cached positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry. Call between sessions to bound growth.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
