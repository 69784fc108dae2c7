//! Transposition table for caching search results.
//!
//! Keyed by Zobrist hash. Entries record the search depth they were
//! computed at and whether the score is exact or a window bound, which
//! lets the searcher reuse or tighten earlier work.
//!
//! Distinct positions colliding on the same 64-bit hash are not detected;
//! with 64-bit keys this is treated as vanishingly rare.

use std::collections::HashMap;

/// How a stored score relates to the search window it was computed in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Bound {
    /// Score is the exact value.
    Exact,
    /// Score is at least this value (search failed high).
    LowerBound,
    /// Score is at most this value (search failed low).
    UpperBound,
}

/// A cached search result.
#[derive(Clone, Copy, Debug)]
pub struct TtEntry {
    pub depth: u32,
    pub score: i32,
    pub bound: Bound,
}

/// Hash-keyed score cache with an always-replace policy.
#[derive(Default)]
pub struct TranspositionTable {
    entries: HashMap<u64, TtEntry>,
}

impl TranspositionTable {
    #[must_use]
    pub fn new() -> Self {
        TranspositionTable {
            entries: HashMap::new(),
        }
    }

    /// Look up a position, requiring the entry to have been searched to at
    /// least `min_depth`. Shallower entries are misses.
    #[must_use]
    pub fn probe(&self, hash: u64, min_depth: u32) -> Option<TtEntry> {
        self.entries
            .get(&hash)
            .copied()
            .filter(|entry| entry.depth >= min_depth)
    }

    /// Insert a result, replacing any existing entry for the hash.
    pub fn store(&mut self, hash: u64, depth: u32, score: i32, bound: Bound) {
        self.entries.insert(hash, TtEntry { depth, score, bound });
    }

    /// Drop every entry. Called once per top-level search to bound memory.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
