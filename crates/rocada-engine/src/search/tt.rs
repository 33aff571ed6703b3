//! Direct-mapped position cache.
//!
//! One entry per slot, slot index = `hash & (size - 1)`, and a store always
//! overwrites whatever occupies the slot: no chaining, no depth-preferred
//! replacement. Two positions that map to the same slot evict each other;
//! that costs search strength, never correctness, because a probe only
//! trusts an entry whose full key matches. The search is single-threaded,
//! so plain loads and stores suffice.

use chess::ChessMove;

/// How a cached score bounds the true value of the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The score failed high; the true value is at least this.
    Lower,
    /// The score is exact.
    Exact,
    /// The score failed low; the true value is at most this.
    Upper,
}

/// A previously computed search result for one position.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    /// Full Zobrist hash, checked on probe to guard against slot collisions.
    pub key: u64,
    /// Search score in centipawns from the stored side to move.
    pub score: i32,
    /// Remaining depth the score was computed with. Negative in quiescence.
    pub depth: i32,
    /// How `score` bounds the true value.
    pub bound: Bound,
    /// Best move found, used as an ordering hint on later visits.
    pub best_move: Option<ChessMove>,
}

/// Default table size: 2^22 entries.
const DEFAULT_ENTRIES: usize = 1 << 22;

/// Fixed-size direct-mapped transposition table.
pub struct TranspositionTable {
    slots: Box<[Option<Entry>]>,
    mask: u64,
}

impl TranspositionTable {
    /// Create a table with `entries` slots. `entries` must be a power of two.
    pub fn with_entries(entries: usize) -> Self {
        assert!(
            entries.is_power_of_two(),
            "table size must be a power of two"
        );
        Self {
            slots: vec![None; entries].into_boxed_slice(),
            mask: (entries - 1) as u64,
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the table has zero slots (never true in practice).
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Look up the entry for `hash`, if its slot holds a matching key.
    pub fn probe(&self, hash: u64) -> Option<Entry> {
        let entry = self.slots[(hash & self.mask) as usize]?;
        (entry.key == hash).then_some(entry)
    }

    /// Store an entry, unconditionally overwriting the slot's occupant.
    pub fn store(
        &mut self,
        hash: u64,
        score: i32,
        depth: i32,
        bound: Bound,
        best_move: Option<ChessMove>,
    ) {
        self.slots[(hash & self.mask) as usize] = Some(Entry {
            key: hash,
            score,
            depth,
            bound,
            best_move,
        });
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::with_entries(DEFAULT_ENTRIES)
    }
}

impl std::fmt::Debug for TranspositionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranspositionTable")
            .field("entries", &self.slots.len())
            .finish()
    }
}
