//! History heuristic for quiet-move ordering.

use chess::{ChessMove, Color, Piece, Square};

use crate::position::Position;

/// Cutoff counters for quiet moves, indexed by side to move, moving piece
/// kind, and destination square.
///
/// Counters only ever grow within one decision: a quiet move that causes a
/// beta cutoff at depth `d` earns `d²`, so cutoffs found deep in the tree
/// dominate the ordering. Reset at the start of every decision.
pub struct HistoryTable {
    counters: [[[i32; 64]; 6]; 2],
}

impl HistoryTable {
    /// Create a zeroed table.
    pub fn new() -> Self {
        Self {
            counters: [[[0; 64]; 6]; 2],
        }
    }

    /// Zero every counter. Called once per top-level decision.
    pub fn clear(&mut self) {
        self.counters = [[[0; 64]; 6]; 2];
    }

    /// Credit a quiet move that caused a beta cutoff at the given depth.
    pub fn reward(&mut self, side: Color, piece: Piece, dest: Square, depth: i32) {
        self.counters[side.to_index()][piece.to_index()][dest.to_index()] += depth * depth;
    }

    /// The counter for a quiet move of `piece` to `dest` by `side`.
    pub fn score(&self, side: Color, piece: Piece, dest: Square) -> i32 {
        self.counters[side.to_index()][piece.to_index()][dest.to_index()]
    }

    /// Convenience lookup for a concrete move in a position.
    pub fn score_move(&self, pos: &Position, mv: ChessMove) -> i32 {
        self.score(pos.side_to_move(), pos.moving_piece(mv), mv.get_dest())
    }
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::new()
    }
}
