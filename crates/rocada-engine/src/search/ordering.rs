//! Move ordering: cache hint, MVV-LVA captures, promotions, history quiets.

use chess::{ChessMove, Piece};

use crate::position::Position;
use crate::search::heuristics::HistoryTable;

/// Priority of the cached best move for the position.
const HASH_MOVE: i32 = 1_000_000;

/// Band separating captures and promotions from quiet moves.
const TACTICAL_BASE: i32 = 100_000;

/// Score a move for ordering. Higher scores are searched first.
///
/// Bands, highest first:
/// 1. The cached best move.
/// 2. Captures by MVV-LVA: `100,000 * victim - attacker`, piece ranks 1..6.
///    A capture that also promotes scores as a capture.
/// 3. Promotions, flat.
/// 4. Quiet moves by their history counter; never-cutoff quiets sort last.
fn score_move(
    pos: &Position,
    mv: ChessMove,
    hash_move: Option<ChessMove>,
    history: &HistoryTable,
) -> i32 {
    if Some(mv) == hash_move {
        return HASH_MOVE;
    }
    if let Some(victim) = pos.victim(mv) {
        return TACTICAL_BASE * piece_rank(victim) - piece_rank(pos.moving_piece(mv));
    }
    if mv.get_promotion().is_some() {
        return TACTICAL_BASE;
    }
    history.score_move(pos, mv)
}

/// 1-based piece rank, pawn..king. The 1-based victim keeps even pawn
/// captures inside the tactical band, just below a flat promotion.
fn piece_rank(piece: Piece) -> i32 {
    piece.to_index() as i32 + 1
}

/// Incremental picker yielding moves in descending score order.
///
/// Scores are computed once up front; each [`pick_next`](Self::pick_next)
/// selection-sorts the best remaining move to the cursor. No stable-order
/// guarantee between equal scores.
pub struct MovePicker {
    moves: Vec<ChessMove>,
    scores: Vec<i32>,
    cursor: usize,
}

impl MovePicker {
    /// Score `moves` for the current position.
    pub fn new(
        moves: &[ChessMove],
        pos: &Position,
        hash_move: Option<ChessMove>,
        history: &HistoryTable,
    ) -> Self {
        Self {
            moves: moves.to_vec(),
            scores: moves
                .iter()
                .map(|&mv| score_move(pos, mv, hash_move, history))
                .collect(),
            cursor: 0,
        }
    }

    /// Yield the next highest-scored move, or `None` when exhausted.
    pub fn pick_next(&mut self) -> Option<ChessMove> {
        if self.cursor >= self.moves.len() {
            return None;
        }

        let mut best = self.cursor;
        for i in (self.cursor + 1)..self.moves.len() {
            if self.scores[i] > self.scores[best] {
                best = i;
            }
        }
        self.moves.swap(self.cursor, best);
        self.scores.swap(self.cursor, best);

        let mv = self.moves[self.cursor];
        self.cursor += 1;
        Some(mv)
    }
}
