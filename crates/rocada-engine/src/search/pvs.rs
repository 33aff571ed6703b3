//! Recursive principal-variation search.
//!
//! Negamax with alpha-beta pruning, a quiescence extension for captures and
//! promotions, null-move pruning, reverse-futility and futility pruning,
//! and cooperative time abort. Time exhaustion surfaces as an
//! [`OutOfTime`] error unwinding through `?`, so a timed-out node can never
//! store a half-baked score in the position cache.

use std::time::Duration;

use chess::ChessMove;

use crate::eval::evaluate;
use crate::position::Position;
use crate::search::heuristics::HistoryTable;
use crate::search::ordering::MovePicker;
use crate::search::tt::{Bound, TranspositionTable};
use crate::time::{Clock, OutOfTime};

/// Window bound no real score can reach.
pub(super) const INF: i32 = 100_000;

/// Base magnitude for mate scores; a mate at ply `p` scores `p - MATE`,
/// so nearer mates are further from zero.
pub(super) const MATE: i32 = 100_000;

/// Scores at or beyond this magnitude are mate-range, not evaluations.
pub(super) const MATE_BOUND: i32 = 50_000;

/// Hard cap on ply from root; deeper lines are scored as drawn.
const MAX_PLY: i32 = 50;

/// Mutable search state threaded through the recursion.
pub(super) struct SearchContext<'a> {
    /// Position cache, persistent across decisions.
    pub tt: &'a mut TranspositionTable,
    /// Quiet-move cutoff counters, reset per decision.
    pub history: &'a mut HistoryTable,
    /// Countdown clock for the current decision.
    pub clock: &'a Clock,
    /// Share of the clock this decision may spend.
    pub budget: Duration,
    /// Best root move seen so far; written only at ply 0.
    pub best_move: Option<ChessMove>,
    /// Nodes visited.
    pub nodes: u64,
}

impl SearchContext<'_> {
    fn out_of_time(&self) -> bool {
        self.clock.elapsed() > self.budget
    }
}

/// Search `pos` to `depth` remaining plies. `depth < 1` means quiescence.
///
/// Returns the score from the side to move's perspective, or
/// [`OutOfTime`] if the budget expired mid-node. The best root move is
/// reported through [`SearchContext::best_move`].
pub(super) fn pvs(
    pos: &mut Position,
    depth: i32,
    ply: i32,
    mut alpha: i32,
    mut beta: i32,
    allow_null: bool,
    ctx: &mut SearchContext<'_>,
) -> Result<i32, OutOfTime> {
    ctx.nodes += 1;

    let root = ply == 0;
    let in_q = depth < 1;
    let in_check = pos.in_check();
    let alpha_start = alpha;

    // The cache cannot see repetitions, and a winnable game must not be
    // steered into one; score them as drawn before consulting it.
    if !root && (pos.is_repetition() || ply >= MAX_PLY) {
        return Ok(0);
    }

    let key = pos.hash();
    let cached = ctx.tt.probe(key);
    let hash_move = cached.and_then(|entry| entry.best_move);

    if let Some(entry) = cached
        && !root
        && entry.depth >= depth
    {
        match entry.bound {
            Bound::Exact => return Ok(entry.score),
            Bound::Lower => alpha = alpha.max(entry.score),
            Bound::Upper => beta = beta.min(entry.score),
        }
        if beta <= alpha {
            return Ok(entry.score);
        }
    }

    let mut best_score = -INF;
    let mut best_move = None;
    let mut futile = false;

    if in_q {
        // Stand pat: the side to move may decline every capture.
        best_score = evaluate(pos);
        if best_score >= beta {
            return Ok(best_score);
        }
        alpha = alpha.max(best_score);
    } else if !in_check {
        let static_eval = evaluate(pos);

        // Reverse futility: already so far above beta at shallow depth
        // that losing a margin per ply still fails high.
        if depth < 4 && beta < MATE_BOUND && static_eval - 100 * depth >= beta {
            return Ok(static_eval);
        }

        // Null move: hand the opponent a free move at reduced depth; if
        // they still cannot reach beta, neither will any real line.
        if depth > 1 && allow_null && pos.make_null() {
            let result = pvs(pos, depth - 3, ply + 1, -beta, 1 - beta, false, ctx);
            pos.undo();
            let null_score = -result?;
            if null_score >= beta {
                return Ok(null_score);
            }
        }

        // Futility: when even a generous margin cannot lift the static
        // eval to alpha, only tactical moves are worth searching.
        if depth <= 6 {
            futile = static_eval + 100 * depth <= alpha;
        }
    }

    let moves = if in_q {
        pos.tactical_moves()
    } else {
        pos.legal_moves()
    };
    let mut picker = MovePicker::new(&moves, pos, hash_move, ctx.history);
    let mut searched = 0;

    while let Some(mv) = picker.pick_next() {
        let quiet = !pos.is_capture(mv) && mv.get_promotion().is_none();

        // Keep at least one fully searched line before futility-skipping.
        if futile && quiet && searched > 0 {
            continue;
        }

        let side = pos.side_to_move();
        let piece = pos.moving_piece(mv);

        let full_window = in_q || searched == 0;
        if !in_q {
            searched += 1;
        }

        pos.make(mv);
        let outcome = search_child(pos, depth, ply, alpha, beta, full_window, allow_null, ctx);
        pos.undo();
        let score = outcome?;

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
            if root {
                ctx.best_move = Some(mv);
            }
            alpha = alpha.max(score);
            if beta <= alpha {
                if quiet {
                    ctx.history.reward(side, piece, mv.get_dest(), depth);
                }
                break;
            }
        }

        if ctx.out_of_time() {
            return Err(OutOfTime);
        }
    }

    // Checkmate or stalemate; quiescence running out of captures is not
    // terminal, the stand-pat score already covers it.
    if !in_q && moves.is_empty() {
        return Ok(if in_check { ply - MATE } else { 0 });
    }

    let bound = if best_score <= alpha_start {
        Bound::Upper
    } else if best_score >= beta {
        Bound::Lower
    } else {
        Bound::Exact
    };
    ctx.tt.store(key, best_score, depth, bound, best_move);

    Ok(best_score)
}

/// Search one child position: full window for the first move and in
/// quiescence, otherwise a null-window probe with a full re-search when
/// the probe suggests the move beats alpha.
#[allow(clippy::too_many_arguments)]
fn search_child(
    pos: &mut Position,
    depth: i32,
    ply: i32,
    alpha: i32,
    beta: i32,
    full_window: bool,
    allow_null: bool,
    ctx: &mut SearchContext<'_>,
) -> Result<i32, OutOfTime> {
    let probe_alpha = if full_window { -beta } else { -alpha - 1 };
    let mut score = -pvs(
        pos,
        depth - 1,
        ply + 1,
        probe_alpha,
        -alpha,
        !full_window && allow_null,
        ctx,
    )?;

    if !full_window && score > alpha {
        score = -pvs(pos, depth - 1, ply + 1, -beta, -alpha, allow_null, ctx)?;
    }

    Ok(score)
}
