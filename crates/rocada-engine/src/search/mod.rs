//! Iterative-deepening search driver.

pub mod heuristics;
pub mod ordering;
pub mod tt;

mod pvs;

use std::time::Duration;

use chess::ChessMove;
use tracing::{debug, info};

use crate::position::Position;
use crate::search::heuristics::HistoryTable;
use crate::search::pvs::{INF, SearchContext, pvs};
use crate::search::tt::TranspositionTable;
use crate::time::{Clock, OutOfTime, move_budget};

/// Hard cap on iterative-deepening depth.
const MAX_DEPTH: i32 = 50;

/// Outcome of one move decision.
#[derive(Debug, Clone, Copy)]
pub struct Decision {
    /// The chosen move.
    pub mv: ChessMove,
    /// Score of the last completed iteration, centipawns for the mover.
    pub score: i32,
    /// Deepest iteration that started.
    pub depth: i32,
    /// Nodes visited across all iterations.
    pub nodes: u64,
}

/// The move-choosing agent: position cache, history heuristic, and the
/// iterative-deepening driver around the recursive search.
///
/// The cache persists across decisions and games; stale entries are
/// harmless because probes check the full hash. The history table is
/// rebuilt for every decision.
pub struct Agent {
    tt: TranspositionTable,
    history: HistoryTable,
}

impl Agent {
    /// Agent with the default-sized position cache (2^22 entries).
    pub fn new() -> Self {
        Self {
            tt: TranspositionTable::default(),
            history: HistoryTable::new(),
        }
    }

    /// Agent with a custom cache size; `entries` must be a power of two.
    pub fn with_table_entries(entries: usize) -> Self {
        Self {
            tt: TranspositionTable::with_entries(entries),
            history: HistoryTable::new(),
        }
    }

    /// Choose a move for `pos` under the game clock.
    ///
    /// Spends a fixed fraction of the remaining clock, deepening one ply at
    /// a time and keeping the best root move of the deepest iteration that
    /// started. Returns `None` only when the position has no legal moves;
    /// under extreme time pressure the fallback is the first legal move.
    pub fn decide(&mut self, pos: &mut Position, clock: &Clock) -> Option<Decision> {
        self.run(pos, clock, MAX_DEPTH - 1)
    }

    /// Choose a move searching to a fixed depth, ignoring the wall clock.
    ///
    /// Deterministic for a given cache state; used by hosts that want
    /// reproducible play and by tests.
    pub fn decide_to_depth(&mut self, pos: &mut Position, max_depth: i32) -> Option<Decision> {
        let clock = Clock::new(Duration::from_secs(86_400));
        self.run(pos, &clock, max_depth.clamp(1, MAX_DEPTH - 1))
    }

    fn run(&mut self, pos: &mut Position, clock: &Clock, max_depth: i32) -> Option<Decision> {
        let budget = move_budget(clock.remaining());
        self.history.clear();

        let mut ctx = SearchContext {
            tt: &mut self.tt,
            history: &mut self.history,
            clock,
            budget,
            best_move: None,
            nodes: 0,
        };

        let mut score = 0;
        let mut deepest = 0;

        for depth in 1..=max_depth {
            deepest = depth;
            match pvs(pos, depth, 0, -INF, INF, true, &mut ctx) {
                Ok(s) => {
                    score = s;
                    debug!(depth, score, nodes = ctx.nodes, "iteration complete");
                    if clock.elapsed() > budget {
                        break;
                    }
                }
                Err(OutOfTime) => {
                    debug!(depth, nodes = ctx.nodes, "iteration aborted on time");
                    break;
                }
            }
        }

        let nodes = ctx.nodes;
        let mv = ctx
            .best_move
            .or_else(|| pos.legal_moves().into_iter().next())?;
        info!(%mv, score, depth = deepest, nodes, "decision made");
        Some(Decision {
            mv,
            score,
            depth: deepest,
            nodes,
        })
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent").field("tt", &self.tt).finish()
    }
}
