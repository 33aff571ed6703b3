//! Time-bounded move selection for a chess-playing agent.
//!
//! Board representation, legal-move generation, and position hashing come
//! from the `chess` crate; this crate layers a [`Position`] adapter, a
//! tapered piece-square evaluation, a transposition table, and an
//! iterative-deepening principal-variation search on top of it.

pub mod eval;
pub mod position;
pub mod search;
pub mod time;

pub use eval::evaluate;
pub use position::Position;
pub use search::{Agent, Decision};
pub use time::{Clock, OutOfTime};
