use std::time::Duration;

use anyhow::Result;
use rocada_engine::{Agent, Clock, Position};
use tracing::info;

/// Decide one move from the command line.
///
/// Usage: `rocada [FEN] [CLOCK_MILLIS]`. Defaults to the starting position
/// with five seconds on the game clock.
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let mut pos: Position = match args.next() {
        Some(fen) => fen.parse()?,
        None => Position::new(),
    };
    let millis: u64 = match args.next() {
        Some(raw) => raw.parse()?,
        None => 5_000,
    };

    info!(millis, "rocada starting");

    let mut agent = Agent::new();
    let clock = Clock::new(Duration::from_millis(millis));
    match agent.decide(&mut pos, &clock) {
        Some(decision) => {
            info!(
                score = decision.score,
                depth = decision.depth,
                nodes = decision.nodes,
                "search finished"
            );
            println!("bestmove {}", decision.mv);
        }
        None => println!("bestmove (none)"),
    }

    Ok(())
}
