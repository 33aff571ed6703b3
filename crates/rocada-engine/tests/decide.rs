//! End-to-end decision tests against the public crate surface.

use std::time::Duration;

use rocada_engine::{Agent, Clock, Position};

fn agent() -> Agent {
    Agent::with_table_entries(1 << 18)
}

#[test]
fn opening_decision_under_a_real_clock() {
    let mut pos = Position::new();
    let clock = Clock::new(Duration::from_secs(15));

    let decision = agent().decide(&mut pos, &clock).unwrap();

    assert!(pos.legal_moves().contains(&decision.mv));
    assert!(
        decision.depth >= 4,
        "only reached depth {} on a half-second budget",
        decision.depth
    );
    assert!(decision.nodes > 0);
}

#[test]
fn mate_in_one_under_a_real_clock() {
    let mut pos: Position =
        "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4"
            .parse()
            .unwrap();
    let clock = Clock::new(Duration::from_secs(6));

    let decision = agent().decide(&mut pos, &clock).unwrap();
    assert_eq!(decision.mv.to_string(), "h5f7");
}

#[test]
fn agent_plays_consecutive_moves_of_a_game() {
    // The cache carries over between decisions; each reply must still be
    // legal in the position it was asked about.
    let mut agent = agent();
    let mut pos = Position::new();

    for _ in 0..6 {
        let clock = Clock::new(Duration::from_secs(3));
        let decision = agent.decide(&mut pos, &clock).unwrap();
        assert!(pos.legal_moves().contains(&decision.mv));
        pos.make(decision.mv);
    }
}

#[test]
fn exhausted_clock_still_produces_a_move() {
    let mut pos = Position::new();
    let clock = Clock::new(Duration::ZERO);

    let decision = agent().decide(&mut pos, &clock).unwrap();
    assert!(pos.legal_moves().contains(&decision.mv));
}

#[test]
fn no_decision_without_legal_moves() {
    let mut mated: Position = "7k/6Q1/5K2/8/8/8/8/8 b - - 0 1".parse().unwrap();
    let clock = Clock::new(Duration::from_secs(1));
    assert!(agent().decide(&mut mated, &clock).is_none());
}
