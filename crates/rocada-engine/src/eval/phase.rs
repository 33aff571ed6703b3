//! Game-phase scalar derived from the material left on the board.

use chess::{ALL_COLORS, ALL_PIECES};

use crate::position::Position;

/// Phase contribution per piece kind (pawn, knight, bishop, rook, queen,
/// king). Kings and pawns carry no phase weight.
pub const PHASE_WEIGHT: [i32; 6] = [0, 1, 1, 2, 4, 0];

/// Phase value of a full starting-position complement of minor and major
/// pieces: 4×1 + 4×1 + 4×2 + 2×4.
pub const MAX_PHASE: i32 = 24;

/// Material phase of the position, clamped to `0..=MAX_PHASE`.
///
/// [`MAX_PHASE`] is the full middlegame set; 0 is a pure pawn ending.
/// Counts both sides, so the scalar is independent of the side to move;
/// the clamp keeps promoted pieces from pushing it past the maximum.
pub fn game_phase(pos: &Position) -> i32 {
    let mut phase = 0;
    for color in ALL_COLORS {
        for piece in ALL_PIECES {
            let count = pos.pieces(piece, color).popcnt() as i32;
            phase += PHASE_WEIGHT[piece.to_index()] * count;
        }
    }
    phase.min(MAX_PHASE)
}

#[cfg(test)]
mod tests {
    use crate::position::Position;

    use super::{MAX_PHASE, game_phase};

    #[test]
    fn starting_position_is_max_phase() {
        assert_eq!(game_phase(&Position::new()), MAX_PHASE);
    }

    #[test]
    fn bare_kings_is_zero_phase() {
        let pos: Position = "8/8/4k3/8/8/4K3/8/8 w - - 0 1".parse().unwrap();
        assert_eq!(game_phase(&pos), 0);
    }

    #[test]
    fn missing_queen_drops_four() {
        let pos: Position = "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
            .parse()
            .unwrap();
        assert_eq!(game_phase(&pos), 20);
    }

    #[test]
    fn phase_is_side_independent() {
        let white: Position = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
            .parse()
            .unwrap();
        let black: Position = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1"
            .parse()
            .unwrap();
        assert_eq!(game_phase(&white), game_phase(&black));
    }

    #[test]
    fn extra_promoted_queens_stay_clamped() {
        // Three queens apiece would exceed the nominal maximum.
        let pos: Position = "QQQ1k3/8/8/8/8/8/8/qqq1K3 w - - 0 1".parse().unwrap();
        assert_eq!(game_phase(&pos), MAX_PHASE);
    }
}
