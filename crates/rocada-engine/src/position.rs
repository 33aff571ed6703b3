//! Board collaborator adapter over the `chess` crate.
//!
//! The `chess` crate is copy-make: applying a move produces a new [`Board`].
//! [`Position`] keeps the boards visited along the current line on a stack,
//! which yields the make/undo discipline the search needs, and keeps the
//! hashes of every visited position so repetitions can be detected. Hosts
//! that replay a game should push the game moves through [`Position::make`]
//! so earlier positions count toward repetition.

use std::str::FromStr;

use chess::{BitBoard, Board, ChessMove, Color, EMPTY, MoveGen, Piece};

/// A FEN string the board collaborator could not parse.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid FEN: {fen}")]
pub struct InvalidFen {
    /// The rejected FEN string.
    pub fen: String,
}

/// Current position plus the line of boards leading to it.
#[derive(Debug, Clone)]
pub struct Position {
    /// Boards along the current line; the last element is the current board.
    boards: Vec<Board>,
    /// Zobrist hash of every board in `boards`, in the same order.
    hashes: Vec<u64>,
}

impl Position {
    /// The standard starting position.
    pub fn new() -> Self {
        Self::from_board(Board::default())
    }

    fn from_board(board: Board) -> Self {
        Self {
            hashes: vec![board.get_hash()],
            boards: vec![board],
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        self.boards.last().expect("position stack is never empty")
    }

    /// Side to move on the current board.
    pub fn side_to_move(&self) -> Color {
        self.board().side_to_move()
    }

    /// Whether the side to move is in check.
    pub fn in_check(&self) -> bool {
        *self.board().checkers() != EMPTY
    }

    /// 64-bit Zobrist hash of the current board.
    pub fn hash(&self) -> u64 {
        *self.hashes.last().expect("position stack is never empty")
    }

    /// All legal moves in the current position.
    pub fn legal_moves(&self) -> Vec<ChessMove> {
        MoveGen::new_legal(self.board()).collect()
    }

    /// Legal captures and promotions only, the quiescence move set.
    pub fn tactical_moves(&self) -> Vec<ChessMove> {
        MoveGen::new_legal(self.board())
            .filter(|&mv| self.is_capture(mv) || mv.get_promotion().is_some())
            .collect()
    }

    /// Apply a legal move. Must be paired with a later [`undo`](Self::undo).
    pub fn make(&mut self, mv: ChessMove) {
        let next = self.board().make_move_new(mv);
        self.hashes.push(next.get_hash());
        self.boards.push(next);
    }

    /// Pass the turn to the opponent without moving.
    ///
    /// Returns `false` (and changes nothing) when the side to move is in
    /// check, where a null move would be illegal. Undo with
    /// [`undo`](Self::undo) like a regular move.
    pub fn make_null(&mut self) -> bool {
        match self.board().null_move() {
            Some(next) => {
                self.hashes.push(next.get_hash());
                self.boards.push(next);
                true
            }
            None => false,
        }
    }

    /// Revert the most recent [`make`](Self::make) or
    /// [`make_null`](Self::make_null).
    pub fn undo(&mut self) {
        debug_assert!(self.boards.len() > 1, "undo without a matching make");
        self.boards.pop();
        self.hashes.pop();
    }

    /// Whether the current position already occurred earlier in the line.
    pub fn is_repetition(&self) -> bool {
        let (current, earlier) = self
            .hashes
            .split_last()
            .expect("position stack is never empty");
        earlier.contains(current)
    }

    /// Whether `mv` captures a piece (including en passant).
    pub fn is_capture(&self, mv: ChessMove) -> bool {
        let board = self.board();
        if board.piece_on(mv.get_dest()).is_some() {
            return true;
        }
        // A pawn moving diagonally to an empty square is en passant.
        board.piece_on(mv.get_source()) == Some(Piece::Pawn)
            && mv.get_source().get_file() != mv.get_dest().get_file()
    }

    /// The kind of piece `mv` moves.
    pub fn moving_piece(&self, mv: ChessMove) -> Piece {
        self.board()
            .piece_on(mv.get_source())
            .expect("move source square is occupied")
    }

    /// The kind of piece `mv` captures, if any.
    pub fn victim(&self, mv: ChessMove) -> Option<Piece> {
        let board = self.board();
        match board.piece_on(mv.get_dest()) {
            Some(piece) => Some(piece),
            // En passant: the victim square is empty but a pawn falls.
            None if self.is_capture(mv) => Some(Piece::Pawn),
            None => None,
        }
    }

    /// Bitboard of squares holding pieces of the given kind and colour.
    pub fn pieces(&self, piece: Piece, color: Color) -> BitBoard {
        let board = self.board();
        *board.pieces(piece) & *board.color_combined(color)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Position {
    type Err = InvalidFen;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        let board = Board::from_str(fen).map_err(|_| InvalidFen {
            fen: fen.to_string(),
        })?;
        Ok(Self::from_board(board))
    }
}
