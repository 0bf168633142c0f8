//! Errors returned by the text-facing parts of the crate.
//!
//! The rules core never fails: an illegal move is reported through the
//! move's validity flag and an undo with no history is a no-op. `ChessError`
//! covers the inputs that arrive as text (FEN, square and move notation,
//! promotion choices) and the convenience helpers that play a move from
//! notation.

use crate::game_state::chess_types::PieceKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    #[error("invalid FEN string: {0}")]
    InvalidFen(String),

    #[error("invalid position: {0}")]
    InvalidPosition(String),

    #[error("invalid square notation: {0}")]
    InvalidSquare(String),

    #[error("invalid move notation: {0}")]
    InvalidNotation(String),

    #[error("invalid promotion piece: {0:?}")]
    InvalidPromotion(PieceKind),

    #[error("illegal move: {0}")]
    IllegalMove(String),
}
