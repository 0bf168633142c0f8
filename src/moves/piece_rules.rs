//! Shared geometry helpers and per-kind rule dispatch.
//!
//! Piece rules only look at the board, the descriptor, the en-passant target
//! and castling rights. Whether the mover's king ends up attacked is decided
//! one layer up, in the game state.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::validate_bishop_move;
use crate::moves::king_moves::validate_king_move;
use crate::moves::knight_moves::validate_knight_move;
use crate::moves::move_descriptions::MoveDescription;
use crate::moves::pawn_moves::validate_pawn_move;
use crate::moves::queen_moves::validate_queen_move;
use crate::moves::rook_moves::validate_rook_move;

/// Position facts a piece rule may consult.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub board: &'a Board,
    pub en_passant_target: Option<Square>,
    pub castling_rights: CastlingRights,
}

impl<'a> RuleContext<'a> {
    pub fn for_game(game_state: &'a GameState) -> Self {
        Self {
            board: game_state.board(),
            en_passant_target: game_state.en_passant_target(),
            castling_rights: game_state.castling_rights(),
        }
    }

    /// Context for attack probes. Castling and en passant never attack a
    /// square, so both are switched off.
    pub fn attack_probe(board: &'a Board) -> Self {
        Self {
            board,
            en_passant_target: None,
            castling_rights: CastlingRights::NONE,
        }
    }
}

/// Run the rule for the moved piece's kind.
pub fn validate_geometry(mv: &mut MoveDescription, ctx: &RuleContext<'_>) -> bool {
    let Some(piece) = mv.piece_moved else {
        return false;
    };

    match piece.kind {
        PieceKind::Pawn => validate_pawn_move(mv, ctx),
        PieceKind::Knight => validate_knight_move(mv),
        PieceKind::Bishop => validate_bishop_move(mv, ctx),
        PieceKind::Rook => validate_rook_move(mv, ctx),
        PieceKind::Queen => validate_queen_move(mv, ctx),
        PieceKind::King => validate_king_move(mv, ctx),
    }
}

/// Squares from `start` to `end`, both inclusive, along a rank, file or
/// diagonal. `None` when the squares are not aligned.
pub fn path_squares(start: Square, end: Square) -> Option<Vec<Square>> {
    let d_row = end.row() as i8 - start.row() as i8;
    let d_col = end.col() as i8 - start.col() as i8;

    let aligned = d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs();
    if !aligned {
        return None;
    }

    let steps = d_row.abs().max(d_col.abs());
    let (step_row, step_col) = (d_row.signum(), d_col.signum());

    (0..=steps)
        .map(|i| start.offset(i * step_row, i * step_col))
        .collect()
}

/// True when every square strictly between `start` and `end` is empty.
/// Unaligned squares never have a clear path.
pub fn is_path_clear(board: &Board, start: Square, end: Square) -> bool {
    let Some(path) = path_squares(start, end) else {
        return false;
    };
    if path.len() < 2 {
        return true;
    }
    path[1..path.len() - 1]
        .iter()
        .all(|sq| board.is_empty_at(*sq))
}

/// Destination holds a piece of the mover's color.
pub fn is_friendly_fire(mv: &MoveDescription) -> bool {
    match (mv.piece_moved, mv.piece_captured) {
        (Some(moved), Some(target)) => moved.color == target.color,
        _ => false,
    }
}

#[inline]
pub(crate) fn deltas(mv: &MoveDescription) -> (i8, i8) {
    (
        mv.end.row() as i8 - mv.start.row() as i8,
        mv.end.col() as i8 - mv.start.col() as i8,
    )
}
