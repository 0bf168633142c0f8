//! King rule: single steps plus castling eligibility.
//!
//! Castling here only checks rights, rook presence and empty squares between
//! king and rook. The attacked-square conditions need the attack detector
//! and are enforced by the game state during validation.

use crate::game_state::chess_rules::{KING_HOME_COL, KING_SIDE_ROOK_COL, QUEEN_SIDE_ROOK_COL};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{MoveDescription, SpecialMove};
use crate::moves::piece_rules::{deltas, is_friendly_fire, is_path_clear, RuleContext};

pub fn validate_king_move(mv: &mut MoveDescription, ctx: &RuleContext<'_>) -> bool {
    let Some(king) = mv.piece_moved else {
        return false;
    };
    if is_friendly_fire(mv) {
        return false;
    }

    let (d_row, d_col) = deltas(mv);
    let (d_row, d_col) = (d_row.abs(), d_col.abs());

    if d_row <= 1 && d_col <= 1 {
        return d_row + d_col > 0;
    }
    if d_row == 0 && d_col == 2 {
        return validate_castling(mv, king.color, ctx);
    }
    false
}

fn validate_castling(mv: &mut MoveDescription, color: Color, ctx: &RuleContext<'_>) -> bool {
    let home = Square::new(color.home_row(), KING_HOME_COL);
    if mv.start != home || !ctx.castling_rights.allows(color) {
        return false;
    }

    let king_side = mv.end.col() > mv.start.col();
    let rook_col = if king_side {
        KING_SIDE_ROOK_COL
    } else {
        QUEEN_SIDE_ROOK_COL
    };
    let rook_from = Square::new(home.row(), rook_col);

    if ctx.board.get(rook_from) != Some(Piece::new(color, PieceKind::Rook)) {
        return false;
    }
    if !is_path_clear(ctx.board, home, rook_from) {
        return false;
    }

    let rook_to_col = if king_side {
        mv.end.col() - 1
    } else {
        mv.end.col() + 1
    };
    mv.special = SpecialMove::Castling {
        rook_from,
        rook_to: Square::new(home.row(), rook_to_col),
    };
    true
}
