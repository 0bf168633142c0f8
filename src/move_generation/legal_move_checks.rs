//! Attack and check detection.
//!
//! A square is attacked when any attacker piece could capture on it under its
//! own geometry rule. Check-safety is never consulted here, which keeps the
//! probe from recursing back into full validation.

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::MoveDescription;
use crate::moves::piece_rules::{validate_geometry, RuleContext};

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.find(Piece::new(color, PieceKind::King))
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    !attackers_to_square(board, square, attacker_color).is_empty()
}

/// Squares holding `attacker_color` pieces that attack `square`.
///
/// The target is treated as an enemy-occupied square, so pawns count only
/// their diagonal captures and the answer does not depend on what stands
/// on `square`.
pub fn attackers_to_square(board: &Board, square: Square, attacker_color: Color) -> Vec<Square> {
    let mut target = *board;
    target.set(square, Some(Piece::new(attacker_color.opposite(), PieceKind::Knight)));
    let ctx = RuleContext::attack_probe(&target);

    board
        .pieces()
        .filter(|(from, piece)| piece.color == attacker_color && *from != square)
        .filter_map(|(from, _)| {
            let mut probe = MoveDescription::on_board(from, square, &target);
            validate_geometry(&mut probe, &ctx).then_some(from)
        })
        .collect()
}

/// Panics when `color` has no king: positions without one are rejected on
/// construction, so reaching this is a broken invariant.
pub fn is_king_attacked(board: &Board, color: Color) -> bool {
    let king = king_square(board, color)
        .unwrap_or_else(|| panic!("board has no {color} king"));
    is_square_attacked(board, king, color.opposite())
}

impl GameState {
    /// Square of the side-to-move's king.
    pub fn get_king_position(&self) -> Square {
        let color = self.side_to_move;
        king_square(&self.board, color).unwrap_or_else(|| panic!("board has no {color} king"))
    }

    pub fn is_square_under_attack(&self, square: Square, attacker_color: Color) -> bool {
        is_square_attacked(&self.board, square, attacker_color)
    }

    pub fn is_in_check(&self) -> bool {
        self.is_square_under_attack(self.get_king_position(), self.side_to_move.opposite())
    }

    /// Enemy pieces currently giving check to the side to move.
    pub fn checkers(&self) -> Vec<Square> {
        attackers_to_square(
            &self.board,
            self.get_king_position(),
            self.side_to_move.opposite(),
        )
    }
}
