//! Pawn rule: pushes, double pushes, captures, en passant and promotion
//! marking.

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{MoveDescription, SpecialMove};
use crate::moves::piece_rules::{deltas, is_friendly_fire, RuleContext};

pub fn validate_pawn_move(mv: &mut MoveDescription, ctx: &RuleContext<'_>) -> bool {
    let Some(pawn) = mv.piece_moved else {
        return false;
    };
    if is_friendly_fire(mv) {
        return false;
    }

    let color = pawn.color;
    let direction = color.pawn_direction();
    let (d_row, d_col) = deltas(mv);

    let valid = if d_col == 0 {
        if mv.piece_captured.is_some() {
            false
        } else if d_row == direction {
            true
        } else if d_row == 2 * direction && mv.start.row() == color.pawn_row() {
            mv.start
                .offset(direction, 0)
                .is_some_and(|skipped| ctx.board.is_empty_at(skipped))
        } else {
            false
        }
    } else if d_col.abs() == 1 && d_row == direction {
        if mv.piece_captured.is_some() {
            true
        } else if ctx.en_passant_target == Some(mv.end) {
            let captured_square = Square::new(mv.start.row(), mv.end.col());
            let victim = Piece::new(color.opposite(), PieceKind::Pawn);
            if ctx.board.get(captured_square) == Some(victim) {
                mv.special = SpecialMove::EnPassant { captured_square };
                true
            } else {
                false
            }
        } else {
            false
        }
    } else {
        false
    };

    if valid && mv.end.row() == color.promotion_row() {
        mv.special = SpecialMove::Promotion { piece: None };
    }

    valid
}

#[cfg(test)]
mod tests {
    use super::validate_pawn_move;
    use crate::game_state::chess_types::*;
    use crate::moves::move_descriptions::{MoveDescription, SpecialMove};
    use crate::moves::piece_rules::RuleContext;

    fn check(game: &GameState, from: (u8, u8), to: (u8, u8)) -> (bool, SpecialMove) {
        let mut mv = MoveDescription::new(Square::new(from.0, from.1), Square::new(to.0, to.1), game);
        let ok = validate_pawn_move(&mut mv, &RuleContext::for_game(game));
        (ok, mv.special())
    }

    #[test]
    fn home_rank_pawn_reaches_both_squares() {
        let game = GameState::new_game();
        assert!(check(&game, (6, 4), (5, 4)).0);
        assert!(check(&game, (6, 4), (4, 4)).0);
        assert!(!check(&game, (6, 4), (3, 4)).0);
        assert!(check(&game, (1, 3), (3, 3)).0);
        // Backwards and sideways.
        assert!(!check(&game, (6, 4), (7, 4)).0);
        assert!(!check(&game, (6, 4), (6, 5)).0);
    }

    #[test]
    fn blocked_adjacent_square_forbids_double_step() {
        // Knight on e3 blocks the e2 pawn; e4 is empty.
        let game = GameState::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1")
            .expect("fixture FEN should parse");
        assert!(!check(&game, (6, 4), (5, 4)).0);
        assert!(!check(&game, (6, 4), (4, 4)).0);
        // The blocker itself is capturable diagonally from d2/f2 only.
        assert!(!check(&game, (6, 4), (5, 3)).0);
    }

    #[test]
    fn double_step_only_from_home_rank() {
        let game = GameState::from_fen("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1")
            .expect("fixture FEN should parse");
        assert!(check(&game, (5, 4), (4, 4)).0);
        assert!(!check(&game, (5, 4), (3, 4)).0);
    }

    #[test]
    fn diagonal_requires_enemy_piece() {
        let game = GameState::from_fen("4k3/8/8/8/3p1P2/4P3/8/4K3 w - - 0 1")
            .expect("fixture FEN should parse");
        // e3 pawn: d4 holds an enemy pawn, f4 a friendly one.
        assert!(check(&game, (5, 4), (4, 3)).0);
        assert!(!check(&game, (5, 4), (4, 5)).0);
        // Straight into an occupied square is never a capture.
        let blocked = GameState::from_fen("4k3/8/8/8/4p3/4P3/8/4K3 w - - 0 1")
            .expect("fixture FEN should parse");
        assert!(!check(&blocked, (5, 4), (4, 4)).0);
    }

    #[test]
    fn en_passant_records_the_captured_pawn_square() {
        // Black just played d7-d5 next to the e5 pawn.
        let game = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2")
            .expect("fixture FEN should parse");
        let (ok, special) = check(&game, (3, 4), (2, 3));
        assert!(ok);
        assert_eq!(
            special,
            SpecialMove::EnPassant {
                captured_square: Square::new(3, 3)
            }
        );
        // Same geometry towards f6 is not a capture.
        assert!(!check(&game, (3, 4), (2, 5)).0);
    }

    #[test]
    fn reaching_last_rank_marks_promotion() {
        let game = GameState::from_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1")
            .expect("fixture FEN should parse");
        assert_eq!(
            check(&game, (1, 0), (0, 0)),
            (true, SpecialMove::Promotion { piece: None })
        );
        assert_eq!(
            check(&game, (1, 0), (0, 1)),
            (true, SpecialMove::Promotion { piece: None })
        );
    }
}
