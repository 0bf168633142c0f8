use crate::moves::move_descriptions::MoveDescription;
use crate::moves::piece_rules::{deltas, is_friendly_fire, is_path_clear, RuleContext};

/// Straight along a rank or file with nothing in between.
pub fn validate_rook_move(mv: &mut MoveDescription, ctx: &RuleContext<'_>) -> bool {
    let (d_row, d_col) = deltas(mv);
    if (d_row == 0) == (d_col == 0) {
        return false;
    }
    !is_friendly_fire(mv) && is_path_clear(ctx.board, mv.start, mv.end)
}

#[cfg(test)]
mod tests {
    use super::validate_rook_move;
    use crate::game_state::chess_types::*;
    use crate::moves::move_descriptions::MoveDescription;
    use crate::moves::piece_rules::RuleContext;

    #[test]
    fn rook_slides_until_blocked() {
        // Rook d4, own pawn d6, enemy knight g4.
        let game = GameState::from_fen("4k3/8/3P4/8/3R2n1/8/8/4K3 w - - 0 1")
            .expect("fixture FEN should parse");
        let ctx = RuleContext::for_game(&game);
        let d4 = Square::new(4, 3);
        let probe = |row, col| {
            let mut mv = MoveDescription::new(d4, Square::new(row, col), &game);
            validate_rook_move(&mut mv, &ctx)
        };

        assert!(probe(5, 3));
        assert!(probe(7, 3));
        assert!(!probe(2, 3));
        assert!(!probe(1, 3));
        assert!(probe(4, 6));
        assert!(!probe(4, 7));
        assert!(probe(4, 0));
        assert!(!probe(5, 4));
        assert!(!probe(4, 3));
    }
}
