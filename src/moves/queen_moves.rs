use crate::moves::bishop_moves::validate_bishop_move;
use crate::moves::move_descriptions::MoveDescription;
use crate::moves::piece_rules::RuleContext;
use crate::moves::rook_moves::validate_rook_move;

/// Rook or bishop movement.
pub fn validate_queen_move(mv: &mut MoveDescription, ctx: &RuleContext<'_>) -> bool {
    validate_rook_move(mv, ctx) || validate_bishop_move(mv, ctx)
}

#[cfg(test)]
mod tests {
    use super::validate_queen_move;
    use crate::game_state::chess_types::*;
    use crate::moves::move_descriptions::MoveDescription;
    use crate::moves::piece_rules::RuleContext;

    #[test]
    fn queen_combines_lines_and_diagonals() {
        let game = GameState::from_fen("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1")
            .expect("fixture FEN should parse");
        let ctx = RuleContext::for_game(&game);
        let d4 = Square::new(4, 3);
        let probe = |row, col| {
            let mut mv = MoveDescription::new(d4, Square::new(row, col), &game);
            validate_queen_move(&mut mv, &ctx)
        };
        assert!(probe(0, 3));
        assert!(probe(4, 7));
        assert!(probe(0, 7));
        assert!(probe(7, 0));
        assert!(!probe(2, 4));
        assert!(!probe(7, 4));
    }
}
