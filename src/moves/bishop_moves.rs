use crate::moves::move_descriptions::MoveDescription;
use crate::moves::piece_rules::{deltas, is_friendly_fire, is_path_clear, RuleContext};

/// Diagonal slide with nothing in between.
pub fn validate_bishop_move(mv: &mut MoveDescription, ctx: &RuleContext<'_>) -> bool {
    let (d_row, d_col) = deltas(mv);
    if d_row == 0 || d_row.abs() != d_col.abs() {
        return false;
    }
    !is_friendly_fire(mv) && is_path_clear(ctx.board, mv.start, mv.end)
}

#[cfg(test)]
mod tests {
    use super::validate_bishop_move;
    use crate::game_state::chess_types::*;
    use crate::moves::move_descriptions::MoveDescription;
    use crate::moves::piece_rules::RuleContext;

    #[test]
    fn bishop_needs_clear_diagonal() {
        let game = GameState::new_game();
        let ctx = RuleContext::for_game(&game);
        let c1 = Square::new(7, 2);
        let mut blocked = MoveDescription::new(c1, Square::new(5, 4), &game);
        assert!(!validate_bishop_move(&mut blocked, &ctx));

        let opened = GameState::from_fen("rnbqkbnr/pppppppp/8/8/8/3P4/PPP1PPPP/RNBQKBNR w KQkq - 0 1")
            .expect("fixture FEN should parse");
        let ctx = RuleContext::for_game(&opened);
        let mut diagonal = MoveDescription::new(c1, Square::new(3, 6), &opened);
        assert!(validate_bishop_move(&mut diagonal, &ctx));
        let mut straight = MoveDescription::new(c1, Square::new(5, 2), &opened);
        assert!(!validate_bishop_move(&mut straight, &ctx));
        let mut onto_own_pawn = MoveDescription::new(c1, Square::new(6, 1), &opened);
        assert!(!validate_bishop_move(&mut onto_own_pawn, &ctx));
    }
}
