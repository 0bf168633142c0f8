use crate::moves::move_descriptions::MoveDescription;
use crate::moves::piece_rules::{deltas, is_friendly_fire};

/// L-shaped jump; intervening squares are irrelevant.
pub fn validate_knight_move(mv: &mut MoveDescription) -> bool {
    let (d_row, d_col) = deltas(mv);
    let (d_row, d_col) = (d_row.abs(), d_col.abs());
    ((d_row == 2 && d_col == 1) || (d_row == 1 && d_col == 2)) && !is_friendly_fire(mv)
}

#[cfg(test)]
mod tests {
    use super::validate_knight_move;
    use crate::game_state::chess_types::*;
    use crate::moves::move_descriptions::MoveDescription;

    #[test]
    fn knight_jumps_over_pawns() {
        let game = GameState::new_game();
        let g1 = Square::new(7, 6);
        let mut f3 = MoveDescription::new(g1, Square::new(5, 5), &game);
        let mut h3 = MoveDescription::new(g1, Square::new(5, 7), &game);
        let mut e2 = MoveDescription::new(g1, Square::new(6, 4), &game);
        let mut g3 = MoveDescription::new(g1, Square::new(5, 6), &game);
        assert!(validate_knight_move(&mut f3));
        assert!(validate_knight_move(&mut h3));
        assert!(!validate_knight_move(&mut e2));
        assert!(!validate_knight_move(&mut g3));
    }
}
