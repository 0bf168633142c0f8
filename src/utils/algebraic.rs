//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the
//! `(row, col)` squares used by the board. Rank 8 is row 0.

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}

/// Convert a square to algebraic notation (for example: "e4").
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.col());
    let rank_char = char::from(b'8' - square.row());
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_types::Square;

    #[test]
    fn corner_and_centre_conversions() {
        assert_eq!(algebraic_to_square("a8").expect("a8 should parse"), Square::new(0, 0));
        assert_eq!(algebraic_to_square("h1").expect("h1 should parse"), Square::new(7, 7));
        assert_eq!(algebraic_to_square("e4").expect("e4 should parse"), Square::new(4, 4));
        assert_eq!(square_to_algebraic(Square::new(7, 0)), "a1");
        assert_eq!(square_to_algebraic(Square::new(2, 3)), "d6");
    }

    #[test]
    fn rejects_off_board_coordinates() {
        for bad in ["i1", "a9", "a0", "e", "e44", ""] {
            assert_eq!(
                algebraic_to_square(bad),
                Err(ChessError::InvalidSquare(bad.to_owned()))
            );
        }
    }
}
