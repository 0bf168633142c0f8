//! Canonical chess-rule constants.
//!
//! Static literals for the starting position and the fixed castling
//! geometry shared by the king rule, move application and FEN handling.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Column the king starts on (`e` file).
pub const KING_HOME_COL: u8 = 4;
/// Corner column of the king-side rook (`h` file).
pub const KING_SIDE_ROOK_COL: u8 = 7;
/// Corner column of the queen-side rook (`a` file).
pub const QUEEN_SIDE_ROOK_COL: u8 = 0;
