//! Game state owned by the rules engine.
//!
//! `GameState` holds the board, side to move, castling rights, en-passant
//! target, clocks and the applied-move stack, together with the cached
//! check/checkmate/stalemate flags. Validation, application and attack
//! detection live in `move_generation` as further `impl GameState` blocks.

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::MoveDescription;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,

    // Clocks are bookkeeping for FEN/PGN only; no draw is adjudicated.
    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,

    pub(crate) move_log: Vec<MoveDescription>,

    pub(crate) in_check: bool,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

impl GameState {
    pub fn new_game() -> Self {
        let mut game_state = Self {
            board: Board::starting_position(),
            side_to_move: Color::Light,
            castling_rights: CastlingRights::ALL,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            move_log: Vec::new(),
            in_check: false,
            checkmate: false,
            stalemate: false,
        };
        game_state.update_game_state();
        game_state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        parse_fen(fen)
    }

    /// Start from an arbitrary arrangement with no castling rights and no
    /// en-passant target.
    pub fn from_board(board: Board, side_to_move: Color) -> Result<Self, ChessError> {
        Self::from_parts(board, side_to_move, CastlingRights::NONE, None, 0, 1)
    }

    /// Assemble a position, requiring exactly one king per color.
    pub fn from_parts(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> Result<Self, ChessError> {
        for color in [Color::Light, Color::Dark] {
            let kings = board.count(Piece::new(color, PieceKind::King));
            if kings != 1 {
                return Err(ChessError::InvalidPosition(format!(
                    "expected exactly one {color} king, found {kings}"
                )));
            }
        }

        let mut game_state = Self {
            board,
            side_to_move,
            castling_rights,
            en_passant_target,
            halfmove_clock,
            fullmove_number,
            move_log: Vec::new(),
            in_check: false,
            checkmate: false,
            stalemate: false,
        };
        game_state.update_game_state();
        Ok(game_state)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Applied moves, oldest first.
    #[inline]
    pub fn move_log(&self) -> &[MoveDescription] {
        &self.move_log
    }

    #[inline]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.checkmate || self.stalemate
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn new_game_matches_starting_fen() {
        let game = GameState::new_game();
        assert_eq!(game.get_fen(), STARTING_POSITION_FEN);
        assert_eq!(game.side_to_move(), Color::Light);
        assert_eq!(game.castling_rights(), CastlingRights::ALL);
        assert!(game.move_log().is_empty());
    }

    #[test]
    fn positions_need_one_king_per_side() {
        let mut board = Board::empty();
        board.set(Square::new(7, 4), Some(Piece::new(Color::Light, PieceKind::King)));
        assert!(matches!(
            GameState::from_board(board, Color::Light),
            Err(ChessError::InvalidPosition(_))
        ));

        board.set(Square::new(0, 4), Some(Piece::new(Color::Dark, PieceKind::King)));
        let game = GameState::from_board(board, Color::Light).expect("two kings is legal");
        assert_eq!(game.castling_rights(), CastlingRights::NONE);
    }
}
