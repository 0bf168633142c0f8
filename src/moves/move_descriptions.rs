//! Move descriptor passed between the host and the rules engine.
//!
//! A descriptor is built from two squares and a snapshot of what stands on
//! them. Validation fills in the validity flag and the special-move marker;
//! application records the undo snapshot. Only the engine mutates those
//! parts, the host reads them and supplies the promotion choice.

use std::fmt;

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::UndoState;
use crate::utils::long_algebraic::move_to_long_algebraic;

/// Special-move marker. At most one applies to any move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpecialMove {
    #[default]
    None,
    /// King moves two files; the rook jumps from `rook_from` to `rook_to`.
    Castling { rook_from: Square, rook_to: Square },
    /// The captured pawn stands beside the mover, not on the destination.
    EnPassant { captured_square: Square },
    /// `piece` stays `None` until the caller picks a replacement.
    Promotion { piece: Option<PieceKind> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveDescription {
    pub(crate) start: Square,
    pub(crate) end: Square,
    pub(crate) piece_moved: Option<Piece>,
    pub(crate) piece_captured: Option<Piece>,
    pub(crate) valid: bool,
    pub(crate) special: SpecialMove,
    pub(crate) undo: Option<UndoState>,
}

impl MoveDescription {
    /// Describe moving whatever stands on `start` to `end` in `game_state`.
    ///
    /// The descriptor starts out invalid; run
    /// [`GameState::check_move_validity`] before applying it.
    pub fn new(start: Square, end: Square, game_state: &GameState) -> Self {
        Self::on_board(start, end, game_state.board())
    }

    pub(crate) fn on_board(start: Square, end: Square, board: &Board) -> Self {
        Self {
            start,
            end,
            piece_moved: board.get(start),
            piece_captured: board.get(end),
            valid: false,
            special: SpecialMove::None,
            undo: None,
        }
    }

    #[inline]
    pub fn start(&self) -> Square {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Square {
        self.end
    }

    #[inline]
    pub fn piece_moved(&self) -> Option<Piece> {
        self.piece_moved
    }

    /// For en passant this is empty until the move has been applied.
    #[inline]
    pub fn piece_captured(&self) -> Option<Piece> {
        self.piece_captured
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    #[inline]
    pub fn special(&self) -> SpecialMove {
        self.special
    }

    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some() || self.is_en_passant()
    }

    pub fn is_castling(&self) -> bool {
        matches!(self.special, SpecialMove::Castling { .. })
    }

    pub fn is_en_passant(&self) -> bool {
        matches!(self.special, SpecialMove::EnPassant { .. })
    }

    pub fn is_pawn_promotion(&self) -> bool {
        matches!(self.special, SpecialMove::Promotion { .. })
    }

    pub fn promotion_piece(&self) -> Option<PieceKind> {
        match self.special {
            SpecialMove::Promotion { piece } => piece,
            _ => None,
        }
    }

    /// Rook source and destination of a castling move.
    pub fn castling_rook_move(&self) -> Option<(Square, Square)> {
        match self.special {
            SpecialMove::Castling { rook_from, rook_to } => Some((rook_from, rook_to)),
            _ => None,
        }
    }

    pub fn en_passant_capture_square(&self) -> Option<Square> {
        match self.special {
            SpecialMove::EnPassant { captured_square } => Some(captured_square),
            _ => None,
        }
    }

    /// Record the piece a promoting pawn turns into.
    pub fn set_promotion_piece(&mut self, kind: PieceKind) -> Result<(), ChessError> {
        if !kind.is_promotion_choice() {
            return Err(ChessError::InvalidPromotion(kind));
        }
        match &mut self.special {
            SpecialMove::Promotion { piece } => {
                *piece = Some(kind);
                Ok(())
            }
            _ => Err(ChessError::IllegalMove(format!("{self} is not a promotion"))),
        }
    }

    /// Piece standing on the destination once the move is made.
    pub(crate) fn placed_piece(&self) -> Option<Piece> {
        match (self.special, self.piece_moved) {
            (SpecialMove::Promotion { piece }, Some(pawn)) => Some(Piece::new(
                pawn.color,
                piece.unwrap_or(PieceKind::Queen),
            )),
            (_, moved) => moved,
        }
    }

    pub(crate) fn reset_validation(&mut self) {
        self.valid = false;
        self.special = SpecialMove::None;
    }
}

impl fmt::Display for MoveDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&move_to_long_algebraic(self))
    }
}
