//! Reversible move application.
//!
//! `apply_to_board`/`revert_on_board` only shuffle pieces, so validation can
//! run them on a scratch copy. `make_move`/`undo_move` wrap them with the
//! bookkeeping for rights, the en-passant target, clocks and history.

use tracing::debug;

use crate::game_state::chess_rules::{KING_SIDE_ROOK_COL, QUEEN_SIDE_ROOK_COL};
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::UndoState;
use crate::moves::move_descriptions::{MoveDescription, SpecialMove};

/// Move the pieces on `board` as `mv` describes. Returns the piece removed
/// from the board, if any.
pub fn apply_to_board(board: &mut Board, mv: &MoveDescription) -> Option<Piece> {
    let moved = board.take(mv.start);
    match mv.special {
        SpecialMove::Castling { rook_from, rook_to } => {
            board.set(mv.end, moved);
            let rook = board.take(rook_from);
            board.set(rook_to, rook);
            None
        }
        SpecialMove::EnPassant { captured_square } => {
            board.set(mv.end, moved);
            board.take(captured_square)
        }
        SpecialMove::Promotion { .. } => {
            let captured = board.take(mv.end);
            board.set(mv.end, mv.placed_piece());
            captured
        }
        SpecialMove::None => {
            let captured = board.take(mv.end);
            board.set(mv.end, moved);
            captured
        }
    }
}

/// Inverse of [`apply_to_board`] for a move that has been applied.
pub fn revert_on_board(board: &mut Board, mv: &MoveDescription) {
    match mv.special {
        SpecialMove::Castling { rook_from, rook_to } => {
            board.set(mv.start, mv.piece_moved);
            board.set(mv.end, None);
            let rook = board.take(rook_to);
            board.set(rook_from, rook);
        }
        SpecialMove::EnPassant { captured_square } => {
            board.set(mv.start, mv.piece_moved);
            board.set(mv.end, None);
            board.set(captured_square, mv.piece_captured);
        }
        SpecialMove::Promotion { .. } | SpecialMove::None => {
            board.set(mv.start, mv.piece_moved);
            board.set(mv.end, mv.piece_captured);
        }
    }
}

/// Whether `board` still holds the pieces `mv` was built and validated
/// against, including the en-passant victim and the castling rook.
fn matches_board(board: &Board, mv: &MoveDescription, moved: Piece) -> bool {
    if board.get(mv.start) != Some(moved) {
        return false;
    }
    match mv.special {
        SpecialMove::EnPassant { captured_square } => {
            let victim = Some(Piece::new(moved.color.opposite(), PieceKind::Pawn));
            board.is_empty_at(mv.end) && board.get(captured_square) == victim
        }
        SpecialMove::Castling { rook_from, rook_to } => {
            board.is_empty_at(mv.end)
                && board.is_empty_at(rook_to)
                && board.get(rook_from) == Some(Piece::new(moved.color, PieceKind::Rook))
        }
        SpecialMove::Promotion { .. } | SpecialMove::None => board.get(mv.end) == mv.piece_captured,
    }
}

fn update_castling_rights(rights: &mut CastlingRights, mv: &MoveDescription, moved: Piece) {
    if moved.kind == PieceKind::King {
        rights.revoke(moved.color);
    }

    // Leaving or landing on a rook corner means that rook has moved or is gone.
    for color in [Color::Light, Color::Dark] {
        for col in [QUEEN_SIDE_ROOK_COL, KING_SIDE_ROOK_COL] {
            let corner = Square::new(color.home_row(), col);
            if mv.start == corner || mv.end == corner {
                rights.revoke(color);
            }
        }
    }
}

impl GameState {
    /// Apply a validated move. Moves that are not marked valid, or that no
    /// longer match the board, are ignored.
    pub fn make_move(&mut self, mut mv: MoveDescription) {
        if !mv.valid {
            debug!(mv = %mv, "ignoring move that did not pass validation");
            return;
        }
        let Some(moved) = mv.piece_moved else {
            return;
        };
        if moved.color != self.side_to_move || !matches_board(&self.board, &mv, moved) {
            debug!(mv = %mv, "ignoring move built against a different position");
            return;
        }

        mv.undo = Some(UndoState {
            prev_castling_rights: self.castling_rights,
            prev_en_passant_target: self.en_passant_target,
            prev_halfmove_clock: self.halfmove_clock,
        });
        self.en_passant_target = None;

        let captured = apply_to_board(&mut self.board, &mv);
        if mv.is_en_passant() {
            mv.piece_captured = captured;
        }

        if moved.kind == PieceKind::Pawn && mv.start.row().abs_diff(mv.end.row()) == 2 {
            let skipped_row = (mv.start.row() + mv.end.row()) / 2;
            self.en_passant_target = Some(Square::new(skipped_row, mv.start.col()));
        }

        update_castling_rights(&mut self.castling_rights, &mv, moved);

        if moved.kind == PieceKind::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if moved.color == Color::Dark {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        debug!(mv = %mv, piece = ?moved, captured = ?captured, "move applied");
        self.move_log.push(mv);
        self.side_to_move = self.side_to_move.opposite();
        self.update_game_state();
    }

    /// Take back the most recent move. Does nothing when no move was made.
    pub fn undo_move(&mut self) {
        let Some(mv) = self.move_log.pop() else {
            debug!("undo requested with an empty move log");
            return;
        };

        revert_on_board(&mut self.board, &mv);
        if let Some(undo) = mv.undo {
            self.castling_rights = undo.prev_castling_rights;
            self.en_passant_target = undo.prev_en_passant_target;
            self.halfmove_clock = undo.prev_halfmove_clock;
        }

        self.side_to_move = self.side_to_move.opposite();
        if self.side_to_move == Color::Dark {
            self.fullmove_number = self.fullmove_number.saturating_sub(1);
        }

        debug!(mv = %mv, "move undone");
        self.update_game_state();
    }
}
