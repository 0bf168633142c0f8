//! Full legality checks and terminal-state detection.
//!
//! A move is legal when the piece rule accepts it and, simulated on a copy of
//! the board, it does not leave the mover's king attacked. Legal move
//! enumeration simply tries every destination for every piece.

use tracing::trace;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_to_board;
use crate::move_generation::legal_move_checks::{is_king_attacked, is_square_attacked};
use crate::moves::move_descriptions::{MoveDescription, SpecialMove};
use crate::moves::piece_rules::{validate_geometry, RuleContext};

impl GameState {
    /// Decide whether `mv` is legal here, setting its validity flag and
    /// special-move marker. A promotion piece chosen earlier is kept.
    pub fn check_move_validity(&self, mv: &mut MoveDescription) {
        let chosen_promotion = mv.promotion_piece();
        mv.reset_validation();

        let Some(piece) = mv.piece_moved else {
            trace!(mv = %mv, "rejected: no piece on the start square");
            return;
        };
        if piece.color != self.side_to_move {
            trace!(mv = %mv, "rejected: {} is not to move", piece.color);
            return;
        }
        if self.board.get(mv.start) != mv.piece_moved || self.board.get(mv.end) != mv.piece_captured
        {
            trace!(mv = %mv, "rejected: descriptor does not match the board");
            return;
        }

        let ctx = RuleContext::for_game(self);
        if !validate_geometry(mv, &ctx) {
            mv.reset_validation();
            trace!(mv = %mv, "rejected by {:?} rule", piece.kind);
            return;
        }

        if mv.is_castling() && !self.castling_path_is_safe(mv, piece.color) {
            mv.reset_validation();
            trace!(mv = %mv, "rejected: king castles out of or through check");
            return;
        }

        let mut scratch = self.board;
        apply_to_board(&mut scratch, mv);
        if is_king_attacked(&scratch, piece.color) {
            mv.reset_validation();
            trace!(mv = %mv, "rejected: own king would be attacked");
            return;
        }

        if let SpecialMove::Promotion { piece } = &mut mv.special {
            *piece = chosen_promotion;
        }
        mv.valid = true;
    }

    /// The king may not castle while attacked, nor cross an attacked square.
    /// The destination is covered by the general king-safety check.
    fn castling_path_is_safe(&self, mv: &MoveDescription, color: Color) -> bool {
        let enemy = color.opposite();
        if is_square_attacked(&self.board, mv.start, enemy) {
            return false;
        }

        let step = if mv.end.col() > mv.start.col() { 1 } else { -1 };
        let Some(crossed) = mv.start.offset(0, step) else {
            return false;
        };
        !is_square_attacked(&self.board, crossed, enemy)
    }

    fn legal_moves(&self) -> impl Iterator<Item = MoveDescription> + '_ {
        self.board
            .pieces()
            .filter(move |(_, piece)| piece.color == self.side_to_move)
            .flat_map(move |(start, _)| {
                Square::all().filter_map(move |end| {
                    let mut mv = MoveDescription::new(start, end, self);
                    self.check_move_validity(&mut mv);
                    mv.valid.then_some(mv)
                })
            })
    }

    /// Every legal move for the side to move.
    pub fn get_all_possible_moves(&self) -> Vec<MoveDescription> {
        self.legal_moves().collect()
    }

    /// Recompute the in-check, checkmate and stalemate flags.
    pub fn update_game_state(&mut self) {
        self.in_check = self.is_in_check();
        let no_legal_moves = self.legal_moves().next().is_none();
        self.checkmate = no_legal_moves && self.in_check;
        self.stalemate = no_legal_moves && !self.in_check;
    }
}
