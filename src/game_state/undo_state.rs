use crate::game_state::chess_types::*;

/// Position state that `make_move` overwrites and the move itself cannot
/// rebuild. Recorded on the move when it is applied, consumed by undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_target: Option<Square>,
    pub prev_halfmove_clock: u16,
}
