//! Long algebraic move notation (`e2e4`, `e7e8q`).

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::MoveDescription;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(mv: &MoveDescription) -> String {
    let mut out = String::with_capacity(5);
    out.push_str(&square_to_algebraic(mv.start()));
    out.push_str(&square_to_algebraic(mv.end()));
    if let Some(piece) = mv.promotion_piece() {
        if let Some(ch) = promotion_to_char(piece) {
            out.push(ch);
        }
    }
    out
}

/// Build an unvalidated descriptor from notation. The optional fifth
/// character is returned separately; it can only be attached once validation
/// has marked the move as a promotion.
pub fn parse_long_algebraic(
    long_algebraic: &str,
    game_state: &GameState,
) -> Result<(MoveDescription, Option<PieceKind>), ChessError> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessError::InvalidNotation(long_algebraic.to_owned()));
    }

    let start = algebraic_to_square(&text[0..2])?;
    let end = algebraic_to_square(&text[2..4])?;
    let promotion = match text.chars().nth(4) {
        Some(ch) => Some(
            char_to_promotion(ch)
                .ok_or_else(|| ChessError::InvalidNotation(long_algebraic.to_owned()))?,
        ),
        None => None,
    };

    Ok((MoveDescription::new(start, end, game_state), promotion))
}

/// Validate and apply a move given in long algebraic notation. A promotion
/// without an explicit piece becomes a queen.
pub fn play_long_algebraic(game_state: &mut GameState, long_algebraic: &str) -> Result<(), ChessError> {
    let (mut mv, promotion) = parse_long_algebraic(long_algebraic, game_state)?;
    game_state.check_move_validity(&mut mv);
    if !mv.is_valid() {
        return Err(ChessError::IllegalMove(long_algebraic.trim().to_owned()));
    }

    match (mv.is_pawn_promotion(), promotion) {
        (true, choice) => mv.set_promotion_piece(choice.unwrap_or(PieceKind::Queen))?,
        (false, Some(_)) => {
            return Err(ChessError::InvalidNotation(format!(
                "{} is not a promotion",
                long_algebraic.trim()
            )))
        }
        (false, None) => {}
    }

    game_state.make_move(mv);
    Ok(())
}

pub fn promotion_to_char(piece_kind: PieceKind) -> Option<char> {
    match piece_kind {
        PieceKind::Knight => Some('n'),
        PieceKind::Bishop => Some('b'),
        PieceKind::Rook => Some('r'),
        PieceKind::Queen => Some('q'),
        _ => None,
    }
}

pub fn char_to_promotion(ch: char) -> Option<PieceKind> {
    match ch.to_ascii_lowercase() {
        'n' => Some(PieceKind::Knight),
        'b' => Some(PieceKind::Bishop),
        'r' => Some(PieceKind::Rook),
        'q' => Some(PieceKind::Queen),
        _ => None,
    }
}
