use crate::game_state::chess_rules::{KING_SIDE_ROOK_COL, QUEEN_SIDE_ROOK_COL};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(game_state.board());
    let side_to_move = match game_state.side_to_move() {
        Color::Light => "w",
        Color::Dark => "b",
    };
    let castling = generate_castling_field(game_state);
    let en_passant = game_state
        .en_passant_target()
        .map(square_to_algebraic)
        .unwrap_or_else(|| "-".to_owned());

    format!(
        "{} {} {} {} {} {}",
        board,
        side_to_move,
        castling,
        en_passant,
        game_state.halfmove_clock(),
        game_state.fullmove_number()
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for col in 0..8u8 {
            if let Some(piece) = board.get(Square::new(row, col)) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_to_fen_char(piece));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

/// Emits a wing letter while the color's right holds and that wing's rook is
/// still on its corner.
fn generate_castling_field(game_state: &GameState) -> String {
    let mut out = String::new();
    let board = game_state.board();

    for color in [Color::Light, Color::Dark] {
        if !game_state.castling_rights().allows(color) {
            continue;
        }
        let rook = Some(Piece::new(color, PieceKind::Rook));
        for (col, letter) in [(KING_SIDE_ROOK_COL, 'K'), (QUEEN_SIDE_ROOK_COL, 'Q')] {
            if board.get(Square::new(color.home_row(), col)) == rook {
                out.push(match color {
                    Color::Light => letter,
                    Color::Dark => letter.to_ascii_lowercase(),
                });
            }
        }
    }

    if out.is_empty() {
        out.push('-');
    }
    out
}

pub(crate) fn piece_to_fen_char(piece: Piece) -> char {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.color {
        Color::Light => base.to_ascii_uppercase(),
        Color::Dark => base,
    }
}
