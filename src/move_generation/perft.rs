//! Perft node counting over make/undo.
//!
//! Walks the legal move tree to a fixed depth and tallies leaf statistics.
//! Promotions are counted once per destination, with the default queen.

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }

    let mut scratch = game_state.clone();
    perft_recurse(&mut scratch, depth, &mut counts);
    counts
}

fn perft_recurse(game_state: &mut GameState, depth: u8, counts: &mut PerftCounts) {
    for mv in game_state.get_all_possible_moves() {
        game_state.make_move(mv);

        if depth == 1 {
            record_leaf(game_state, counts);
        } else {
            perft_recurse(game_state, depth - 1, counts);
        }

        game_state.undo_move();
    }
}

fn record_leaf(game_state: &GameState, counts: &mut PerftCounts) {
    let Some(mv) = game_state.move_log().last() else {
        return;
    };

    counts.nodes += 1;
    if mv.is_capture() {
        counts.captures += 1;
    }
    if mv.is_en_passant() {
        counts.en_passant += 1;
    }
    if mv.is_castling() {
        counts.castles += 1;
    }
    if mv.is_pawn_promotion() {
        counts.promotions += 1;
    }
    if game_state.in_check() {
        counts.checks += 1;
    }
    if game_state.is_checkmate() {
        counts.checkmates += 1;
    }
}
