//! Random-move opponent.
//!
//! Selects uniformly from legal moves. Used as the host's computer player
//! and by randomized playout tests; a fixed seed makes games reproducible.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::MoveDescription;

pub struct RandomEngine {
    rng: StdRng,
    promotion_piece: PieceKind,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            promotion_piece: PieceKind::Queen,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            promotion_piece: PieceKind::Queen,
        }
    }

    /// Piece chosen whenever the picked move promotes. Non-promotion kinds
    /// are ignored.
    pub fn set_promotion_piece(&mut self, kind: PieceKind) {
        if kind.is_promotion_choice() {
            self.promotion_piece = kind;
        }
    }

    /// A validated move ready for `make_move`, or `None` when the side to
    /// move has no legal move.
    pub fn choose_move(&mut self, game_state: &GameState) -> Option<MoveDescription> {
        let legal_moves = game_state.get_all_possible_moves();
        let mut picked = legal_moves.as_slice().choose(&mut self.rng)?.clone();
        if picked.is_pawn_promotion() {
            picked.set_promotion_piece(self.promotion_piece).ok()?;
        }
        Some(picked)
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}
