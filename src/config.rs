use tracing::warn;

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::utils::long_algebraic::char_to_promotion;

/// Host configuration parsed from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Position the game starts from.
    pub start_fen: String,
    /// Side played by the random-move opponent, if any.
    pub computer_plays: Option<Color>,
    /// Piece offered first when a pawn promotes.
    pub default_promotion: PieceKind,
    /// Seed for the random-move opponent.
    pub seed: Option<u64>,
}

impl HostConfig {
    /// Load configuration from environment variables with defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let computer_plays = match lookup("PLUM_COMPUTER_PLAYS").as_deref() {
            None | Some("none") | Some("") => None,
            Some("light") | Some("white") => Some(Color::Light),
            Some("dark") | Some("black") => Some(Color::Dark),
            Some(other) => {
                warn!(value = other, "unknown PLUM_COMPUTER_PLAYS value, no computer player");
                None
            }
        };

        let default_promotion = match lookup("PLUM_DEFAULT_PROMOTION") {
            None => defaults.default_promotion,
            Some(value) => value
                .chars()
                .next()
                .and_then(char_to_promotion)
                .unwrap_or_else(|| {
                    warn!(value = %value, "unknown PLUM_DEFAULT_PROMOTION value, using queen");
                    defaults.default_promotion
                }),
        };

        HostConfig {
            start_fen: lookup("PLUM_START_FEN").unwrap_or(defaults.start_fen),
            computer_plays,
            default_promotion,
            seed: lookup("PLUM_SEED").and_then(|v| v.parse().ok()),
        }
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        HostConfig {
            start_fen: STARTING_POSITION_FEN.to_owned(),
            computer_plays: None,
            default_promotion: PieceKind::Queen,
            seed: None,
        }
    }
}
