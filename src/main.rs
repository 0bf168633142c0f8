use std::io::{self, Write};

use tracing_subscriber::EnvFilter;

use plum_chess_rules::chess_errors::ChessError;
use plum_chess_rules::config::HostConfig;
use plum_chess_rules::engines::engine_random::RandomEngine;
use plum_chess_rules::game_state::chess_types::{GameState, PieceKind};
use plum_chess_rules::utils::long_algebraic::{
    char_to_promotion, parse_long_algebraic, promotion_to_char,
};
use plum_chess_rules::utils::pgn::write_pgn;
use plum_chess_rules::utils::render_game_state::{render_game_state, status_text};

const HELP: &str = "commands: <move> (e.g. e2e4, e7e8q) | z/undo | moves | fen | pgn | help | quit";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "plum_chess_rules=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let config = HostConfig::from_env();
    let mut game = match GameState::from_fen(&config.start_fen) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("cannot start from PLUM_START_FEN: {e}");
            std::process::exit(1);
        }
    };

    let mut engine = match config.seed {
        Some(seed) => RandomEngine::with_seed(seed),
        None => RandomEngine::new(),
    };
    engine.set_promotion_piece(config.default_promotion);

    tracing::info!(
        "plum_chess_rules v{} ready, computer plays {:?}",
        env!("CARGO_PKG_VERSION"),
        config.computer_plays
    );

    let mut lines = io::stdin().lines();
    println!("{HELP}");
    print_position(&game);

    loop {
        if config.computer_plays == Some(game.side_to_move()) && !game.is_game_over() {
            if let Some(mv) = engine.choose_move(&game) {
                println!("computer plays {mv}");
                game.make_move(mv);
                print_position(&game);
                continue;
            }
        }

        prompt("> ");
        let Some(Ok(line)) = lines.next() else {
            break;
        };

        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                println!("{HELP}");
                continue;
            }
            "fen" => {
                println!("{}", game.get_fen());
                continue;
            }
            "pgn" => {
                print!("{}", write_pgn(&game));
                continue;
            }
            "moves" => {
                let moves: Vec<String> = game
                    .get_all_possible_moves()
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                println!("{}", moves.join(" "));
                continue;
            }
            "z" | "undo" => {
                game.undo_move();
                // Against the computer, step back to the human's turn.
                if config.computer_plays == Some(game.side_to_move()) {
                    game.undo_move();
                }
            }
            text => {
                if let Err(e) = play_human_move(&mut game, text, config.default_promotion, &mut lines) {
                    println!("{e}");
                    continue;
                }
            }
        }

        print_position(&game);
    }
}

fn play_human_move(
    game: &mut GameState,
    text: &str,
    default_promotion: PieceKind,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<(), ChessError> {
    let (mut mv, typed_promotion) = parse_long_algebraic(text, game)?;
    game.check_move_validity(&mut mv);
    if !mv.is_valid() {
        return Err(ChessError::IllegalMove(text.to_owned()));
    }

    if mv.is_pawn_promotion() {
        let choice = match typed_promotion {
            Some(kind) => kind,
            None => ask_promotion(default_promotion, lines),
        };
        mv.set_promotion_piece(choice)?;
    }

    game.make_move(mv);
    Ok(())
}

fn ask_promotion(
    default_promotion: PieceKind,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> PieceKind {
    let default_char = promotion_to_char(default_promotion).unwrap_or('q');
    loop {
        prompt(&format!("promote to (q/r/b/n) [{default_char}]: "));
        let Some(Ok(line)) = lines.next() else {
            return default_promotion;
        };
        let answer = line.trim();
        if answer.is_empty() {
            return default_promotion;
        }
        if let Some(kind) = answer.chars().next().and_then(char_to_promotion) {
            return kind;
        }
    }
}

fn print_position(game: &GameState) {
    println!("{}", render_game_state(game));
    match status_text(game) {
        Some(status) => println!("{status}"),
        None => println!("{} to move", game.side_to_move()),
    }
}

fn prompt(text: &str) {
    print!("{text}");
    io::stdout().flush().ok();
}
