//! PGN export of a game's move log.
//!
//! Movetext uses long algebraic notation. The starting position is
//! recovered by undoing the whole log on a copy of the game, so games set
//! up from FEN get `SetUp`/`FEN` headers.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;

/// `1-0`, `0-1`, `1/2-1/2` or `*` for a game still in progress.
pub fn game_result(game_state: &GameState) -> &'static str {
    if game_state.is_checkmate() {
        match game_state.side_to_move() {
            Color::Light => "0-1",
            Color::Dark => "1-0",
        }
    } else if game_state.is_stalemate() {
        "1/2-1/2"
    } else {
        "*"
    }
}

pub fn write_pgn(game_state: &GameState) -> String {
    write_pgn_dated(game_state, Local::now().date_naive())
}

pub fn write_pgn_dated(game_state: &GameState, date: NaiveDate) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Plum Chess Rules Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), date.format("%Y.%m.%d").to_string());
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), game_result(game_state).to_owned());

    write_pgn_with_headers(game_state, &headers)
}

pub fn write_pgn_with_headers(game_state: &GameState, headers: &BTreeMap<String, String>) -> String {
    let initial = initial_position(game_state);
    let mut headers = headers.clone();
    let initial_fen = initial.get_fen();
    if initial_fen != STARTING_POSITION_FEN {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), initial_fen);
    }

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let mut number = initial.fullmove_number();
    let mut side = initial.side_to_move();
    let mut movetext_parts = Vec::<String>::with_capacity(game_state.move_log().len() + 1);
    for (ply, mv) in game_state.move_log().iter().enumerate() {
        match side {
            Color::Light => movetext_parts.push(format!("{number}. {mv}")),
            Color::Dark => {
                if ply == 0 {
                    movetext_parts.push(format!("{number}... {mv}"));
                } else {
                    movetext_parts.push(mv.to_string());
                }
                number += 1;
            }
        }
        side = side.opposite();
    }

    let result = headers.get("Result").map(String::as_str).unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

fn initial_position(game_state: &GameState) -> GameState {
    let mut initial = game_state.clone();
    while !initial.move_log().is_empty() {
        initial.undo_move();
    }
    initial
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
