//! PGN export for the synchronized move history.
//!
//! Serializes the base position and accepted SAN moves to PGN text. Move
//! numbering continues from the base FEN's side to move and fullmove number,
//! so positions set up mid-game export correctly.

use crate::config::PgnConfig;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;

const UNFINISHED_RESULT: &str = "*";

/// Write PGN with the Seven Tag Roster dated today.
pub fn write_pgn(base_position: &str, san_moves: &[String], config: &PgnConfig) -> String {
    let date = chrono::Local::now().format("%Y.%m.%d").to_string();
    let headers = standard_headers(base_position, config, &date);
    write_pgn_with_headers(base_position, san_moves, &headers)
}

/// Seven Tag Roster in export order, plus `SetUp`/`FEN` for non-standard starts.
pub fn standard_headers(base_position: &str, config: &PgnConfig, date: &str) -> Vec<(String, String)> {
    let mut headers = vec![
        ("Event".to_owned(), config.event.clone()),
        ("Site".to_owned(), config.site.clone()),
        ("Date".to_owned(), date.to_owned()),
        ("Round".to_owned(), config.round.clone()),
        ("White".to_owned(), config.white.clone()),
        ("Black".to_owned(), config.black.clone()),
        ("Result".to_owned(), UNFINISHED_RESULT.to_owned()),
    ];

    let base = base_position.trim();
    if base != STARTING_POSITION_FEN {
        headers.push(("SetUp".to_owned(), "1".to_owned()));
        headers.push(("FEN".to_owned(), base.to_owned()));
    }

    headers
}

pub fn write_pgn_with_headers(
    base_position: &str,
    san_moves: &[String],
    headers: &[(String, String)],
) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    if !headers.is_empty() {
        out.push('\n');
    }

    let (mut light_to_move, mut move_number) = movetext_origin(base_position);
    let mut movetext_parts = Vec::<String>::with_capacity(san_moves.len() + 1);
    for (ply, san) in san_moves.iter().enumerate() {
        if light_to_move {
            movetext_parts.push(format!("{move_number}. {san}"));
        } else if ply == 0 {
            movetext_parts.push(format!("{move_number}... {san}"));
        } else {
            movetext_parts.push(san.clone());
        }

        if !light_to_move {
            move_number += 1;
        }
        light_to_move = !light_to_move;
    }

    let result = headers
        .iter()
        .find(|(key, _)| key == "Result")
        .map(|(_, value)| normalize_result(value))
        .unwrap_or(UNFINISHED_RESULT);
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

/// Side to move and fullmove number from a FEN, falling back to a fresh game.
fn movetext_origin(base_position: &str) -> (bool, u64) {
    let fields: Vec<&str> = base_position.split_whitespace().collect();
    let light_to_move = fields.get(1).map_or(true, |side| *side != "b");
    let move_number = fields
        .get(5)
        .and_then(|n| n.parse::<u32>().ok())
        .filter(|n| *n > 0)
        .map_or(1, u64::from);
    (light_to_move, move_number)
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn normalize_result(result: &str) -> &str {
    if is_result_token(result) {
        result
    } else {
        UNFINISHED_RESULT
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
