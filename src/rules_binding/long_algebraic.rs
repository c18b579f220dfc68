//! Long algebraic (`e2e4`, `e7e8q`) notation parsing.
//!
//! The move feed mostly carries SAN, but coordinate notation shows up from
//! engines and camera-driven sources. Parsing here is purely syntactic; the
//! rules binding decides legality.

use crate::game_state::chess_types::{PieceKind, Square};
use crate::utils::algebraic::algebraic_to_square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongAlgebraicMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

pub fn parse_long_algebraic(long_algebraic: &str) -> Result<LongAlgebraicMove, String> {
    let bytes = long_algebraic.as_bytes();
    if bytes.len() != 4 && bytes.len() != 5 {
        return Err(format!("Invalid long algebraic move: {long_algebraic}"));
    }
    if !long_algebraic.is_ascii() {
        return Err(format!("Invalid long algebraic move: {long_algebraic}"));
    }

    let from = algebraic_to_square(&long_algebraic[0..2])?;
    let to = algebraic_to_square(&long_algebraic[2..4])?;
    if from == to {
        return Err(format!("Null move is not playable: {long_algebraic}"));
    }

    let promotion = if bytes.len() == 5 {
        Some(char_to_promotion(bytes[4] as char)?)
    } else {
        None
    };

    Ok(LongAlgebraicMove {
        from,
        to,
        promotion,
    })
}

fn char_to_promotion(ch: char) -> Result<PieceKind, String> {
    match ch.to_ascii_lowercase() {
        'n' => Ok(PieceKind::Knight),
        'b' => Ok(PieceKind::Bishop),
        'r' => Ok(PieceKind::Rook),
        'q' => Ok(PieceKind::Queen),
        _ => Err(format!("Invalid promotion piece character: {ch}")),
    }
}
