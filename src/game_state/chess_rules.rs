//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals such as the standard
//! starting position FEN and the fixed rook squares used when highlighting
//! castling moves.

use crate::game_state::chess_types::{Color, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const SQUARE_A1: Square = 0;
pub const SQUARE_H1: Square = 7;
pub const SQUARE_A8: Square = 56;
pub const SQUARE_H8: Square = 63;

/// Rook square highlighted for a kingside castle, keyed by the side that castled.
#[inline]
pub const fn kingside_castle_rook_square(color: Color) -> Square {
    match color {
        Color::Light => SQUARE_H1,
        Color::Dark => SQUARE_H8,
    }
}

/// Rook square highlighted for a queenside castle, keyed by the side that castled.
#[inline]
pub const fn queenside_castle_rook_square(color: Color) -> Square {
    match color {
        Color::Light => SQUARE_A1,
        Color::Dark => SQUARE_A8,
    }
}
