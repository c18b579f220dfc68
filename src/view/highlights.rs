//! Last-move highlight squares.

use crate::game_state::chess_rules::{kingside_castle_rook_square, queenside_castle_rook_square};
use crate::game_state::chess_types::{MoveRecord, Square};

/// Squares to mark for the most recent move: none, or a from/to pair.
///
/// Castling marks the king's origin and the fixed rook corner for the side
/// that castled instead of the king's destination.
pub fn highlights_for(last_move: Option<&MoveRecord>) -> Vec<Square> {
    let Some(mv) = last_move else {
        return Vec::new();
    };

    if mv.is_kingside_castle {
        vec![mv.from, kingside_castle_rook_square(mv.color)]
    } else if mv.is_queenside_castle {
        vec![mv.from, queenside_castle_rook_square(mv.color)]
    } else {
        vec![mv.from, mv.to]
    }
}
