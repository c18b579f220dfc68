//! Snapshot of one synchronized game.
//!
//! `GameState` is built by the replay engine and replaced wholesale on every
//! transition, so anything holding a reference always sees a base position,
//! accepted move list, and current position that belong together.

use crate::game_state::chess_types::MoveRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub base_position: String,
    pub accepted_moves: Vec<MoveRecord>,
    pub current_position: String,
}

impl GameState {
    /// Fresh state for a base position with nothing replayed yet.
    #[inline]
    pub fn from_base(base_position: &str) -> Self {
        Self {
            base_position: base_position.to_owned(),
            accepted_moves: Vec::new(),
            current_position: base_position.to_owned(),
        }
    }

    #[inline]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.accepted_moves.last()
    }

    pub fn san_moves(&self) -> Vec<String> {
        self.accepted_moves.iter().map(|mv| mv.san.clone()).collect()
    }
}
