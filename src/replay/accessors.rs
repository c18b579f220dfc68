//! Read-only surface the hosting UI queries on demand.
//!
//! Every accessor reads the latest `GameState` snapshot; none of them replay
//! moves or touch the rules engine.

use crate::game_state::chess_types::{MoveRecord, Square};
use crate::replay::replay_engine::ReplayEngine;
use crate::rules_binding::rules_engine::RulesEngine;
use crate::utils::pgn::write_pgn;
use crate::view::board_projection::{project_with_issues, Projection};
use crate::view::highlights::highlights_for;

impl<E: RulesEngine> ReplayEngine<E> {
    /// SAN of every accepted move, in order.
    pub fn get_moves(&self) -> Vec<String> {
        self.game_state()
            .map(|game| game.san_moves())
            .unwrap_or_default()
    }

    /// Current FEN, or an empty string before any position is loaded.
    pub fn get_fen(&self) -> String {
        self.game_state()
            .map(|game| game.current_position.clone())
            .unwrap_or_default()
    }

    /// PGN of the accepted moves, or an empty string when there are none.
    pub fn get_pgn(&self) -> String {
        match self.game_state() {
            Some(game) if !game.accepted_moves.is_empty() => {
                write_pgn(&game.base_position, &game.san_moves(), &self.config().pgn)
            }
            _ => String::new(),
        }
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.game_state().and_then(|game| game.last_move())
    }

    pub fn highlights(&self) -> Vec<Square> {
        highlights_for(self.last_move())
    }

    pub fn projection(&self) -> Projection {
        self.game_state()
            .map(|game| project_with_issues(&game.current_position))
            .unwrap_or_default()
    }
}
