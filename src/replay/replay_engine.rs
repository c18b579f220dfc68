//! Position reset and move-batch replay state machine.
//!
//! The engine is `Empty` until a base position arrives and `Ready` after.
//! Every move batch is replayed from the base position through the rules
//! engine, so a batch that shrinks or changes (takebacks, edits) always
//! produces the position the server describes. Each transition builds a new
//! `GameState` and swaps it in whole.

use crate::config::SyncConfig;
use crate::errors::{IllegalMoveRejection, SyncError, SyncResult};
use crate::game_state::chess_types::MoveRecord;
use crate::game_state::game_state::GameState;
use crate::rules_binding::rules_engine::RulesEngine;
use crate::rules_binding::shakmaty_rules_engine::ShakmatyRulesEngine;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReplayState {
    #[default]
    Empty,
    Ready(GameState),
}

/// A notation skipped during batch replay, with its position in the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedMove {
    pub index: usize,
    pub rejection: IllegalMoveRejection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayReport {
    /// The batch arrived before any base position and changed nothing.
    pub ignored: bool,
    pub accepted: usize,
    pub rejected: Vec<RejectedMove>,
}

impl ReplayReport {
    fn ignored() -> Self {
        Self {
            ignored: true,
            ..Self::default()
        }
    }
}

pub struct ReplayEngine<E: RulesEngine = ShakmatyRulesEngine> {
    rules: E,
    state: ReplayState,
    config: SyncConfig,
}

impl ReplayEngine<ShakmatyRulesEngine> {
    pub fn new(config: SyncConfig) -> Self {
        Self::with_rules(ShakmatyRulesEngine::new(), config)
    }
}

impl Default for ReplayEngine<ShakmatyRulesEngine> {
    fn default() -> Self {
        Self::new(SyncConfig::default())
    }
}

impl<E: RulesEngine> ReplayEngine<E> {
    pub fn with_rules(rules: E, config: SyncConfig) -> Self {
        Self {
            rules,
            state: ReplayState::Empty,
            config,
        }
    }

    #[inline]
    pub fn state(&self) -> &ReplayState {
        &self.state
    }

    #[inline]
    pub fn game_state(&self) -> Option<&GameState> {
        match &self.state {
            ReplayState::Empty => None,
            ReplayState::Ready(game) => Some(game),
        }
    }

    #[inline]
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Reset to a new base position. Always resets, even for an identical FEN.
    pub fn on_position_update(&mut self, fen: &str) -> SyncResult<()> {
        let fen = fen.trim();
        if let Err(err) = self.rules.load(fen) {
            log::warn!("position update rejected: {err}");
            return Err(err);
        }

        log::info!("base position reset to '{fen}'");
        self.state = ReplayState::Ready(GameState::from_base(fen));
        Ok(())
    }

    /// Replay the complete move list on top of the base position.
    pub fn on_move_batch<S: AsRef<str>>(&mut self, notations: &[S]) -> SyncResult<ReplayReport> {
        let base_position = match &self.state {
            ReplayState::Empty => {
                log::debug!("move batch of {} before any position; ignoring", notations.len());
                return Ok(ReplayReport::ignored());
            }
            ReplayState::Ready(game) => game.base_position.clone(),
        };

        self.rules.load(&base_position)?;

        let mut accepted_moves = Vec::<MoveRecord>::with_capacity(notations.len());
        let mut rejected = Vec::<RejectedMove>::new();
        for (index, notation) in notations.iter().enumerate() {
            match self.rules.attempt_move(notation.as_ref()) {
                Ok(record) => accepted_moves.push(record),
                Err(rejection) => {
                    log::warn!("move {} skipped during replay: {rejection}", index + 1);
                    rejected.push(RejectedMove { index, rejection });
                }
            }
        }

        let current_position = if accepted_moves.is_empty() {
            base_position.clone()
        } else {
            self.rules.current_position()
        };

        log::debug!(
            "replayed batch of {}: {} accepted, {} rejected",
            notations.len(),
            accepted_moves.len(),
            rejected.len()
        );

        let report = ReplayReport {
            ignored: false,
            accepted: accepted_moves.len(),
            rejected,
        };
        self.state = ReplayState::Ready(GameState {
            base_position,
            accepted_moves,
            current_position,
        });

        Ok(report)
    }

    /// Apply one notation on top of the current position, outside the move feed.
    ///
    /// Only available when `SyncConfig::enable_debug_moves` is set. The next
    /// move batch replays from the base position and drops these moves.
    pub fn apply_debug_move(&mut self, notation: &str) -> SyncResult<MoveRecord> {
        if !self.config.enable_debug_moves {
            return Err(SyncError::DebugMovesDisabled);
        }

        let ReplayState::Ready(game) = &self.state else {
            return Err(SyncError::NoPositionLoaded);
        };

        let record = self.rules.attempt_move(notation).map_err(|rejection| {
            log::warn!("debug move {rejection}");
            SyncError::from(rejection)
        })?;

        let mut accepted_moves = game.accepted_moves.clone();
        accepted_moves.push(record.clone());
        let next = GameState {
            base_position: game.base_position.clone(),
            accepted_moves,
            current_position: self.rules.current_position(),
        };
        self.state = ReplayState::Ready(next);

        Ok(record)
    }
}
