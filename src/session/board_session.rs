//! One synchronized board: both feed adapters plus the replay engine.
//!
//! Raw frames from either channel go in; a `BoardView` (placements and
//! highlights) and the accessor surface come out. Errors are returned to the
//! caller and never leave the session in a half-updated state.

use crate::config::SyncConfig;
use crate::errors::{MalformedRankString, SyncResult};
use crate::feed::feed_adapter::{FeedEvent, MoveFeed, PositionFeed};
use crate::game_state::chess_types::Square;
use crate::replay::replay_engine::{ReplayEngine, ReplayReport};
use crate::rules_binding::rules_engine::RulesEngine;
use crate::rules_binding::shakmaty_rules_engine::ShakmatyRulesEngine;
use crate::view::board_projection::Placement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Position,
    Moves,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionUpdate {
    /// The frame carried nothing for the replay engine.
    Ignored,
    PositionReset,
    Replayed(ReplayReport),
}

/// Everything the hosting UI needs to paint the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    pub loaded: bool,
    pub placements: Vec<Placement>,
    pub highlights: Vec<Square>,
    pub issues: Vec<MalformedRankString>,
}

impl BoardView {
    pub fn is_highlighted(&self, square: Square) -> bool {
        self.highlights.contains(&square)
    }
}

pub struct BoardSession<E: RulesEngine = ShakmatyRulesEngine> {
    position_feed: PositionFeed,
    move_feed: MoveFeed,
    replay: ReplayEngine<E>,
}

impl BoardSession<ShakmatyRulesEngine> {
    pub fn new(config: SyncConfig) -> Self {
        Self::with_replay(ReplayEngine::new(config))
    }
}

impl<E: RulesEngine> BoardSession<E> {
    pub fn with_replay(replay: ReplayEngine<E>) -> Self {
        Self {
            position_feed: PositionFeed::new(),
            move_feed: MoveFeed::new(),
            replay,
        }
    }

    #[inline]
    pub fn replay(&self) -> &ReplayEngine<E> {
        &self.replay
    }

    #[inline]
    pub fn replay_mut(&mut self) -> &mut ReplayEngine<E> {
        &mut self.replay
    }

    pub fn handle_message(&mut self, channel: Channel, raw: &str) -> SyncResult<SessionUpdate> {
        let event = match channel {
            Channel::Position => self.position_feed.on_message(raw),
            Channel::Moves => self.move_feed.on_message(raw),
        };

        match event {
            Some(event) => self.apply(event),
            None => Ok(SessionUpdate::Ignored),
        }
    }

    pub fn apply(&mut self, event: FeedEvent) -> SyncResult<SessionUpdate> {
        match event {
            FeedEvent::PositionUpdate(fen) => {
                self.replay.on_position_update(&fen)?;
                Ok(SessionUpdate::PositionReset)
            }
            FeedEvent::MoveBatch(notations) => {
                let report = self.replay.on_move_batch(notations.as_slice())?;
                if report.ignored {
                    Ok(SessionUpdate::Ignored)
                } else {
                    Ok(SessionUpdate::Replayed(report))
                }
            }
        }
    }

    pub fn view(&self) -> BoardView {
        let projection = self.replay.projection();
        BoardView {
            loaded: self.replay.game_state().is_some(),
            placements: projection.placements,
            highlights: self.replay.highlights(),
            issues: projection.issues,
        }
    }
}
