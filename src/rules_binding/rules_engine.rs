//! Chess-rules capability seam.
//!
//! The replay engine only talks to rules through this trait, so any legality
//! backend that can load a FEN and apply notations can drive a board.

use crate::errors::{IllegalMoveRejection, SyncResult};
use crate::game_state::chess_types::MoveRecord;

/// Outcome of offering one notation to the rules engine. A rejection is an
/// ordinary result, not a fault.
pub type MoveAttempt = Result<MoveRecord, IllegalMoveRejection>;

/// Chess-rules capability consumed by the replay engine.
///
/// Implementations must leave their loaded position untouched when `load`
/// fails or `attempt_move` rejects.
pub trait RulesEngine: Send {
    /// Replace the loaded position. Fails with `SyncError::MalformedPosition`.
    fn load(&mut self, position: &str) -> SyncResult<()>;

    fn attempt_move(&mut self, notation: &str) -> MoveAttempt;

    /// FEN of the loaded position after every move applied since `load`.
    fn current_position(&self) -> String;

    fn history_verbose(&self) -> &[MoveRecord];
}
