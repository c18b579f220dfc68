//! Error taxonomy for board synchronization.
//!
//! `SyncError` is returned from state transitions that can be refused.
//! Move rejections and malformed rank strings are reported rather than
//! propagated, so they are plain values carried in replay reports and
//! projections.

use thiserror::Error;

pub type SyncResult<T> = Result<T, SyncError>;

/// Represents all failures a synchronization transition can surface to its caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// The position string is not a usable FEN. Prior state is kept.
    #[error("malformed position '{fen}': {reason}")]
    MalformedPosition { fen: String, reason: String },
    /// A single notation could not be applied outside of batch replay.
    #[error("illegal move '{notation}': {reason}")]
    IllegalMove { notation: String, reason: String },
    /// An operation needed a loaded base position.
    #[error("no position loaded")]
    NoPositionLoaded,
    /// The diagnostic move entry point was called while disabled.
    #[error("debug moves are disabled")]
    DebugMovesDisabled,
}

/// A notation that does not apply to the currently loaded position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("rejected '{notation}': {reason}")]
pub struct IllegalMoveRejection {
    pub notation: String,
    pub reason: String,
}

impl From<IllegalMoveRejection> for SyncError {
    fn from(rejection: IllegalMoveRejection) -> Self {
        SyncError::IllegalMove {
            notation: rejection.notation,
            reason: rejection.reason,
        }
    }
}

/// A placement-field rank that contains characters the projection cannot place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed rank {fen_rank_index} '{rank}': unexpected '{found}' at offset {offset}")]
pub struct MalformedRankString {
    pub fen_rank_index: usize,
    pub rank: String,
    pub found: char,
    pub offset: usize,
}
