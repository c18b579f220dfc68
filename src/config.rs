//! Runtime configuration for a synchronized board session.

/// Header values written into exported PGN text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PgnConfig {
    pub event: String,
    pub site: String,
    pub round: String,
    pub white: String,
    pub black: String,
}

impl Default for PgnConfig {
    fn default() -> Self {
        Self {
            event: "Live Board".to_owned(),
            site: "Local".to_owned(),
            round: "-".to_owned(),
            white: "White".to_owned(),
            black: "Black".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncConfig {
    /// Allows `ReplayEngine::apply_debug_move` to apply notations outside the move feed.
    pub enable_debug_moves: bool,
    pub pgn: PgnConfig,
}

impl SyncConfig {
    pub fn with_debug_moves(mut self, enabled: bool) -> Self {
        self.enable_debug_moves = enabled;
        self
    }
}
