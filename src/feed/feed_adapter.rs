//! Raw transport messages to typed synchronization events.
//!
//! The position channel carries `FEN:<fen>` frames. The move channel carries
//! one move per frame (`MOVE:<san>` or bare text), a full list
//! (`MOVES:<san> <san> ...`), or control frames (`RESET`, `INVALID`). The
//! move adapter keeps the accumulated list so every emitted `MoveBatch` is
//! the complete move list, never a delta.

const FEN_PREFIX: &str = "FEN:";
const MOVE_PREFIX: &str = "MOVE:";
const MOVES_PREFIX: &str = "MOVES:";
const RESET_FRAME: &str = "RESET";
const INVALID_FRAME: &str = "INVALID";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    PositionUpdate(String),
    MoveBatch(Vec<String>),
}

/// Adapter for the position channel. Only string-valued FEN frames produce events.
#[derive(Debug, Clone, Default)]
pub struct PositionFeed;

impl PositionFeed {
    pub fn new() -> Self {
        Self
    }

    pub fn on_message(&mut self, raw: &str) -> Option<FeedEvent> {
        let frame = raw.trim();
        match frame {
            "" | RESET_FRAME | INVALID_FRAME => {
                log::debug!("position feed: ignoring frame '{frame}'");
                None
            }
            _ => {
                let fen = frame.strip_prefix(FEN_PREFIX).unwrap_or(frame).trim();
                if fen.is_empty() {
                    log::debug!("position feed: empty FEN frame, no game");
                    return None;
                }
                Some(FeedEvent::PositionUpdate(fen.to_owned()))
            }
        }
    }
}

/// Adapter for the move channel.
#[derive(Debug, Clone, Default)]
pub struct MoveFeed {
    moves: Vec<String>,
}

impl MoveFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full list of notations received since the last reset.
    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    pub fn on_message(&mut self, raw: &str) -> Option<FeedEvent> {
        let frame = raw.trim();

        if frame.is_empty() || frame == INVALID_FRAME {
            log::debug!("move feed: ignoring frame '{frame}'");
            return None;
        }

        if frame == RESET_FRAME {
            self.moves.clear();
            return Some(FeedEvent::MoveBatch(Vec::new()));
        }

        if let Some(fen) = frame.strip_prefix(FEN_PREFIX) {
            let fen = fen.trim();
            if fen.is_empty() {
                return None;
            }
            self.moves.clear();
            return Some(FeedEvent::PositionUpdate(fen.to_owned()));
        }

        if let Some(list) = frame.strip_prefix(MOVES_PREFIX) {
            self.moves = list
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|token| !token.is_empty())
                .map(str::to_owned)
                .collect();
            return Some(FeedEvent::MoveBatch(self.moves.clone()));
        }

        let notation = frame.strip_prefix(MOVE_PREFIX).unwrap_or(frame).trim();
        if notation.is_empty() {
            return None;
        }
        self.moves.push(notation.to_owned());
        Some(FeedEvent::MoveBatch(self.moves.clone()))
    }
}
