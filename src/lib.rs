//! Crate root module declarations for the board synchronization library.
//!
//! This file exposes the subsystems (feed adapters, rules binding, replay,
//! board view, session, console host, and utility helpers) so the binary,
//! tests, and benches can import stable module paths.

pub mod config;
pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod feed {
    pub mod feed_adapter;
}

pub mod rules_binding {
    pub mod long_algebraic;
    pub mod rules_engine;
    pub mod shakmaty_rules_engine;
}

pub mod replay {
    pub mod accessors;
    pub mod replay_engine;
}

pub mod view {
    pub mod board_projection;
    pub mod highlights;
}

pub mod session {
    pub mod board_session;
}

pub mod console {
    pub mod console_loop;
}

pub mod utils {
    pub mod algebraic;
    pub mod pgn;
    pub mod render_board;
}
