//! Console host for a synchronized board.
//!
//! Run with:
//! `cargo run -- --fen "<fen>"`
//! `cargo run -- --script session.txt --debug-moves`
//!
//! Set `RUST_LOG=debug` to see feed and replay diagnostics on stderr.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::Parser;

use chess_board_sync::config::{PgnConfig, SyncConfig};
use chess_board_sync::console::console_loop::{run_console_loop, run_stdio_loop};

#[derive(Parser, Debug)]
#[command(version, about = "Keep a chess board in sync with a position feed and a move feed")]
struct Args {
    /// Base position loaded before any input is read.
    #[arg(long)]
    fen: Option<String>,

    /// Enable the `move <notation>` diagnostic command.
    #[arg(long)]
    debug_moves: bool,

    /// Read commands from this file instead of stdin.
    #[arg(long)]
    script: Option<PathBuf>,

    #[arg(long)]
    white: Option<String>,

    #[arg(long)]
    black: Option<String>,

    #[arg(long)]
    event: Option<String>,

    #[arg(long)]
    site: Option<String>,
}

impl Args {
    fn sync_config(&self) -> SyncConfig {
        let defaults = PgnConfig::default();
        let pgn = PgnConfig {
            event: self.event.clone().unwrap_or(defaults.event),
            site: self.site.clone().unwrap_or(defaults.site),
            round: defaults.round,
            white: self.white.clone().unwrap_or(defaults.white),
            black: self.black.clone().unwrap_or(defaults.black),
        };

        SyncConfig {
            enable_debug_moves: self.debug_moves,
            pgn,
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = args.sync_config();
    log::debug!("starting with {config:?}");

    match &args.script {
        Some(path) => {
            let reader = BufReader::new(File::open(path)?);
            let mut stdout = io::stdout();
            run_console_loop(reader, &mut stdout, config, args.fen.as_deref())
        }
        None => run_stdio_loop(config, args.fen.as_deref()),
    }
}
