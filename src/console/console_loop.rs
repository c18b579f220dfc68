//! Line-oriented console host for a synchronized board.
//!
//! Each input line is one command. `position` and `moves` take a raw channel
//! frame exactly as the transport would deliver it; the remaining commands
//! read the accessor surface or drive the debug move entry point.

use std::io::{self, BufRead, Write};

use crate::config::SyncConfig;
use crate::session::board_session::{BoardSession, Channel, SessionUpdate};
use crate::utils::render_board::render_board;

pub fn run_stdio_loop(config: SyncConfig, initial_fen: Option<&str>) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_console_loop(stdin.lock(), &mut stdout, config, initial_fen)
}

pub fn run_console_loop(
    input: impl BufRead,
    out: &mut impl Write,
    config: SyncConfig,
    initial_fen: Option<&str>,
) -> io::Result<()> {
    let mut console = ConsoleState::new(config);

    if let Some(fen) = initial_fen {
        console.handle_command(&format!("position FEN:{fen}"), out)?;
    }

    for line in input.lines() {
        let line = line?;
        let should_quit = console.handle_command(&line, out)?;
        out.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

struct ConsoleState {
    session: BoardSession,
}

impl ConsoleState {
    fn new(config: SyncConfig) -> Self {
        Self {
            session: BoardSession::new(config),
        }
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(false);
        }

        let (cmd, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (trimmed, ""),
        };

        match cmd {
            "position" => self.handle_frame(Channel::Position, rest, out)?,
            "moves" => self.handle_frame(Channel::Moves, rest, out)?,
            "move" => match self.session.replay_mut().apply_debug_move(rest) {
                Ok(record) => writeln!(out, "played {}", record.san)?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "show" => writeln!(out, "{}", render_board(&self.session.view()))?,
            "list" => writeln!(out, "{}", self.session.replay().get_moves().join(" "))?,
            "fen" => writeln!(out, "{}", self.session.replay().get_fen())?,
            "pgn" => write!(out, "{}", self.session.replay().get_pgn())?,
            "quit" => return Ok(true),
            _ => writeln!(out, "error: unknown command '{cmd}'")?,
        }

        Ok(false)
    }

    fn handle_frame(&mut self, channel: Channel, frame: &str, out: &mut impl Write) -> io::Result<()> {
        match self.session.handle_message(channel, frame) {
            Ok(SessionUpdate::Ignored) => writeln!(out, "ignored"),
            Ok(SessionUpdate::PositionReset) => writeln!(out, "position {}", self.session.replay().get_fen()),
            Ok(SessionUpdate::Replayed(report)) => {
                for rejected in &report.rejected {
                    writeln!(out, "skipped #{}: {}", rejected.index + 1, rejected.rejection)?;
                }
                writeln!(out, "replayed {} moves", report.accepted)
            }
            Err(err) => writeln!(out, "error: {err}"),
        }
    }
}
