//! End-to-end board synchronization scenarios through the public API.

use chess_board_sync::config::SyncConfig;
use chess_board_sync::game_state::chess_rules::STARTING_POSITION_FEN;
use chess_board_sync::game_state::chess_types::{Color, PieceKind};
use chess_board_sync::replay::replay_engine::ReplayEngine;
use chess_board_sync::session::board_session::{BoardSession, Channel, SessionUpdate};
use chess_board_sync::utils::algebraic::algebraic_to_square;
use chess_board_sync::view::board_projection::{project, PieceImage};

fn sq(name: &str) -> u8 {
    algebraic_to_square(name).expect("test square should parse")
}

fn engine_at(fen: &str) -> ReplayEngine {
    let mut engine = ReplayEngine::new(SyncConfig::default());
    engine.on_position_update(fen).expect("test FEN should load");
    engine
}

#[test]
fn idempotent_reset_returns_to_the_base() {
    let mut engine = engine_at(STARTING_POSITION_FEN);
    engine.on_move_batch(&["e4", "e5"]).expect("batch should replay");

    engine
        .on_position_update(STARTING_POSITION_FEN)
        .expect("same FEN should load");
    engine
        .on_move_batch::<&str>(&[])
        .expect("empty batch should replay");

    assert_eq!(engine.get_fen(), STARTING_POSITION_FEN);
    assert!(engine.get_moves().is_empty());
    assert!(engine.highlights().is_empty());
}

#[test]
fn repeated_batches_are_deterministic() {
    let batch = ["d4", "Nf6", "c4", "e6", "Nc3", "Bb4", "Qc2", "O-O"];
    let mut first = engine_at(STARTING_POSITION_FEN);
    let mut second = engine_at(STARTING_POSITION_FEN);

    first.on_move_batch(&batch).expect("batch should replay");
    first.on_move_batch(&batch).expect("batch should replay");
    second.on_move_batch(&batch).expect("batch should replay");

    assert_eq!(first.state(), second.state());
    assert_eq!(first.get_moves(), batch);
}

#[test]
fn unreadable_notation_is_contained() {
    let mut engine = engine_at(STARTING_POSITION_FEN);
    let report = engine
        .on_move_batch(&["e4", "Zz9", "e5"])
        .expect("batch should replay");

    assert_eq!(engine.get_moves(), vec!["e4", "e5"]);
    assert_eq!(report.rejected.len(), 1);
}

#[test]
fn illegal_queen_move_is_skipped() {
    // White's queen on d1 has no line to h4.
    let mut engine = engine_at(STARTING_POSITION_FEN);
    let report = engine
        .on_move_batch(&["e4", "e5", "Qh4"])
        .expect("batch should replay");

    assert_eq!(engine.get_moves(), vec!["e4", "e5"]);
    assert_eq!(report.rejected[0].index, 2);
    assert_eq!(engine.highlights(), vec![sq("e7"), sq("e5")]);
}

#[test]
fn knight_development_scenario() {
    let mut engine = engine_at(STARTING_POSITION_FEN);
    engine
        .on_move_batch(&["e4", "e5", "Nf3"])
        .expect("batch should replay");

    assert_eq!(engine.get_moves(), vec!["e4", "e5", "Nf3"]);
    assert_eq!(engine.highlights(), vec![sq("g1"), sq("f3")]);
}

#[test]
fn castling_highlights_the_rook_corner() {
    let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

    let mut engine = engine_at(fen);
    engine.on_move_batch(&["O-O"]).expect("batch should replay");
    assert_eq!(engine.highlights(), vec![sq("e1"), sq("h1")]);
    let last = engine.last_move().expect("castle should be recorded");
    assert!(last.is_kingside_castle);
    assert_eq!(last.to, sq("g1"));

    engine
        .on_move_batch(&["O-O", "O-O-O"])
        .expect("batch should replay");
    assert_eq!(engine.highlights(), vec![sq("e8"), sq("a8")]);

    engine.on_move_batch(&["0-0-0"]).expect("batch should replay");
    assert_eq!(engine.get_moves(), vec!["O-O-O"]);
    assert_eq!(engine.highlights(), vec![sq("e1"), sq("a1")]);
}

#[test]
fn start_position_projection() {
    let placements = project(STARTING_POSITION_FEN);
    assert_eq!(placements.len(), 32);
    assert_eq!(
        placements
            .iter()
            .filter(|p| p.piece.color == Color::Light)
            .count(),
        16
    );

    let piece_at = |name: &str| {
        placements
            .iter()
            .find(|p| p.square() == sq(name))
            .map(|p| p.piece)
    };
    let piece = |color, kind| Some(PieceImage { color, kind });

    assert_eq!(piece_at("a1"), piece(Color::Light, PieceKind::Rook));
    assert_eq!(piece_at("e1"), piece(Color::Light, PieceKind::King));
    assert_eq!(piece_at("a8"), piece(Color::Dark, PieceKind::Rook));
    assert_eq!(piece_at("e8"), piece(Color::Dark, PieceKind::King));
    assert_eq!(piece_at("e4"), None);
}

#[test]
fn wire_frames_drive_a_full_session() {
    let mut session = BoardSession::new(SyncConfig::default());

    assert_eq!(
        session.handle_message(Channel::Moves, "MOVE:e4"),
        Ok(SessionUpdate::Ignored)
    );
    session
        .handle_message(Channel::Position, &format!("FEN:{STARTING_POSITION_FEN}"))
        .expect("position frame should load");
    session
        .handle_message(Channel::Moves, "RESET")
        .expect("reset should replay an empty batch");

    for frame in ["MOVE:e4", "INVALID", "c5", "MOVE:Nf3"] {
        session
            .handle_message(Channel::Moves, frame)
            .expect("move frame should be handled");
    }
    assert_eq!(session.replay().get_moves(), vec!["e4", "c5", "Nf3"]);

    session
        .handle_message(Channel::Moves, "MOVES:d4 d5")
        .expect("full list should replay");
    assert_eq!(session.replay().get_moves(), vec!["d4", "d5"]);

    let pgn = session.replay().get_pgn();
    assert!(pgn.starts_with("[Event \"Live Board\"]\n"));
    assert!(pgn.ends_with("\n\n1. d4 d5 *\n"));
    assert!(!pgn.contains("[SetUp"));
}

#[test]
fn mid_game_base_exports_setup_headers() {
    let fen = "4k3/8/8/8/8/8/4P3/4K3 b - - 0 40";
    let mut engine = engine_at(fen);
    engine.on_move_batch(&["Kd7", "e4"]).expect("batch should replay");

    let pgn = engine.get_pgn();
    assert!(pgn.contains("[SetUp \"1\"]\n"));
    assert!(pgn.contains(&format!("[FEN \"{fen}\"]\n")));
    assert!(pgn.ends_with("40... Kd7 41. e4 *\n"));
}
