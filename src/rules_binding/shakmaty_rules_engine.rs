//! `RulesEngine` binding over the `shakmaty` rules library.
//!
//! Accepts SAN (with or without `+`/`#` suffixes, `0-0` spellings included)
//! and long algebraic notation, and always records canonical SAN.

use shakmaty::fen::Fen;
use shakmaty::san::{San, SanPlus};
use shakmaty::{CastlingMode, CastlingSide, Chess, EnPassantMode, Move, Position, Role};

use crate::errors::{IllegalMoveRejection, SyncError, SyncResult};
use crate::game_state::chess_types::{Color, MoveRecord, PieceKind, Square};
use crate::rules_binding::long_algebraic::{parse_long_algebraic, LongAlgebraicMove};
use crate::rules_binding::rules_engine::{MoveAttempt, RulesEngine};
use crate::utils::algebraic::{rank_of, square_from_file_rank};

const FEN_FIELD_COUNT: usize = 6;

#[derive(Debug, Clone, Default)]
pub struct ShakmatyRulesEngine {
    position: Chess,
    history: Vec<MoveRecord>,
}

impl ShakmatyRulesEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn resolve_move(&self, notation: &str) -> Result<Move, String> {
        if notation.is_empty() {
            return Err("empty notation".to_owned());
        }

        if let Ok(lan) = parse_long_algebraic(notation) {
            return self.match_long_algebraic(&lan);
        }

        let san = normalize_castling_zeros(notation)
            .parse::<SanPlus>()
            .map_err(|e| format!("unreadable notation: {e}"))?;
        san.san.to_move(&self.position).map_err(|e| e.to_string())
    }

    fn match_long_algebraic(&self, lan: &LongAlgebraicMove) -> Result<Move, String> {
        self.position
            .legal_moves()
            .into_iter()
            .find(|mv| {
                let Some(from) = mv.from() else {
                    return false;
                };
                let from = from as Square;
                let reaches = lan.to == mv.to() as Square
                    || mv
                        .castling_side()
                        .is_some_and(|side| lan.to == king_destination(from, side));
                from == lan.from && reaches && mv.promotion().map(piece_kind_from_role) == lan.promotion
            })
            .ok_or_else(|| "no legal move matches".to_owned())
    }

    fn play(&mut self, mv: &Move, from: Square) -> MoveRecord {
        let color = color_from_shakmaty(self.position.turn());
        let san = San::from_move(&self.position, mv);
        let castling_side = mv.castling_side();
        let to = match castling_side {
            Some(side) => king_destination(from, side),
            None => mv.to() as Square,
        };

        self.position.play_unchecked(mv);

        let suffix = if self.position.is_checkmate() {
            "#"
        } else if self.position.is_check() {
            "+"
        } else {
            ""
        };

        MoveRecord {
            from,
            to,
            san: format!("{san}{suffix}"),
            color,
            is_kingside_castle: castling_side == Some(CastlingSide::KingSide),
            is_queenside_castle: castling_side == Some(CastlingSide::QueenSide),
        }
    }
}

impl RulesEngine for ShakmatyRulesEngine {
    fn load(&mut self, position: &str) -> SyncResult<()> {
        self.position = parse_position(position)?;
        self.history.clear();
        Ok(())
    }

    fn attempt_move(&mut self, notation: &str) -> MoveAttempt {
        let trimmed = notation.trim();
        let reject = |reason: String| IllegalMoveRejection {
            notation: notation.to_owned(),
            reason,
        };

        let mv = self.resolve_move(trimmed).map_err(reject)?;
        let from = mv
            .from()
            .map(|sq| sq as Square)
            .ok_or_else(|| reject("piece drops are not supported".to_owned()))?;

        let record = self.play(&mv, from);
        self.history.push(record.clone());
        Ok(record)
    }

    fn current_position(&self) -> String {
        Fen::from_position(self.position.clone(), EnPassantMode::Legal).to_string()
    }

    fn history_verbose(&self) -> &[MoveRecord] {
        &self.history
    }
}

/// Parse a complete six-field FEN into a legal standard-chess position.
pub fn parse_position(fen: &str) -> SyncResult<Chess> {
    let malformed = |reason: String| SyncError::MalformedPosition {
        fen: fen.to_owned(),
        reason,
    };

    let trimmed = fen.trim();
    let field_count = trimmed.split_whitespace().count();
    if field_count != FEN_FIELD_COUNT {
        return Err(malformed(format!(
            "expected {FEN_FIELD_COUNT} fields, found {field_count}"
        )));
    }

    let setup = trimmed
        .parse::<Fen>()
        .map_err(|e| malformed(e.to_string()))?;
    setup
        .into_position::<Chess>(CastlingMode::Standard)
        .map_err(|e| malformed(e.to_string()))
}

fn normalize_castling_zeros(notation: &str) -> String {
    if notation.starts_with("0-0") {
        notation.replace('0', "O")
    } else {
        notation.to_owned()
    }
}

fn king_destination(king_from: Square, side: CastlingSide) -> Square {
    let file = match side {
        CastlingSide::KingSide => 6,
        CastlingSide::QueenSide => 2,
    };
    square_from_file_rank(file, rank_of(king_from))
}

fn color_from_shakmaty(color: shakmaty::Color) -> Color {
    match color {
        shakmaty::Color::White => Color::Light,
        shakmaty::Color::Black => Color::Dark,
    }
}

fn piece_kind_from_role(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}

#[cfg(test)]
mod tests {
    use super::ShakmatyRulesEngine;
    use crate::errors::SyncError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::Color;
    use crate::rules_binding::rules_engine::RulesEngine;
    use crate::utils::algebraic::algebraic_to_square;

    const CASTLING_FEN: &str = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

    fn sq(name: &str) -> u8 {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn loaded(fen: &str) -> ShakmatyRulesEngine {
        let mut engine = ShakmatyRulesEngine::new();
        engine.load(fen).expect("test FEN should load");
        engine
    }

    #[test]
    fn applies_san_and_reports_move_record() {
        let mut engine = loaded(STARTING_POSITION_FEN);
        let record = engine.attempt_move("e4").expect("e4 should be legal");

        assert_eq!(record.from, sq("e2"));
        assert_eq!(record.to, sq("e4"));
        assert_eq!(record.san, "e4");
        assert_eq!(record.color, Color::Light);
        assert!(!record.is_castle());
        assert_eq!(
            engine.current_position(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
        );
        assert_eq!(engine.history_verbose().len(), 1);
    }

    #[test]
    fn rejection_leaves_position_untouched() {
        let mut engine = loaded(STARTING_POSITION_FEN);
        let before = engine.current_position();

        let rejection = engine.attempt_move("Zz9").expect_err("Zz9 is not a move");
        assert_eq!(rejection.notation, "Zz9");
        assert!(engine.attempt_move("e5").is_err());
        assert!(engine.attempt_move("Ke2").is_err());

        assert_eq!(engine.current_position(), before);
        assert!(engine.history_verbose().is_empty());
    }

    #[test]
    fn malformed_load_keeps_previous_position() {
        let mut engine = loaded(STARTING_POSITION_FEN);
        engine.attempt_move("d4").expect("d4 should be legal");
        let before = engine.current_position();

        for bad in ["", "not a fen", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR", "8/8/8/8/8/8/8/8 w - - 0 1"] {
            let err = engine.load(bad).expect_err("bad FEN should fail");
            assert!(matches!(err, SyncError::MalformedPosition { .. }));
        }

        assert_eq!(engine.current_position(), before);
        assert_eq!(engine.history_verbose().len(), 1);
    }

    #[test]
    fn castling_records_king_destination_and_side() {
        let mut engine = loaded(CASTLING_FEN);
        let short = engine.attempt_move("O-O").expect("white may castle short");
        assert!(short.is_kingside_castle);
        assert_eq!((short.from, short.to), (sq("e1"), sq("g1")));
        assert_eq!(short.san, "O-O");

        let long = engine.attempt_move("0-0-0").expect("black may castle long");
        assert!(long.is_queenside_castle);
        assert_eq!(long.color, Color::Dark);
        assert_eq!((long.from, long.to), (sq("e8"), sq("c8")));
        assert_eq!(long.san, "O-O-O");
    }

    #[test]
    fn long_algebraic_input_records_canonical_san() {
        let mut engine = loaded(STARTING_POSITION_FEN);
        assert_eq!(engine.attempt_move("g1f3").expect("g1f3 is legal").san, "Nf3");

        let mut castle = loaded(CASTLING_FEN);
        let record = castle.attempt_move("e1g1").expect("e1g1 castles");
        assert!(record.is_kingside_castle);

        let mut promo = loaded("8/P7/8/8/8/8/8/k6K w - - 0 1");
        assert_eq!(promo.attempt_move("a7a8q").expect("promotion is legal").san, "a8=Q+");
    }

    #[test]
    fn check_and_mate_suffixes_and_en_passant() {
        let mut engine = loaded(STARTING_POSITION_FEN);
        for notation in ["f3", "e5", "g4"] {
            engine.attempt_move(notation).expect("opening move should be legal");
        }
        assert_eq!(engine.attempt_move("Qh4").expect("mate is legal").san, "Qh4#");

        let mut ep = loaded("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3");
        let record = ep.attempt_move("exd6").expect("en passant is legal");
        assert_eq!(record.to, sq("d6"));
        assert_eq!(record.san, "exd6");
    }
}
