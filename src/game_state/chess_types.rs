//! Shared chess vocabulary used across the feed, replay, and view layers.
//! These types are independent of the rules library bound behind
//! `RulesEngine`, so any binding can produce them.

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    /// Suffix used by the board's piece image ids (`pawn_w`, `pawn_b`).
    #[inline]
    pub const fn image_suffix(self) -> &'static str {
        match self {
            Color::Light => "w",
            Color::Dark => "b",
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

/// Board square index (`0..=63`, `0 == a1`, `63 == h8`).
pub type Square = u8;

/// Result of successfully applying one notation through the rules binding.
///
/// For castling, `to` is the king's destination square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub san: String,
    pub color: Color,
    pub is_kingside_castle: bool,
    pub is_queenside_castle: bool,
}

impl MoveRecord {
    #[inline]
    pub fn is_castle(&self) -> bool {
        self.is_kingside_castle || self.is_queenside_castle
    }
}
