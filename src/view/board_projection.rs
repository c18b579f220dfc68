//! FEN placement field to sparse board placements.
//!
//! Projection is recomputed in full from a position string and never fails:
//! a rank that contains something unplaceable keeps the pieces parsed before
//! the bad character and reports the rest as a `MalformedRankString`.

use crate::errors::MalformedRankString;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::utils::algebraic::square_from_file_rank;

pub const PIECE_ASSET_DIR: &str = "/assets/images";

const BOARD_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceImage {
    pub color: Color,
    pub kind: PieceKind,
}

impl PieceImage {
    /// Image id such as `rook_w` or `knight_b`.
    pub fn image_id(&self) -> String {
        format!("{}_{}", self.kind.name(), self.color.image_suffix())
    }

    pub fn asset_path(&self) -> String {
        format!("{PIECE_ASSET_DIR}/{}.svg", self.image_id())
    }
}

/// One piece on the display grid. `rank == 0` is White's back rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub piece: PieceImage,
    pub file: u8,
    pub rank: u8,
}

impl Placement {
    #[inline]
    pub fn square(&self) -> Square {
        square_from_file_rank(self.file, self.rank)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    pub placements: Vec<Placement>,
    pub issues: Vec<MalformedRankString>,
}

pub fn project(position: &str) -> Vec<Placement> {
    project_with_issues(position).placements
}

pub fn project_with_issues(position: &str) -> Projection {
    let mut projection = Projection::default();
    let Some(board_part) = position.split_whitespace().next() else {
        return projection;
    };

    for (fen_rank_idx, rank_str) in board_part.split('/').enumerate() {
        if fen_rank_idx >= BOARD_SIZE {
            report(&mut projection, fen_rank_idx, rank_str, '/', 0);
            break;
        }

        let display_rank = (BOARD_SIZE - 1 - fen_rank_idx) as u8;
        let mut file = 0usize;

        for (offset, ch) in rank_str.chars().enumerate() {
            if let Some(empty_count) = ch.to_digit(10) {
                let step = empty_count as usize;
                if !(1..=BOARD_SIZE).contains(&step) || file + step > BOARD_SIZE {
                    report(&mut projection, fen_rank_idx, rank_str, ch, offset);
                    break;
                }
                file += step;
                continue;
            }

            let Some((color, kind)) = piece_from_fen_char(ch) else {
                report(&mut projection, fen_rank_idx, rank_str, ch, offset);
                break;
            };
            if file >= BOARD_SIZE {
                report(&mut projection, fen_rank_idx, rank_str, ch, offset);
                break;
            }

            projection.placements.push(Placement {
                piece: PieceImage { color, kind },
                file: file as u8,
                rank: display_rank,
            });
            file += 1;
        }
    }

    projection
}

fn report(projection: &mut Projection, fen_rank_index: usize, rank: &str, found: char, offset: usize) {
    let issue = MalformedRankString {
        fen_rank_index,
        rank: rank.to_owned(),
        found,
        offset,
    };
    log::warn!("board projection: {issue}");
    projection.issues.push(issue);
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let piece = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, piece))
}
