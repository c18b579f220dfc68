//! Terminal-oriented Unicode board renderer.
//!
//! Draws a `BoardView` for the console host and for debugging, with empty
//! highlighted squares marked so the last move stays visible.

use crate::game_state::chess_types::{Color, PieceKind};
use crate::session::board_session::BoardView;
use crate::utils::algebraic::{square_from_file_rank, square_to_algebraic};
use crate::view::board_projection::PieceImage;

/// Render the board to a Unicode string, rank 8 at the top.
pub fn render_board(view: &BoardView) -> String {
    if !view.loaded {
        return "(no position loaded)".to_owned();
    }

    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            let square = square_from_file_rank(file, rank);
            let piece = view
                .placements
                .iter()
                .find(|p| p.file == file && p.rank == rank)
                .map(|p| piece_to_unicode(p.piece));

            match piece {
                Some(ch) => out.push(ch),
                None if view.is_highlighted(square) => out.push('•'),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    let marked: Vec<String> = view
        .highlights
        .iter()
        .filter_map(|sq| square_to_algebraic(*sq).ok())
        .collect();
    if !marked.is_empty() {
        out.push_str(&format!("\nlast move: {}", marked.join(" ")));
    }

    out
}

fn piece_to_unicode(piece: PieceImage) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::session::board_session::BoardView;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::view::board_projection::project;

    #[test]
    fn renders_start_position_with_highlight_marks() {
        let view = BoardView {
            loaded: true,
            placements: project(STARTING_POSITION_FEN),
            highlights: vec![
                algebraic_to_square("e4").expect("e4 should parse"),
                algebraic_to_square("e1").expect("e1 should parse"),
            ],
            issues: Vec::new(),
        };

        let rendered = render_board(&view);
        println!("\n{rendered}");

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[5], "4 · · · · • · · · 4");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
        assert_eq!(lines[10], "last move: e4 e1");
    }

    #[test]
    fn unloaded_view_renders_placeholder() {
        assert_eq!(render_board(&BoardView::default()), "(no position loaded)");
    }
}
