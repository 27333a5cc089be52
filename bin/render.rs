use lib::draughts::{File, Piece, Position, Rank, Square};
use lib::util::Integer;
use std::fmt::{self, Write};

/// The display glyph for the content of a square.
fn glyph(p: Option<Piece>) -> char {
    match p {
        None => ' ',
        Some(Piece::RedMan) => '●',
        Some(Piece::BlackMan) => '○',
        Some(Piece::RedKing) => '♛',
        Some(Piece::BlackKing) => '♕',
    }
}

/// A bordered, human readable rendition of a [`Position`].
pub struct Grid<'a>(pub &'a Position);

impl fmt::Display for Grid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   A B C D E F G H")?;
        writeln!(f, "  ┌{}┐", "─".repeat(15))?;

        for r in Rank::iter() {
            write!(f, "{r} │")?;

            for file in File::iter() {
                write!(f, "{}│", glyph(self.0.piece_on(Square::new(file, r))))?;
            }

            f.write_char('\n')?;
        }

        writeln!(f, "  └{}┘", "─".repeat(15))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_lays_out_ranks_top_to_bottom_with_a_border() {
        let board = format!("r-b-----\n{}", ["--------"; 7].join("\n"));
        let pos: Position = board.parse().unwrap();

        let rendered = Grid(&pos).to_string();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "   A B C D E F G H");
        assert_eq!(lines[1], format!("  ┌{}┐", "─".repeat(15)));
        assert_eq!(lines[2], "1 │●│ │○│ │ │ │ │ │");
        assert_eq!(lines[3], "2 │ │ │ │ │ │ │ │ │");
        assert_eq!(lines[10], format!("  └{}┘", "─".repeat(15)));
    }

    #[test]
    fn kings_render_with_their_own_glyphs() {
        let board = format!("R------B\n{}", ["--------"; 7].join("\n"));
        let pos: Position = board.parse().unwrap();

        let rendered = Grid(&pos).to_string();
        assert_eq!(rendered.lines().nth(2), Some("1 │♛│ │ │ │ │ │ │♕│"));
    }
}
