use crate::draughts::{Color, File, Piece, Rank, Square};
use crate::util::{Assume, Integer};
use arrayvec::ArrayString;
use derive_more::{Display, Error};
use std::fmt::{self, Write};
use std::{ops::Index, str::FromStr};

/// The current position on the checkers board.
///
/// A position is an immutable snapshot of the piece placement and the side
/// to move; deriving the positions reachable from it never mutates it.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Position {
    squares: [Option<Piece>; 64],
    /// The side to move.
    pub turn: Color,
}

impl Default for Position {
    /// An empty board with red to move.
    #[inline(always)]
    fn default() -> Self {
        Self {
            squares: [None; 64],
            turn: Color::Red,
        }
    }
}

impl Position {
    /// The [`Piece`] on the given [`Square`], if any.
    #[inline(always)]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.get() as usize]
    }

    /// An iterator over all pieces on the board.
    #[inline(always)]
    pub fn iter(&self) -> impl Iterator<Item = (Piece, Square)> + '_ {
        Square::iter().filter_map(|sq| Some((self.piece_on(sq)?, sq)))
    }

    /// [`Square`]s occupied by pieces of a [`Color`].
    #[inline(always)]
    pub fn by_color(&self, c: Color) -> impl Iterator<Item = Square> + '_ {
        self.iter()
            .filter(move |(p, _)| p.color() == c)
            .map(|(_, sq)| sq)
    }

    /// Every legal position reachable by moving the piece on `whence`.
    ///
    /// The result is empty if `whence` does not name a square on the board
    /// or the square does not hold a piece of the side to move. Successors
    /// are emitted in depth-first order, and every node of a capture chain
    /// is a successor of its own, so stopping short of the longest chain is
    /// always legal.
    pub fn successors(&self, whence: &str) -> Vec<Position> {
        let Ok(whence) = whence.parse::<Square>() else {
            return Vec::new();
        };

        match self.piece_on(whence) {
            Some(p) if p.color() == self.turn => {}
            _ => return Vec::new(),
        }

        let mut successors = Vec::new();
        self.explore(whence, whence, false, &mut successors);
        successors
    }

    /// Depth-first search over the chains of the piece on `whence`.
    ///
    /// `whither` is the square the piece has reached so far along the
    /// current chain. Pieces captured along the way are already removed
    /// from `self`, while the moving piece stays on `whence` until a
    /// successor is emitted, so a chain can neither land on its origin nor
    /// capture the same square twice.
    fn explore(&self, whence: Square, whither: Square, jumped: bool, out: &mut Vec<Position>) {
        let piece = self.piece_on(whence).assume();

        for &delta in piece.advances() {
            let Some(next) = whither.step(delta) else {
                continue;
            };

            if self.piece_on(next).is_none() && !jumped {
                out.push(self.relocate(whence, next));
            } else if piece.is_opponent(self.piece_on(next)) {
                let Some(landing) = next.step(delta) else {
                    continue;
                };

                if self.piece_on(landing).is_some() {
                    continue;
                }

                let remainder = self.without(next);
                out.push(remainder.relocate(whence, landing));
                remainder.explore(whence, landing, true, out);
            }
        }
    }

    /// A copy of this position with the piece on `sq` removed.
    #[inline(always)]
    fn without(&self, sq: Square) -> Self {
        let mut next = *self;
        next.squares[sq.get() as usize] = None;
        next
    }

    /// A copy of this position with the piece on `whence` relocated to
    /// `whither`, promoted if it landed on its promotion file, and the turn
    /// passed to the opponent.
    #[inline(always)]
    fn relocate(&self, whence: Square, whither: Square) -> Self {
        let piece = self.piece_on(whence).assume();
        let mut next = *self;
        next.squares[whence.get() as usize] = None;
        next.squares[whither.get() as usize] = Some(piece.promote_on(whither));
        next.turn = !self.turn;
        next
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Position {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.squares[sq.get() as usize]
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(\"{}\")", self.to_string().replace('\n', "/"))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in Rank::iter() {
            let mut line = ArrayString::<8>::new();

            for file in File::iter() {
                match self.piece_on(Square::new(file, r)) {
                    None => line.push('-'),
                    Some(p) => write!(line, "{p}")?,
                }
            }

            if r != Rank::First {
                f.write_char('\n')?;
            }

            f.write_str(&line)?;
        }

        Ok(())
    }
}

/// The reason why parsing the board description failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParsePositionError {
    #[display("expected 8 lines of 8 squares")]
    InvalidShape,
    #[display("unrecognized square `{_0}`")]
    InvalidSquare(#[error(not(source))] char),
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<_> = s.lines().collect();
        let lines @ [_, _, _, _, _, _, _, _] = &lines[..] else {
            return Err(ParsePositionError::InvalidShape);
        };

        let mut squares = [None; 64];
        for (r, line) in lines.iter().enumerate() {
            let mut files = File::iter();

            for c in line.chars() {
                let Some(file) = files.next() else {
                    return Err(ParsePositionError::InvalidShape);
                };

                let sq = Square::new(file, Rank::new(r as i8));
                squares[sq.get() as usize] = match c {
                    '-' => None,
                    c => {
                        let mut buffer = [0; 4];
                        match Piece::from_str(c.encode_utf8(&mut buffer)) {
                            Ok(p) => Some(p),
                            Err(_) => return Err(ParsePositionError::InvalidSquare(c)),
                        }
                    }
                };
            }

            if files.next().is_some() {
                return Err(ParsePositionError::InvalidShape);
            }
        }

        Ok(Position {
            squares,
            turn: Color::Red,
        })
    }
}
