use crate::render::Grid;
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::draughts::{Color, Position};
use std::{fs, path::PathBuf};
use tracing::{info, instrument};

/// Enumerates the legal successors of the piece on a square.
#[derive(Debug, Parser)]
pub struct Moves {
    /// The file holding the board description.
    path: PathBuf,

    /// The square holding the piece to move, e.g. `A1`.
    square: String,

    /// Give black the move.
    #[clap(short, long)]
    black: bool,
}

impl Moves {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut pos: Position = fs::read_to_string(&self.path)?.parse()?;
        pos.turn = if self.black { Color::Black } else { Color::Red };

        let successors = pos.successors(&self.square);
        info!(square = %self.square, count = successors.len(), "enumerated successors");

        for next in &successors {
            println!("{}", Grid(next));
        }

        Ok(())
    }
}
