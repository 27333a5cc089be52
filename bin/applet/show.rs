use crate::render::Grid;
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::draughts::{Color, Position};
use std::{fs, path::PathBuf};
use tracing::instrument;

/// Displays a board loaded from a file.
#[derive(Debug, Parser)]
pub struct Show {
    /// The file holding the board description.
    path: PathBuf,

    /// Give black the move.
    #[clap(short, long)]
    black: bool,
}

impl Show {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut pos: Position = fs::read_to_string(&self.path)?.parse()?;
        pos.turn = if self.black { Color::Black } else { Color::Red };

        print!("{}", Grid(&pos));

        Ok(())
    }
}
