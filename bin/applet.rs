use anyhow::Error as Anyhow;
use clap::Subcommand;
use derive_more::From;

mod moves;
mod show;

#[derive(From, Subcommand)]
pub enum Applet {
    Moves(moves::Moves),
    Show(show::Show),
}

impl Applet {
    pub fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Moves(a) => a.execute(),
            Applet::Show(a) => a.execute(),
        }
    }
}
