use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "hl-prune",
    about = "Delete expired node data and temporary files",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Prune data directories older than 24 hours (default)
    #[default]
    Data,

    /// Also prune temporary files older than 12 hours and report timings
    Timed,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.unwrap_or_default()
    }
}
