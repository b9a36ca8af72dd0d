use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "emaan",
    version,
    author,
    about = "Prayer times and live countdown for the terminal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show today's prayer times and the countdown to the next prayer
    Times,
    /// Show only the next prayer and the time remaining
    Next,
    /// Resolve the current location via reverse geocoding and save it
    Locate,
}
