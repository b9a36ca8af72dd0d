mod cli;
mod config;
mod geo;
mod models;
mod prayer_times;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = AppConfig::load().context("Loading config")?;

    match cli.command {
        Some(Commands::Times) => handlers::handle_times(&config)?,
        Some(Commands::Next) => handlers::handle_next(&config)?,
        Some(Commands::Locate) => handlers::handle_locate(&mut config)?,

        // No subcommand → launch the TUI dashboard
        None => {
            let (location, advisory) = geo::startup_location(&config);
            tui::app::run(config, location, advisory)?;
        }
    }

    Ok(())
}
