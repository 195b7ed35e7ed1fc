use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use crate::tui;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Show { format, no_color }) => handlers::show::handle(format, no_color),
        None => tui::run(&config),
    }
}
