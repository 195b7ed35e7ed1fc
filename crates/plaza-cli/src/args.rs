use crate::types::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "plaza")]
#[command(about = "Browse a social feed from your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the config file (defaults to ~/.config/plaza/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the feed to stdout and exit
    Show {
        #[arg(long, default_value = "plain")]
        format: OutputFormat,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}
