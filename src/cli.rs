use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Decline someone with style.
#[derive(Debug, Parser)]
#[command(name = "nope", version, about)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the landing page and the /api/nope proxy
    Serve,

    /// Fetch a phrase through the proxy and print the card
    Card {
        /// Endpoint to fetch from instead of the configured proxy URL
        #[arg(long)]
        url: Option<String>,

        /// Copy the phrase to the clipboard once loaded
        #[arg(long)]
        copy: bool,
    },
}
