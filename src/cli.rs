//! Command-line interface for ttt_client.

use clap::{Parser, Subcommand};

/// Tic-tac-toe against a remote game server
#[derive(Parser, Debug)]
#[command(name = "ttt_client")]
#[command(about = "Play tic-tac-toe against a remote game server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Game server URL (overrides config file and TTT_API_URL)
        #[arg(long)]
        api_url: Option<String>,

        /// Player identifier sent to the server (overrides TTT_PLAYER_ID)
        #[arg(long)]
        player_id: Option<String>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },
}
