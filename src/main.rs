//! ttt_client - terminal front end
//!
//! Plays one game at a time against a remote server, reading cell numbers
//! from stdin and printing the board after every action.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;
use ttt_client::{ClientConfig, GameApi, RestGameApi, SessionController};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Board goes to stdout, logs to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ttt_client=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            api_url,
            player_id,
            config,
        } => run_play(api_url, player_id, config).await,
    }
}

/// Resolves configuration: defaults, then file, then environment, then flags.
#[instrument]
fn load_config(
    api_url: Option<String>,
    player_id: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<ClientConfig> {
    let mut config = match config_path {
        Some(path) => ClientConfig::from_file(&path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => ClientConfig::default(),
    }
    .with_env()?;

    if let Some(url) = api_url {
        config = config.with_api_base_url(url);
    }
    if let Some(id) = player_id {
        config = config.with_player_id(id);
    }
    Ok(config)
}

/// Runs the interactive game loop.
async fn run_play(
    api_url: Option<String>,
    player_id: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(api_url, player_id, config_path)?;
    info!(api_base_url = %config.api_base_url(), player_id = %config.player_id(), "Starting client");

    let api = RestGameApi::new(config.api_base_url());
    let mut controller = SessionController::new(api, config.player_id().clone());
    let mut show_details = false;

    println!("Select any square to start (1-9). r = start over, d = details, q = quit");
    render(&controller, show_details);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "q" => break,
            "d" => show_details = !show_details,
            "r" => {
                if let Err(e) = controller.reset().await {
                    warn!(error = %e, "Could not start a new game");
                    println!("Could not start a new game: {}", e);
                }
            }
            input => match input.parse::<u32>() {
                Ok(cell) => {
                    if let Err(e) = controller.on_cell_selected(cell).await {
                        warn!(error = %e, "Could not start game");
                        println!("Could not start game: {}", e);
                    }
                }
                Err(_) => println!("Enter a cell number 1-9, r, d or q"),
            },
        }
        render(&controller, show_details);
    }

    info!("Exiting");
    Ok(())
}

/// Prints the board and, optionally, game details.
fn render<A: GameApi>(controller: &SessionController<A>, show_details: bool) {
    let session = controller.session();
    println!("\n{}\n", controller.board());

    if session.is_complete() {
        match session.winner() {
            Some(winner) => println!("Game over: {} wins", winner),
            None => println!("Game over: draw"),
        }
    }

    if show_details {
        if let Some(id) = session.id() {
            println!("Game ID: {}", id);
        }
        println!("Status: {}", session.status());
        for mv in session.moves() {
            println!("  {}", mv);
        }
    }
}
