//! Strictly Memory - Unified CLI
//!
//! Plays the memory challenge from a terminal and inspects configuration.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strictly_memory::{CellStatus, GameConfig, GameGenerator, Session, SessionRuntime, TaskBoard};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    match cli.command {
        Command::Play => run_play(config).await,
        Command::Config => {
            print!("{}", config.to_toml_string()?);
            Ok(())
        }
        Command::Board => {
            println!("{}", serde_json::to_string_pretty(&TaskBoard::default())?);
            Ok(())
        }
    }
}

/// Loads the config file if present, falling back to defaults.
#[instrument]
fn load_config(path: &Path) -> Result<GameConfig> {
    if path.exists() {
        Ok(GameConfig::from_file(path)?)
    } else {
        info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        Ok(GameConfig::default())
    }
}

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Start,
    Reset,
    Pick(usize),
    Quit,
    Unknown,
}

fn parse_input(line: &str) -> Input {
    let mut words = line.split_whitespace();
    match (words.next(), words.next()) {
        (Some("start" | "s"), None) => Input::Start,
        (Some("reset" | "again" | "r"), None) => Input::Reset,
        (Some("quit" | "q"), None) => Input::Quit,
        (Some("pick" | "p"), Some(cell)) => cell.parse().map_or(Input::Unknown, Input::Pick),
        (Some(cell), None) => cell.parse().map_or(Input::Unknown, Input::Pick),
        _ => Input::Unknown,
    }
}

/// Run the memory challenge against stdin
#[instrument(skip(config))]
async fn run_play(config: GameConfig) -> Result<()> {
    let mut runtime = SessionRuntime::new(GameGenerator::new(config));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Commands: start, pick <cell>, reset, quit");
    print_session(runtime.session());

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("Input closed");
                    break;
                };
                match parse_input(&line) {
                    Input::Start => runtime.start_game(),
                    Input::Reset => runtime.reset_game(),
                    Input::Pick(cell) => runtime.pick_cell(cell),
                    Input::Quit => break,
                    Input::Unknown => {
                        println!("Unknown command: {}", line.trim());
                        continue;
                    }
                }
            }
            Some(token) = runtime.next_timer() => {
                runtime.handle_timer(token);
            }
        }
        print_session(runtime.session());
    }

    Ok(())
}

fn print_session(session: &Session) {
    let grid_size = *session.config().grid_size();
    let mut grid = String::new();
    for (cell, status) in session.cell_statuses() {
        grid.push(match status {
            CellStatus::Normal => '.',
            CellStatus::Highlight => '#',
            CellStatus::Correct => '+',
            CellStatus::Wrong => 'x',
        });
        grid.push(if (cell + 1) % grid_size == 0 { '\n' } else { ' ' });
    }
    println!(
        "[{} | {}s] {}\n{}",
        session.status(),
        session.countdown(),
        session.status().message(),
        grid
    );
}
