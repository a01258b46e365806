//! Command-line interface for strictly_memory.

use clap::{Parser, Subcommand};

/// Strictly Memory - memory challenge and task board in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_memory")]
#[command(about = "Memory challenge game sessions driven from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a game config TOML file (defaults apply if absent)
    #[arg(short, long, global = true, default_value = "memory_config.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the memory challenge, reading commands from stdin
    Play,

    /// Print the effective game configuration as TOML
    Config,

    /// Print the demo task board as JSON
    Board,
}
