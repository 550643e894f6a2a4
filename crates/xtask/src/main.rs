//! Development tasks for the zone workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo run -p xtask -- <command>`

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Board, Obstacles, Replay};

/// Development tasks for the zone workspace
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for the zone engine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Dump the baked obstacle table
    Obstacles(Obstacles),

    /// Render the zone as an ASCII board
    Board(Board),

    /// Drive a scripted sequence of moves through the runtime
    Replay(Replay),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Obstacles(cmd) => cmd.execute(),
        Command::Board(cmd) => cmd.execute(),
        Command::Replay(cmd) => cmd.run().await,
    }
}
