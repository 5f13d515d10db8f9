//! threshnet command line entry point.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod telemetry;

#[derive(Parser)]
#[command(
    name = "threshnet",
    version,
    about = "Drive and train layered binary threshold nets"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Drive a saved net over an input pattern stream.
    Run {
        /// TOML settings file; falls back to run.toml, then to defaults.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Train a saved net against a desired output stream and save the result.
    Train {
        /// TOML settings file; falls back to train.toml, then to defaults.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Build the bundled two-input demonstration net and drive it.
    Demo,
}

fn main() -> anyhow::Result<()> {
    telemetry::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Run { config } => commands::run(config),
        Command::Train { config } => commands::train(config),
        Command::Demo => commands::demo(),
    }
}
