//! Timed Tic-Tac-Toe - command-line entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use timed_tictactoe::{AppConfig, Cli, Command, init_stderr_logging, parse_script, run_replay, tui};
use tracing::{info, instrument};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            turn_seconds,
            style,
        } => {
            let config = AppConfig::load_or_default(&cli.config)?.with_overrides(turn_seconds, style)?;
            tui::run_tui(config).await
        }
        Command::Replay {
            script,
            turn_seconds,
            style,
            events,
        } => {
            init_stderr_logging();
            let config = AppConfig::load_or_default(&cli.config)?.with_overrides(turn_seconds, style)?;
            replay(&config, &script, events)
        }
        Command::Config => {
            init_stderr_logging();
            let config = AppConfig::load_or_default(&cli.config)?;
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Runs a scripted game and prints the outcome.
#[instrument(skip(config))]
fn replay(config: &AppConfig, script: &str, events: bool) -> Result<()> {
    let steps = parse_script(script)?;
    info!(steps = steps.len(), "Replaying script");
    let report = run_replay(config.engine_settings(), &steps);

    if events {
        for event in &report.events {
            println!("{}", serde_json::to_string(event)?);
        }
        println!();
    }
    println!("{}", report.summary());
    Ok(())
}
