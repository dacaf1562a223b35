use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use four_in_a_row::config::AppConfig;
use four_in_a_row::ui::{App, LineInput};

/// Two players take turns dropping tiles, trying to get four in a row.
#[derive(Parser)]
#[command(name = "four-in-a-row", about = "Play a game of four in a row")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "four_in_a_row.toml")]
    config: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board on stdout
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    let input = LineInput::new(io::stdin().lock(), &config.input, &config.display);
    let mut app = App::new(config, input, io::stdout().lock())?;
    let end = app.run()?;
    tracing::debug!(?end, "session ended");

    Ok(())
}
