// src/main.rs
// Message Guru - relationship- and mood-aware reply generator

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env from the current directory if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr so `reply` output stays clean on stdout
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli::run(cli).await
}
