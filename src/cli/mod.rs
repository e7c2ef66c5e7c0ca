// src/cli/mod.rs
// CLI module for Message Guru commands

use clap::{Args, Parser, Subcommand};
use message_guru::config::{GuruConfig, Overrides, Settings};
use message_guru::http::create_shared_client;
use message_guru::llm::HuggingFaceClient;
use message_guru::reply::{RandomSource, ReplyGenerator, SeededRandom, ThreadRandom};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

pub mod check;
pub mod reply;
pub mod serve;

pub use check::run_check_config;
pub use reply::run_reply;
pub use serve::run_server;

#[derive(Parser)]
#[command(name = "message-guru")]
#[command(about = "Generate text message replies for a relationship and mood")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Settings shared by every command
#[derive(Args)]
pub struct GlobalArgs {
    /// Hugging Face API key
    #[arg(long, env = "HUGGINGFACE_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Listen host
    #[arg(long, env = "HOST", global = true)]
    pub host: Option<String>,

    /// Listen port (default: 3001)
    #[arg(short, long, env = "PORT", global = true)]
    pub port: Option<u16>,

    /// Transport timeout for provider calls, in seconds
    #[arg(long, env = "GURU_REQUEST_TIMEOUT_SECS", global = true)]
    pub request_timeout_secs: Option<u64>,

    /// Seed for reproducible fallback replies
    #[arg(long, env = "GURU_FALLBACK_SEED", global = true)]
    pub fallback_seed: Option<u64>,

    /// Config file (default: ~/.message-guru/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP service (default)
    Serve,

    /// Generate one reply and print it
    Reply {
        /// Relationship to the sender (friend, girlfriend, boyfriend, family, colleague, stranger)
        #[arg(short, long, default_value = "friend")]
        relationship: String,

        /// Reply mood (funny, witty, serious, romantic, flirty, sarcastic)
        #[arg(short, long, default_value = "funny")]
        mood: String,

        /// Incoming message to reply to
        message: String,
    },

    /// Validate configuration and print a report
    CheckConfig,
}

impl GlobalArgs {
    /// Resolve settings: CLI/env > config file > defaults
    pub fn settings(&self) -> Settings {
        let file = match &self.config {
            Some(path) => GuruConfig::load_from(path),
            None => GuruConfig::load(),
        };

        let overrides = Overrides {
            api_key: self.api_key.clone(),
            host: self.host.clone(),
            port: self.port,
            request_timeout_secs: self.request_timeout_secs,
            fallback_seed: self.fallback_seed,
        };

        Settings::resolve(overrides, &file)
    }
}

/// Wire the provider client and random source into a generator
pub fn build_generator(settings: &Settings) -> ReplyGenerator {
    let http = create_shared_client(settings.request_timeout);
    let provider = Arc::new(HuggingFaceClient::new(http, settings.api_key.clone()));

    let random: Arc<dyn RandomSource> = match settings.fallback_seed {
        Some(seed) => {
            info!(seed, "Using seeded fallback selection");
            Arc::new(SeededRandom::new(seed))
        }
        None => Arc::new(ThreadRandom),
    };

    ReplyGenerator::new(provider, random)
}

/// Dispatch a parsed command line
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = cli.global.settings();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server(settings).await,
        Commands::Reply {
            relationship,
            mood,
            message,
        } => run_reply(&settings, message, relationship, mood).await,
        Commands::CheckConfig => run_check_config(&settings),
    }
}
