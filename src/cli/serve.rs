// src/cli/serve.rs
// HTTP service startup

use anyhow::Result;
use message_guru::config::Settings;
use message_guru::web::{self, AppState};
use tracing::info;

use super::build_generator;

/// Start the HTTP service with resolved settings
pub async fn run_server(settings: Settings) -> Result<()> {
    settings.log_validation().into_result()?;

    let generator = build_generator(&settings);
    info!(
        provider = generator.provider_name(),
        api_key = settings.has_api_key(),
        timeout_secs = settings.request_timeout.as_secs(),
        "Starting Message Guru"
    );

    web::serve(&settings.bind_address(), AppState::new(generator)).await
}
