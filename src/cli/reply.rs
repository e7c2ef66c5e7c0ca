// src/cli/reply.rs
// One-shot reply generation from the command line

use anyhow::{Result, anyhow};
use message_guru::GuruError;
use message_guru::config::Settings;
use serde_json::json;

use super::build_generator;

/// Run one message through validation and generation, printing the reply
pub async fn run_reply(
    settings: &Settings,
    message: String,
    relationship: String,
    mood: String,
) -> Result<()> {
    let generator = build_generator(settings);
    let payload = json!({
        "message": message,
        "relationship": relationship,
        "mood": mood,
    });

    match generator.respond(&payload).await {
        Ok(response) => {
            println!("{}", response.reply);
            Ok(())
        }
        Err(GuruError::Validation(err)) => {
            for violation in &err.violations {
                eprintln!("  - {}", violation);
            }
            Err(anyhow!("Invalid request"))
        }
        Err(e) => Err(anyhow!("Failed to generate reply: {}", e.to_user_string())),
    }
}
