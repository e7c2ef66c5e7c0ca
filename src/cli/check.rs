// src/cli/check.rs
// Configuration report

use anyhow::Result;
use message_guru::config::Settings;
use message_guru::llm::HUGGINGFACE_API_URL;

/// Print resolved settings followed by any problems found in them
pub fn run_check_config(settings: &Settings) -> Result<()> {
    let validation = settings.validate();

    println!("Provider endpoint: {}", HUGGINGFACE_API_URL);
    println!(
        "API key:           {}",
        if settings.has_api_key() { "configured" } else { "missing" }
    );
    println!("Listen address:    {}", settings.bind_address());
    println!("Request timeout:   {}s", settings.request_timeout.as_secs());
    match settings.fallback_seed {
        Some(seed) => println!("Fallback seed:     {}", seed),
        None => println!("Fallback seed:     (random)"),
    }
    println!();

    if validation.issues().is_empty() {
        println!("Configuration OK");
    }
    for issue in validation.issues() {
        println!("  - {}", issue);
    }

    validation.into_result()?;
    Ok(())
}
