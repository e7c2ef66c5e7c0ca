// src/config/file.rs
// File-based configuration from ~/.message-guru/config.toml

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Top-level config structure
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct GuruConfig {
    /// Hugging Face API key
    pub huggingface_api_key: Option<String>,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub provider: ProviderSection,

    #[serde(default)]
    pub fallback: FallbackSection,
}

/// `[server]` section
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// `[provider]` section
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct ProviderSection {
    /// Transport timeout for provider calls, in seconds
    pub request_timeout_secs: Option<u64>,
}

/// `[fallback]` section
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct FallbackSection {
    /// Seed for reproducible canned-reply selection
    pub seed: Option<u64>,
}

impl GuruConfig {
    /// Load config from ~/.message-guru/config.toml
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    /// Load config from a specific path, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    debug!(path = %path.display(), "Loaded config from file");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to parse config file");
                    Self::default()
                }
            },
            Err(_) => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                Self::default()
            }
        }
    }
}

/// Get the config file path
pub fn config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".message-guru")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
huggingface_api_key = "hf_file"

[server]
host = "127.0.0.1"
port = 8080

[provider]
request_timeout_secs = 15

[fallback]
seed = 99
"#;
        let config: GuruConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.huggingface_api_key.as_deref(), Some("hf_file"));
        assert_eq!(config.server.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(config.server.port, Some(8080));
        assert_eq!(config.provider.request_timeout_secs, Some(15));
        assert_eq!(config.fallback.seed, Some(99));
    }

    #[test]
    fn test_parse_empty_config() {
        let config: GuruConfig = toml::from_str("").unwrap();
        assert_eq!(config, GuruConfig::default());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GuruConfig::load_from(&dir.path().join("nope.toml"));
        assert_eq!(config, GuruConfig::default());
    }

    #[test]
    fn test_load_invalid_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "server = [not valid").unwrap();
        assert_eq!(GuruConfig::load_from(&path), GuruConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 4000\n").unwrap();
        assert_eq!(GuruConfig::load_from(&path).server.port, Some(4000));
    }

    #[test]
    fn test_config_path() {
        let path = config_path();
        assert!(path.to_string_lossy().contains(".message-guru"));
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }
}
