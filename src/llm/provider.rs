// src/llm/provider.rs
// Text-generation provider abstraction

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Fixed generation parameters sent with every provider call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationParams {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub do_sample: bool,
    pub return_full_text: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: 100,
            temperature: 0.7,
            do_sample: true,
            return_full_text: false,
        }
    }
}

/// Failure of a single provider call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("provider rejected the credential (401)")]
    Unauthorized,

    #[error("provider model is still loading (503)")]
    Loading,

    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("response decode error: {0}")]
    Decode(String),
}

impl ProviderError {
    /// Categorize a non-success HTTP status
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 => Self::Unauthorized,
            503 => Self::Loading,
            _ => Self::Status { status, body },
        }
    }
}

/// Remote text-generation service. Implementations make exactly one call per
/// `generate` and never retry.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a prompt and return the provider's raw JSON payload
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<Value, ProviderError>;

    /// Provider name for logs
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_match_wire_contract() {
        let json = serde_json::to_value(GenerationParams::default()).unwrap();
        assert_eq!(json["max_new_tokens"], 100);
        assert_eq!(json["do_sample"], true);
        assert_eq!(json["return_full_text"], false);
        let temperature = json["temperature"].as_f64().unwrap();
        assert!((temperature - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_status_categorization() {
        assert_eq!(ProviderError::from_status(401, String::new()), ProviderError::Unauthorized);
        assert_eq!(ProviderError::from_status(503, "loading".into()), ProviderError::Loading);
        assert_eq!(
            ProviderError::from_status(500, "boom".into()),
            ProviderError::Status {
                status: 500,
                body: "boom".into()
            }
        );
        assert!(matches!(
            ProviderError::from_status(403, String::new()),
            ProviderError::Status { status: 403, .. }
        ));
    }

    #[test]
    fn test_error_display() {
        let err = ProviderError::Status {
            status: 429,
            body: "rate limited".into(),
        };
        assert_eq!(err.to_string(), "provider returned status 429: rate limited");
        assert!(ProviderError::Transport("refused".into()).to_string().contains("refused"));
    }
}
