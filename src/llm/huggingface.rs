// src/llm/huggingface.rs
// Hugging Face Inference API client

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, instrument};

use super::logging::{log_completion, log_failure, preview};
use super::provider::{GenerationParams, ProviderError, TextGenerator};

/// Inference endpoint for the reply model
pub const HUGGINGFACE_API_URL: &str =
    "https://api-inference.huggingface.co/models/microsoft/DialoGPT-large";

/// Characters of an error body kept in errors and logs
const BODY_PREVIEW_CHARS: usize = 300;

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationParams,
}

/// Hugging Face text-generation client (single attempt, no retries).
///
/// A client without an API key fails every call with `Unauthorized`.
pub struct HuggingFaceClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HuggingFaceClient {
    /// Create a client for the built-in endpoint
    pub fn new(http: reqwest::Client, api_key: Option<String>) -> Self {
        Self::with_endpoint(http, api_key, HUGGINGFACE_API_URL)
    }

    /// Create a client for another endpoint (local mock servers)
    pub fn with_endpoint(
        http: reqwest::Client,
        api_key: Option<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            api_key,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// POST the prompt and return the decoded JSON body
    #[instrument(skip(self, prompt, params), fields(provider = "huggingface", prompt_len = prompt.len()))]
    pub async fn generate_text(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<Value, ProviderError> {
        let start = Instant::now();
        let result = self.send(prompt, params).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok((status, body_len, _)) => log_completion("Hugging Face", duration_ms, *status, *body_len),
            Err(e) => log_failure("Hugging Face", duration_ms, e),
        }

        result.map(|(_, _, value)| value)
    }

    async fn send(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<(u16, usize, Value), ProviderError> {
        // A missing key is an authentication failure, never an anonymous call
        let Some(key) = &self.api_key else {
            return Err(ProviderError::Unauthorized);
        };

        let body = InferenceRequest {
            inputs: prompt,
            parameters: params,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(ProviderError::from_status(
                status.as_u16(),
                preview(&text, BODY_PREVIEW_CHARS),
            ));
        }

        debug!(body = %preview(&text, BODY_PREVIEW_CHARS), "Provider response body");

        let value: Value = serde_json::from_str(&text).map_err(|e| {
            ProviderError::Decode(format!(
                "{}. Response preview: {}",
                e,
                preview(&text, BODY_PREVIEW_CHARS)
            ))
        })?;

        Ok((status.as_u16(), text.len(), value))
    }
}

#[async_trait]
impl TextGenerator for HuggingFaceClient {
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<Value, ProviderError> {
        self.generate_text(prompt, params).await
    }

    fn name(&self) -> &'static str {
        "huggingface"
    }
}
