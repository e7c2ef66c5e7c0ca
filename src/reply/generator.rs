// src/reply/generator.rs
// Reply generation: prompt, provider call, normalization, fallback

use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

use super::fallback::{RandomSource, select_fallback};
use super::normalize::{is_usable, normalize_reply};
use super::prompt::build_prompt;
use super::types::{ReplyRequest, ReplyResponse};
use super::validate::validate_request;
use crate::error::GuruError;
use crate::llm::{GenerationParams, ProviderError, TextGenerator, extract_text};

/// Provider failures that are surfaced instead of masked by a fallback
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Authentication error with Hugging Face. Please check your API token.")]
    Authentication,

    #[error("AI service is currently loading. Please try again in a moment!")]
    TransientUnavailable,
}

/// Where a reply came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Provider,
    Fallback,
}

/// A reply plus its origin, for logging and tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedReply {
    pub text: String,
    pub source: ReplySource,
}

/// Turns validated requests into reply strings.
///
/// Holds no per-request state; one instance serves concurrent requests.
pub struct ReplyGenerator {
    provider: Arc<dyn TextGenerator>,
    random: Arc<dyn RandomSource>,
    params: GenerationParams,
}

impl ReplyGenerator {
    pub fn new(provider: Arc<dyn TextGenerator>, random: Arc<dyn RandomSource>) -> Self {
        Self {
            provider,
            random,
            params: GenerationParams::default(),
        }
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Generate a reply, falling back to a canned one on ordinary failures.
    ///
    /// Only authentication and model-loading failures are returned as errors.
    pub async fn generate_reply(&self, request: &ReplyRequest) -> Result<String, GenerateError> {
        self.generate(request).await.map(|reply| reply.text)
    }

    /// Same as [`generate_reply`](Self::generate_reply), also reporting the source
    #[instrument(skip_all, fields(relationship = %request.relationship, mood = %request.mood))]
    pub async fn generate(&self, request: &ReplyRequest) -> Result<GeneratedReply, GenerateError> {
        let prompt = build_prompt(request);
        debug!(prompt_len = prompt.len(), provider = self.provider.name(), "Calling provider");

        let payload = match self.provider.generate(&prompt, &self.params).await {
            Ok(payload) => payload,
            Err(ProviderError::Unauthorized) => {
                error!("Provider rejected the API credential");
                return Err(GenerateError::Authentication);
            }
            Err(ProviderError::Loading) => {
                warn!("Provider model is still loading");
                return Err(GenerateError::TransientUnavailable);
            }
            Err(e) => {
                warn!(error = %e, "Provider call failed, using fallback reply");
                return Ok(self.fallback(request));
            }
        };

        let text = normalize_reply(&extract_text(&payload));
        if !is_usable(&text) {
            warn!(reply_len = text.chars().count(), "Provider reply unusable, using fallback reply");
            return Ok(self.fallback(request));
        }

        Ok(GeneratedReply {
            text,
            source: ReplySource::Provider,
        })
    }

    fn fallback(&self, request: &ReplyRequest) -> GeneratedReply {
        GeneratedReply {
            text: select_fallback(request.mood.as_str(), self.random.as_ref()).to_string(),
            source: ReplySource::Fallback,
        }
    }

    /// Validate an untyped payload and generate a reply for it, timing the whole call
    pub async fn respond(&self, payload: &Value) -> Result<ReplyResponse, GuruError> {
        let start = Instant::now();
        let request = validate_request(payload)?;
        let reply = self.generate(&request).await?;
        let response_time = start.elapsed().as_millis() as u64;

        info!(
            source = ?reply.source,
            reply_len = reply.text.chars().count(),
            response_time_ms = response_time,
            "Reply generated"
        );

        Ok(ReplyResponse {
            reply: reply.text,
            response_time,
        })
    }
}
