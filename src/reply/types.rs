// src/reply/types.rs
// Request-scoped value objects for reply generation

use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};

/// Who sent the incoming message, relative to the person replying
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
    Display, EnumString, IntoStaticStr, VariantNames, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Relationship {
    Friend,
    Girlfriend,
    Boyfriend,
    Family,
    Colleague,
    Stranger,
}

impl Relationship {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Tone the generated reply should take
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
    Display, EnumString, IntoStaticStr, VariantNames, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Mood {
    Funny,
    Witty,
    Serious,
    Romantic,
    Flirty,
    Sarcastic,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// A validated reply-generation request, built only by `validate_request`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyRequest {
    /// Incoming message text, never empty
    pub message: String,
    pub relationship: Relationship,
    pub mood: Mood,
}

/// Body returned by `POST /api/generate-reply`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyResponse {
    pub reply: String,
    /// Milliseconds spent handling the request
    pub response_time: u64,
}
