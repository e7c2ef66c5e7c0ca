// src/llm/mod.rs
// Text-generation provider clients

pub mod huggingface;
pub mod logging;
pub mod payload;
pub mod provider;

pub use huggingface::{HUGGINGFACE_API_URL, HuggingFaceClient};
pub use payload::{GeneratedPayload, extract_text};
pub use provider::{GenerationParams, ProviderError, TextGenerator};
