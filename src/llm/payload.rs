// src/llm/payload.rs
// Decoding of the text-generation response payload
//
// Shapes seen from inference endpoints:
//   [{"generated_text": "..."}]   or   [{"text": "..."}]
//   {"generated_text": "..."}
//   {"text": "..."}
// New shapes get a new variant here and nowhere else.

use serde::Deserialize;
use serde_json::Value;

/// One generated result object
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneratedItem {
    #[serde(default)]
    pub generated_text: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl GeneratedItem {
    fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }

    /// `generated_text` wins over `text`; empty strings count as missing
    fn text(&self) -> Option<&str> {
        self.generated_text
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.text.as_deref().filter(|s| !s.is_empty()))
    }
}

/// Recognized payload shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedPayload {
    /// Sequence of results; only the first is used
    Batch(Option<GeneratedItem>),
    /// Single result object
    Single(GeneratedItem),
    /// Anything else
    Unrecognized,
}

impl GeneratedPayload {
    pub fn decode(value: &Value) -> Self {
        match value {
            Value::Array(items) => Self::Batch(items.first().and_then(GeneratedItem::from_value)),
            Value::Object(_) => GeneratedItem::from_value(value)
                .map(Self::Single)
                .unwrap_or(Self::Unrecognized),
            _ => Self::Unrecognized,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Batch(item) => item.as_ref().and_then(GeneratedItem::text),
            Self::Single(item) => item.text(),
            Self::Unrecognized => None,
        }
    }
}

/// Generated text from a payload, empty when no shape matches
pub fn extract_text(value: &Value) -> String {
    GeneratedPayload::decode(value)
        .text()
        .unwrap_or_default()
        .to_string()
}
