// src/reply/validate.rs
// Input validation for reply-generation requests

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use strum::VariantNames;
use thiserror::Error;

use super::types::{Mood, Relationship, ReplyRequest};

/// Kind of a single field violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    InvalidType,
    TooSmall,
    InvalidEnumValue,
    InvalidBody,
}

/// One failed check, naming the offending field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Field path; empty when the whole body is at fault
    pub path: Vec<String>,
    pub code: ViolationCode,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &str, code: ViolationCode, message: impl Into<String>) -> Self {
        let path = if field.is_empty() {
            Vec::new()
        } else {
            vec![field.to_string()]
        };
        Self {
            path,
            code,
            message: message.into(),
        }
    }

    pub fn invalid_type(field: &str, message: impl Into<String>) -> Self {
        Self::new(field, ViolationCode::InvalidType, message)
    }

    pub fn too_small(field: &str, message: impl Into<String>) -> Self {
        Self::new(field, ViolationCode::TooSmall, message)
    }

    pub fn invalid_enum_value(field: &str, message: impl Into<String>) -> Self {
        Self::new(field, ViolationCode::InvalidEnumValue, message)
    }

    /// The request body could not be read as JSON at all
    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self::new("", ViolationCode::InvalidBody, message)
    }

    /// Name of the offending field, if the violation is field-level
    pub fn field(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field() {
            Some(field) => write!(f, "{}: {}", field, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Request rejected before any provider call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid request: {}", summarize(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// Whether any violation names the given field
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field() == Some(field))
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validate an untyped payload into a `ReplyRequest`.
///
/// Every field is checked so the caller learns about all failures at once.
pub fn validate_request(payload: &Value) -> Result<ReplyRequest, ValidationError> {
    let Some(object) = payload.as_object() else {
        return Err(ValidationError::new(vec![FieldViolation::invalid_type(
            "",
            format!("Expected object, received {}", type_name(payload)),
        )]));
    };

    let mut violations = Vec::new();

    let message = match object.get("message") {
        None | Some(Value::Null) => {
            violations.push(FieldViolation::invalid_type("message", "Required"));
            None
        }
        Some(Value::String(s)) if s.is_empty() => {
            violations.push(FieldViolation::too_small("message", "Message is required"));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            violations.push(FieldViolation::invalid_type(
                "message",
                format!("Expected string, received {}", type_name(other)),
            ));
            None
        }
    };

    let relationship = parse_enum::<Relationship>(object.get("relationship"), "relationship")
        .map_err(|v| violations.push(v))
        .ok();
    let mood = parse_enum::<Mood>(object.get("mood"), "mood")
        .map_err(|v| violations.push(v))
        .ok();

    match (message, relationship, mood) {
        (Some(message), Some(relationship), Some(mood)) if violations.is_empty() => {
            Ok(ReplyRequest {
                message,
                relationship,
                mood,
            })
        }
        _ => Err(ValidationError::new(violations)),
    }
}

fn parse_enum<T>(value: Option<&Value>, field: &str) -> Result<T, FieldViolation>
where
    T: FromStr + VariantNames,
{
    match value {
        None | Some(Value::Null) => Err(FieldViolation::invalid_type(field, "Required")),
        Some(Value::String(s)) => T::from_str(s).map_err(|_| {
            let expected = T::VARIANTS
                .iter()
                .map(|v| format!("'{}'", v))
                .collect::<Vec<_>>()
                .join(" | ");
            FieldViolation::invalid_enum_value(
                field,
                format!("Invalid enum value. Expected {}, received '{}'", expected, s),
            )
        }),
        Some(other) => Err(FieldViolation::invalid_type(
            field,
            format!("Expected string, received {}", type_name(other)),
        )),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
