// src/web/error.rs
// HTTP error responses for the reply API

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{error, info};

use crate::error::GuruError;
use crate::reply::{FieldViolation, ValidationError};

/// Error returned by API handlers
#[derive(Debug)]
pub enum ApiError {
    /// Request failed validation (400)
    InvalidRequest(Vec<FieldViolation>),
    /// Reply could not be generated (500)
    GenerationFailed(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::GenerationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidRequest(err.violations)
    }
}

impl From<GuruError> for ApiError {
    fn from(err: GuruError) -> Self {
        match err {
            GuruError::Validation(v) => v.into(),
            other => Self::GenerationFailed(other.to_user_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            Self::InvalidRequest(details) => {
                info!(violations = details.len(), "Rejected invalid reply request");
                json!({
                    "error": "Invalid request",
                    "details": details,
                })
            }
            Self::GenerationFailed(message) => {
                error!(error = %message, "Reply generation error");
                json!({
                    "error": "Failed to generate reply",
                    "message": message,
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reply::GenerateError;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err: ApiError = GuruError::Validation(ValidationError::new(vec![
            FieldViolation::too_small("message", "Message is required"),
        ]))
        .into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_generate_error_maps_to_internal() {
        let err: ApiError = GuruError::Generate(GenerateError::TransientUnavailable).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        match err {
            ApiError::GenerationFailed(message) => {
                assert_eq!(message, "AI service is currently loading. Please try again in a moment!")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_request_body_shape() {
        let response = ApiError::InvalidRequest(vec![FieldViolation::invalid_type("mood", "Required")])
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Invalid request");
        assert_eq!(json["details"][0]["path"][0], "mood");
    }
}
