// src/web/api.rs
// Reply API handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use tracing::{Instrument, info_span};
use uuid::Uuid;

use super::error::{ApiError, ApiResult};
use super::state::AppState;
use crate::reply::{FieldViolation, ReplyResponse, ValidationError};

/// `GET /api/health`
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

/// `POST /api/generate-reply`
pub async fn generate_reply(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<ReplyResponse>> {
    let span = info_span!("generate_reply", request_id = %Uuid::new_v4());

    async move {
        let Json(payload) = body.map_err(|rejection| {
            ApiError::from(ValidationError::new(vec![FieldViolation::invalid_body(
                rejection.body_text(),
            )]))
        })?;

        let response = state.generator.respond(&payload).await?;
        Ok::<_, ApiError>(Json(response))
    }
    .instrument(span)
    .await
}
