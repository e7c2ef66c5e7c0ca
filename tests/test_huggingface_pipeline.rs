// tests/test_huggingface_pipeline.rs
// Full pipeline against a mock inference endpoint

use httpmock::prelude::*;
use message_guru::GuruError;
use message_guru::llm::HuggingFaceClient;
use message_guru::reply::fallback::fallback_replies;
use message_guru::reply::{GenerateError, ReplyGenerator, SeededRandom};
use serde_json::json;
use std::sync::Arc;

const MODEL_PATH: &str = "/models/microsoft/DialoGPT-large";

fn generator_for(server: &MockServer) -> ReplyGenerator {
    let client = HuggingFaceClient::with_endpoint(
        reqwest::Client::new(),
        Some("hf_test".into()),
        server.url(MODEL_PATH),
    );
    ReplyGenerator::new(Arc::new(client), Arc::new(SeededRandom::new(5)))
}

fn tonight() -> serde_json::Value {
    json!({
        "message": "Hey, are we still on for tonight?",
        "relationship": "friend",
        "mood": "funny"
    })
}

#[tokio::test]
async fn test_pipeline_returns_provider_reply() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(MODEL_PATH)
                .header("authorization", "Bearer hf_test")
                .body_contains("Hey, are we still on for tonight?")
                .body_contains("humorous and light-hearted");
            then.status(200)
                .json_body(json!([{"generated_text": "Reply: Totally! Wouldn't miss it for the world 😄"}]));
        })
        .await;

    let response = generator_for(&server).respond(&tonight()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.reply, "Totally! Wouldn't miss it for the world 😄");
}

#[tokio::test]
async fn test_pipeline_falls_back_on_server_error() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path(MODEL_PATH);
            then.status(500).body("upstream exploded");
        })
        .await;

    let response = generator_for(&server).respond(&tonight()).await.unwrap();

    // Exactly one call, no retries
    assert_eq!(mock.hits_async().await, 1);
    assert!(fallback_replies("funny").contains(&response.reply.as_str()));
}

#[tokio::test]
async fn test_pipeline_surfaces_unauthorized() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path(MODEL_PATH);
            then.status(401).json_body(json!({"error": "Invalid username or password."}));
        })
        .await;

    let err = generator_for(&server).respond(&tonight()).await.unwrap_err();

    assert_eq!(mock.hits_async().await, 1);
    assert!(matches!(err, GuruError::Generate(GenerateError::Authentication)));
}

#[tokio::test]
async fn test_pipeline_surfaces_loading() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(MODEL_PATH);
            then.status(503).json_body(json!({"error": "Model microsoft/DialoGPT-large is currently loading"}));
        })
        .await;

    let err = generator_for(&server).respond(&tonight()).await.unwrap_err();
    assert!(matches!(err, GuruError::Generate(GenerateError::TransientUnavailable)));
}

#[tokio::test]
async fn test_invalid_request_makes_no_call() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path(MODEL_PATH);
            then.status(200).json_body(json!({"generated_text": "unused reply text"}));
        })
        .await;

    let err = generator_for(&server)
        .respond(&json!({"message": "", "relationship": "friend", "mood": "funny"}))
        .await
        .unwrap_err();

    assert!(matches!(err, GuruError::Validation(_)));
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn test_missing_key_surfaces_authentication_without_call() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path(MODEL_PATH);
            then.status(200)
                .json_body(json!([{"generated_text": "Anonymous reply that went through"}]));
        })
        .await;

    let client = HuggingFaceClient::with_endpoint(reqwest::Client::new(), None, server.url(MODEL_PATH));
    let generator = ReplyGenerator::new(Arc::new(client), Arc::new(SeededRandom::new(5)));

    let err = generator.respond(&tonight()).await.unwrap_err();

    assert!(matches!(err, GuruError::Generate(GenerateError::Authentication)));
    assert_eq!(mock.hits_async().await, 0);
}
