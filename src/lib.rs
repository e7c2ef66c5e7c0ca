// src/lib.rs
// Message Guru - reply generation with provider fallback

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod error;
pub mod http;
pub mod llm;
pub mod reply;
pub mod web;

pub use error::{GuruError, Result};
