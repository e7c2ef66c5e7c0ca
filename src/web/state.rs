// src/web/state.rs
// Web server state

use std::sync::Arc;

use crate::reply::ReplyGenerator;

/// Shared application state. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Reply pipeline (provider client and random source inside)
    pub generator: Arc<ReplyGenerator>,
}

impl AppState {
    pub fn new(generator: ReplyGenerator) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }
}
