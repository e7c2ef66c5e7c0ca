// src/http.rs
// Shared outbound HTTP client

use std::time::Duration;
use tracing::warn;

/// Default request timeout for provider calls
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Default connect timeout
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Create the shared HTTP client with the given request timeout.
///
/// Created once at startup and handed to the provider client. The timeout is
/// the transport's; a timed-out call is an ordinary provider failure.
pub fn create_shared_client(request_timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(request_timeout)
        .connect_timeout(CONNECT_TIMEOUT.min(request_timeout))
        .pool_max_idle_per_host(10)
        .user_agent(concat!("message-guru/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|e| {
            warn!(error = %e, "HTTP client builder failed; provider calls run without the configured timeout");
            reqwest::Client::new()
        })
}
