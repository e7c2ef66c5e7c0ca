// src/config/settings.rs
// Resolved process-wide settings: CLI/env > config file > defaults

use std::fmt;
use std::time::Duration;
use strum::Display;
use tracing::{debug, error, warn};

use super::file::GuruConfig;
use crate::error::{GuruError, Result};
use crate::http::DEFAULT_TIMEOUT;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;

/// Values given on the command line or through environment variables
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_key: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub request_timeout_secs: Option<u64>,
    pub fallback_seed: Option<u64>,
}

/// Settings read once at startup and held immutably afterwards
#[derive(Clone)]
pub struct Settings {
    /// Hugging Face API key (HUGGINGFACE_API_KEY)
    pub api_key: Option<String>,
    pub host: String,
    pub port: u16,
    /// Transport timeout for provider calls
    pub request_timeout: Duration,
    /// Seed for canned-reply selection; thread RNG when unset
    pub fallback_seed: Option<u64>,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("request_timeout", &self.request_timeout)
            .field("fallback_seed", &self.fallback_seed)
            .finish()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(Overrides::default(), &GuruConfig::default())
    }
}

impl Settings {
    /// Merge overrides over the config file over built-in defaults
    pub fn resolve(overrides: Overrides, file: &GuruConfig) -> Self {
        let api_key = non_empty(overrides.api_key)
            .or_else(|| non_empty(file.huggingface_api_key.clone()));

        let request_timeout = overrides
            .request_timeout_secs
            .or(file.provider.request_timeout_secs)
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        let settings = Self {
            api_key,
            host: non_empty(overrides.host)
                .or_else(|| non_empty(file.server.host.clone()))
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: overrides.port.or(file.server.port).unwrap_or(DEFAULT_PORT),
            request_timeout,
            fallback_seed: overrides.fallback_seed.or(file.fallback.seed),
        };
        debug!(settings = ?settings, "Settings resolved");
        settings
    }

    /// Address string for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Check the resolved settings for problems
    pub fn validate(&self) -> ConfigValidation {
        let mut validation = ConfigValidation::default();

        if !self.has_api_key() {
            validation.warn(
                "No HUGGINGFACE_API_KEY configured; every reply request will fail authentication",
            );
        }

        if self.port == 0 {
            validation.warn("Port 0 selected; the OS will pick a free port");
        }

        if self.host.chars().any(char::is_whitespace) {
            validation.fail(format!("Host '{}' contains whitespace", self.host));
        }

        validation
    }

    /// Validate and emit each issue at its own level
    pub fn log_validation(&self) -> ConfigValidation {
        let validation = self.validate();
        for issue in validation.issues() {
            match issue.severity {
                Severity::Warning => warn!("{}", issue.message),
                Severity::Error => error!("{}", issue.message),
            }
        }
        validation
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// One configuration problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Problems found in resolved settings, in the order they were found
#[derive(Debug, Default)]
pub struct ConfigValidation {
    issues: Vec<ConfigIssue>,
}

impl ConfigValidation {
    fn push(&mut self, severity: Severity, message: impl Into<String>) {
        self.issues.push(ConfigIssue {
            severity,
            message: message.into(),
        });
    }

    fn warn(&mut self, message: impl Into<String>) {
        self.push(Severity::Warning, message);
    }

    fn fail(&mut self, message: impl Into<String>) {
        self.push(Severity::Error, message);
    }

    pub fn issues(&self) -> &[ConfigIssue] {
        &self.issues
    }

    fn errors(&self) -> impl Iterator<Item = &ConfigIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    /// Warnings alone leave the settings usable
    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    /// `GuruError::Config` listing every error-level issue, if any
    pub fn into_result(self) -> Result<Self> {
        if self.is_valid() {
            return Ok(self);
        }
        let messages: Vec<&str> = self.errors().map(|i| i.message.as_str()).collect();
        Err(GuruError::Config(messages.join("; ")))
    }
}
