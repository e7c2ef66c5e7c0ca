// src/config/mod.rs
// Configuration: config file plus CLI/env overrides

pub mod file;
pub mod settings;

pub use file::GuruConfig;
pub use settings::{ConfigIssue, ConfigValidation, Overrides, Settings, Severity};
