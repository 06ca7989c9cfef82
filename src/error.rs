//! Error types for the navigation bar

use thiserror::Error;

/// Failures of the browser capabilities and configuration the bar depends on.
///
/// None of these are surfaced to the visitor: callers log them and fall back
/// to the default (not elevated, wide layout) presentation.
#[derive(Error, Debug)]
pub enum NavError {
    #[error("No browser window available")]
    WindowUnavailable,

    #[error("Failed to attach '{event}' listener: {reason}")]
    Listener { event: &'static str, reason: String },

    #[error("Media query '{query}' unavailable: {reason}")]
    MediaQuery { query: String, reason: String },

    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for navigation bar operations
pub type NavResult<T> = Result<T, NavError>;
