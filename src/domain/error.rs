//! Domain error types

use thiserror::Error;

/// Error when parsing a wait-duration string
#[derive(Debug, Clone, Error)]
#[error("Invalid duration format: \"{input}\". Expected format: <number>s, <number>m, or <number>m<number>s (e.g., 30s, 5m, 2m30s)")]
pub struct WaitParseError {
    pub input: String,
}

/// Terminal error of one orchestration call.
///
/// Every variant is a distinct failure class so callers can pick
/// retry/UI treatment per kind: a provider auth issue, a rejected
/// submission, a provider that took too long, a job the provider
/// itself failed, a broken connection, or a malformed result payload.
#[derive(Debug, Clone, Error)]
pub enum OrchestrationError {
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Job submission failed: {0}")]
    SubmitFailed(String),

    #[error("Polling budget exhausted before the job reached a terminal state")]
    PollTimeout,

    #[error("Transcription job failed: {0}")]
    JobFailed(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid transcript payload: {0}")]
    Validation(String),

    #[error("Transcription cancelled")]
    Cancelled,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
