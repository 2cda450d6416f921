//! Unified error handling
//!
//! Provides the application-level error type shared by every crate in the
//! workspace:
//! - [`AppError`] - application error enum
//! - [`AppResult`] - result alias used on all fallible paths

use thiserror::Error;

/// Application error enum
///
/// # Classification
///
/// | Category | Meaning |
/// |----------|---------|
/// | Configuration | bad or missing deploy-time settings, fails the run immediately |
/// | Validation | malformed input data at the job boundary |
/// | Ledger | auth, transport, or response-shape problems talking to the ledger |
/// | Terminal | the aggregated end-of-run failure report |
#[derive(Debug, Error)]
pub enum AppError {
    // ========== Configuration errors ==========
    #[error("Configuration error: {0}")]
    Config(String),

    // ========== Input validation errors ==========
    #[error("Validation failed: {0}")]
    Validation(String),

    // ========== Ledger communication errors ==========
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Ledger request failed: {0}")]
    Transport(String),

    #[error("Unexpected ledger response: {0}")]
    UnexpectedResponse(String),

    // ========== Terminal run outcome ==========
    /// Raised once, after the whole batch has been attempted. The payload is
    /// the JSON-serialized list of every per-invoice failure from the run.
    #[error("Write-off run finished with failures: {0}")]
    WriteOffFailed(String),

    // ========== System errors ==========
    #[error("Internal error: {0}")]
    Internal(String),
}

// ========== Helper Constructors ==========

impl AppError {
    /// Create a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an Auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Create a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Create an UnexpectedResponse error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::UnexpectedResponse(message.into())
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;
