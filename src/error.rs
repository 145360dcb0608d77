// src/error.rs

//! Unified error handling for the link cleaner application.

use thiserror::Error;

/// Result type alias for cleaner operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Removal-list file missing or unreadable (fatal, before any store access)
    #[error("Removal list error: {path}: {message}")]
    Input { path: String, message: String },

    /// Audit log could not be created or written (fatal, before processing)
    #[error("Audit log error: {path}: {message}")]
    Audit { path: String, message: String },

    /// Post store operation failed
    #[error("Store error: {0}")]
    Store(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a removal-list input error.
    pub fn input(path: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Input {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create an audit log error.
    pub fn audit(path: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Audit {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create a store error.
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
