//! Core error types for ecoquest-core.
//!
//! This module defines the error hierarchy using thiserror. The only
//! hard failure in the state layer is touching a session before it has
//! been provisioned; everything else is configuration or IO plumbing.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ecoquest-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The session store was accessed before `provision()` was called.
    #[error("session not provisioned: call Session::provision() before accessing state")]
    NotProvisioned,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Config directory could not be created or resolved
    #[error("Config directory unavailable: {0}")]
    DirUnavailable(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
