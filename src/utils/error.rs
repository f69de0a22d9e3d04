//! Error handling for the registry
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for the registry
pub type Result<T> = std::result::Result<T, GateError>;

/// Main error type for the registry
#[derive(Error, Debug)]
pub enum GateError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Redis errors
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unrecognized user type tag during deserialization
    #[error("Invalid user type: {0:?}")]
    InvalidUserType(String),

    /// Lookup of an absent user where absence is an error
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Non-actor user carries no session expiry, so no session can be created
    #[error("Session creation skipped: non-actor user {0} has no session expiry")]
    SessionCreationSkipped(String),
}

impl GateError {
    /// Whether this error indicates an unrecognized user type tag
    pub fn is_invalid_user_type(&self) -> bool {
        matches!(self, GateError::InvalidUserType(_))
    }
}
