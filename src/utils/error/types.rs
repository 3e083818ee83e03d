//! Error types

use thiserror::Error;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, NocError>;

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum NocError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Parsing errors
    #[error("Parsing error: {0}")]
    Parsing(String),

    /// Caller has no role (not signed in, or profile not loaded yet)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Caller's role may not perform the action
    #[error("Forbidden: {0}")]
    Forbidden(String),
}
