//! Error types for buildergen
//!
//! Provides unified error handling across the crate.

use thiserror::Error;

/// Main error type for buildergen operations
#[derive(Debug, Error)]
pub enum BuildergenError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BuildergenError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        BuildergenError::Parse(msg.into())
    }
}

/// Result type alias for buildergen operations
pub type Result<T> = std::result::Result<T, BuildergenError>;
