// src/error.rs

//! Unified error handling for the showcase pipeline.

use std::fmt;

use thiserror::Error;

/// Result type alias for showcase operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization failed
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Template block pattern failed to compile
    #[error("Invalid block pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    /// Collection index query failed
    #[error("Index error for {context}: {message}")]
    Index { context: String, message: String },

    /// Document body fetch failed
    #[error("Document error for {identifier}: {message}")]
    Document {
        identifier: String,
        message: String,
    },

    /// Cache backend error
    #[error("Cache error: {0}")]
    Cache(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a block pattern error.
    pub fn pattern(pattern: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            message: message.to_string(),
        }
    }

    /// Create an index error with context.
    pub fn index(context: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Index {
            context: context.into(),
            message: message.to_string(),
        }
    }

    /// Create a document error for an identifier.
    pub fn document(identifier: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Document {
            identifier: identifier.into(),
            message: message.to_string(),
        }
    }

    /// Create a cache error.
    pub fn cache(message: impl Into<String>) -> Self {
        Self::Cache(message.into())
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
