//! Error types for huddle.
//!
//! Domain outcomes (draft validation, full events, unknown event ids) are
//! plain values returned by the engine. These errors cover the ambient
//! surroundings: configuration and seed files.

use thiserror::Error;

/// Errors that can occur while loading huddle's environment.
#[derive(Error, Debug)]
pub enum HuddleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown timezone '{0}'")]
    InvalidTimezone(String),

    #[error("Invalid month '{0}'. Expected YYYY-MM")]
    InvalidMonth(String),

    #[error("Seed data error: {0}")]
    Seed(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for huddle operations.
pub type HuddleResult<T> = Result<T, HuddleError>;
