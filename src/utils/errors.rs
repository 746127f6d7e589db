//! Error handling for ChatWarden
//!
//! This module defines the main error type used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

use crate::utils::duration::DurationParseError;

/// Main error type for the ChatWarden application
#[derive(Error, Debug)]
pub enum ChatWardenError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("permission denied: {0}")]
    Unauthorized(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("already exists: {0}")]
    AlreadyExists(String),

    #[error("user {user_id} is a technical admin and cannot be removed")]
    TechnicalAdminImmutable { user_id: i64 },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Result type alias for ChatWarden operations
pub type Result<T> = std::result::Result<T, ChatWardenError>;

impl ChatWardenError {
    /// Errors caused by the invoking user rather than by the system.
    ///
    /// These resolve into a reply without reaching the platform boundary and
    /// are logged at a lower severity than platform or storage failures.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ChatWardenError::Unauthorized(_)
                | ChatWardenError::InvalidInput(_)
                | ChatWardenError::NotFound(_)
                | ChatWardenError::AlreadyExists(_)
                | ChatWardenError::TechnicalAdminImmutable { .. }
        )
    }
}

impl From<DurationParseError> for ChatWardenError {
    fn from(err: DurationParseError) -> Self {
        ChatWardenError::InvalidInput(err.to_string())
    }
}
