// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Client input rejected before any SQL is issued
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Opaque store fault (constraint violation, connectivity, ...)
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// True for faults caused by the caller's input (bad payload, unknown id).
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::Validation(_) | AppError::NotFound(_))
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

// Note: sqlx::Error conversion is handled in infra-sqlite crate
// by converting to AppError::Database(String)
