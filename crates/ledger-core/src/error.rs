use thiserror::Error;

/// Application-wide error types for the ledger.
#[derive(Error, Debug)]
pub enum AppError {
    /// Requested row does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Write would violate a uniqueness rule (e.g. duplicate user name).
    #[error("{0}")]
    Conflict(String),

    /// Unknown user name or wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Request payload failed validation.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Database operation failed.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Password hashing or hash parsing failed.
    #[error("Password hash error: {0}")]
    PasswordHashError(String),

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic error.
    #[error("{0}")]
    Generic(String),
}

impl AppError {
    pub fn record_not_found() -> Self {
        AppError::NotFound("Record not found".into())
    }

    pub fn user_not_found() -> Self {
        AppError::NotFound("User not found".into())
    }

    pub fn user_exists() -> Self {
        AppError::Conflict("User already exists".into())
    }
}
