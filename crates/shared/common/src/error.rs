//! Unified error handling for the business layer.
//!
//! Provides a single error type that every service operation returns.
//! Transport layers render it through [`AppError::code`] and
//! [`AppError::to_body`]; nothing here depends on HTTP or gRPC.

use domain::{DomainError, Id};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// Boxed error raised by a repository implementation
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    #[error("Referenced {entity} {id} not found")]
    ReferencedEntityNotFound { entity: &'static str, id: Id },

    #[error("Game {0} already has a black team")]
    AlreadyJoined(Id),

    // Validation
    #[error("{0}")]
    Validation(String),

    // Declared but unsupported operations
    #[error("Operation not implemented: {0}")]
    Unimplemented(&'static str),

    // Persistence collaborator
    #[error("Repository error")]
    Repository(#[source] BoxError),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Serializable error body for transport layers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::ReferencedEntityNotFound { .. } => "REFERENCED_ENTITY_NOT_FOUND",
            AppError::AlreadyJoined(_) => "GAME_ALREADY_JOINED",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Unimplemented(_) => "UNIMPLEMENTED",
            AppError::Repository(_) => "REPOSITORY_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Business rejections the caller can act on, as opposed to faults.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::NotFound
                | AppError::ReferencedEntityNotFound { .. }
                | AppError::AlreadyJoined(_)
                | AppError::Validation(_)
        )
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),

            // Hide details for internal errors
            AppError::Repository(e) => {
                tracing::error!("Repository error: {:?}", e);
                "A storage error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            code: self.code().to_string(),
            message: self.user_message(),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::AlreadyJoined(id) => AppError::AlreadyJoined(id),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        // Report the first field message only
        let message = errors
            .field_errors()
            .values()
            .next()
            .and_then(|errors| errors.first())
            .and_then(|error| error.message.as_ref())
            .map(|msg| msg.to_string())
            .unwrap_or_else(|| "Validation failed".to_string());
        AppError::Validation(message)
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn team_not_found(id: Id) -> Self {
        AppError::ReferencedEntityNotFound { entity: "team", id }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn repository(err: impl Into<BoxError>) -> Self {
        AppError::Repository(err.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
