//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (transport, persistence).

use thiserror::Error;

use crate::Id;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Game already has a black team
    #[error("Game {0} already has a black team")]
    AlreadyJoined(Id),
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
