// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("persistence error: {0}")]
    Persistence(String),

    // Rental-workflow rule violations. Each one rolls the whole transaction
    // back and surfaces to the caller as a 400.
    #[error("a completed payment reference is required for this property")]
    PaymentRequired,
    #[error("invalid payment reference: {0}")]
    InvalidPayment(String),
    #[error("unit type \"{0}\" not found on this property")]
    UnitTypeNotFound(String),
    #[error("no vacant units of type \"{0}\" remaining")]
    NoVacancy(String),
    #[error("invalid status transition: {0}")]
    InvalidTransition(String),
}
