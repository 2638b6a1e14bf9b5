use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Failures surfaced by the service layer to route handlers and binaries.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request was malformed; nothing was read from the store.
    #[error("validation error: {0}")]
    Validation(String),

    #[error("type constraint violated: {0}")]
    TypeConstraint(String),

    #[error("not found")]
    NotFound,

    /// The record store failed or returned data that could not be decoded.
    #[error("query failed: {0}")]
    Query(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
