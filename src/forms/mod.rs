//! Conversions from raw request and file input into validated payloads.

use thiserror::Error;
use validator::ValidationErrors;

use crate::services::ServiceError;

pub mod designs;
pub mod import;

#[derive(Debug, Error)]
/// Errors that can occur when processing request or file input.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("malformed query string: {0}")]
    MalformedQuery(String),

    #[error("invalid status")]
    InvalidStatus,

    #[error("invalid category id")]
    InvalidCategoryId,

    #[error("invalid area type id")]
    InvalidAreaTypeId,

    #[error("invalid tag id `{0}`")]
    InvalidTagId(String),

    #[error("invalid price")]
    InvalidPrice,

    #[error("invalid sort direction, expected `asc` or `desc`")]
    InvalidSortDirection,

    #[error("invalid name")]
    InvalidName,

    #[error("invalid flag `{0}`")]
    InvalidFlag(String),

    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: {message}")]
    InvalidRow { row: usize, message: String },
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}
