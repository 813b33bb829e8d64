//! Application services sitting between routes and repositories.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod products;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller input failed validation.
    #[error("{0}")]
    Validation(String),
    /// A value object could not be constructed from caller input.
    #[error("{0}")]
    TypeConstraint(String),
    /// Storage or other unexpected failure.
    #[error("{0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        ServiceError::Internal(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::Validation(err.to_string())
    }
}
