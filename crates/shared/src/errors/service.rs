use crate::errors::repository::RepositoryError;
use bcrypt::BcryptError;
use thiserror::Error;

/// Typed failures raised by the service layer. The first four variants carry
/// the name of the offending entity and map straight onto the 401/403/404/409
/// client-error family at the boundary.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] BcryptError),

    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Custom error: {0}")]
    Custom(String),
}
