//! Auth service errors.

use sqlx::Error;
use thiserror::Error;

/// Why a login submission was rejected before verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    MissingPassword,
    PasswordTooShort { min_len: usize },
}

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("login request failed validation")]
    ValidationFailed(ValidationFailure),

    #[error("too many login attempts")]
    RateLimited { retry_after_secs: u64 },

    #[error("invalid credential")]
    InvalidCredential,

    /// No store row exists for the requested store.
    #[error("store not found")]
    StoreNotFound,

    #[error("credential hashing task failed")]
    Hashing(#[source] tokio::task::JoinError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for AuthServiceError {
    fn from(error: Error) -> Self {
        match error {
            Error::RowNotFound => Self::StoreNotFound,
            other => Self::Sql(other),
        }
    }
}
