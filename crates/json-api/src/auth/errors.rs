//! Auth Errors

use salvo::http::StatusError;
use tracing::error;

use farmstand_app::auth::{AuthServiceError, ValidationFailure};

pub(crate) fn into_status_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::ValidationFailed(ValidationFailure::MissingPassword) => {
            StatusError::bad_request().brief("Password required")
        }
        AuthServiceError::ValidationFailed(ValidationFailure::PasswordTooShort { min_len }) => {
            StatusError::bad_request()
                .brief(format!("Password must be at least {min_len} characters"))
        }
        AuthServiceError::RateLimited { .. } => StatusError::too_many_requests()
            .brief("Too many login attempts. Please try again later."),
        AuthServiceError::InvalidCredential => StatusError::unauthorized().brief("Invalid password"),
        AuthServiceError::StoreNotFound => {
            error!("configured store not found");

            StatusError::not_found().brief("Store not found")
        }
        AuthServiceError::Hashing(source) => {
            error!("credential hashing failed: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Sql(source) => {
            error!("auth storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
