//! Settings Errors

use salvo::http::StatusError;
use tracing::error;

use farmstand_app::domain::stores::StoresServiceError;

pub(crate) fn into_status_error(error: StoresServiceError) -> StatusError {
    match error {
        StoresServiceError::NotFound => {
            error!("configured store not found");

            StatusError::not_found().brief("Store not found")
        }
        StoresServiceError::AlreadyExists
        | StoresServiceError::MissingRequiredData
        | StoresServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid settings payload")
        }
        StoresServiceError::Sql(source) => {
            error!("settings storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
