//! Session Verify Handler

use jiff::Timestamp;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{auth::into_status_error, extensions::*};

/// Verify Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VerifyResponse {
    /// Whether the presented bearer token names a live session.
    pub valid: bool,
}

/// Session Verify Handler
#[endpoint(
    tags("auth"),
    summary = "Verify Admin Session",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Session validity"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<VerifyResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let valid = match req.bearer_token() {
        Some(token) => state
            .app
            .auth
            .is_authenticated(state.store_uuid, token, Timestamp::now())
            .await
            .map_err(into_status_error)?,
        None => false,
    };

    Ok(Json(VerifyResponse { valid }))
}
