//! Admin Logout Handler

use salvo::prelude::*;

use crate::{auth::into_status_error, extensions::*, responses::OkResponse};

/// Admin Logout Handler
///
/// Ends the presented session. Succeeds whether or not a session existed.
#[endpoint(
    tags("auth"),
    summary = "Admin Logout",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Session ended"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<OkResponse>, StatusError> {
    let state = depot.state_or_500()?;

    if let Some(token) = req.bearer_token() {
        state
            .app
            .auth
            .logout(state.store_uuid, token)
            .await
            .map_err(into_status_error)?;
    }

    Ok(Json(OkResponse::ok()))
}
