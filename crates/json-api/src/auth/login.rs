//! Admin Login Handler

use std::fmt;

use jiff::Timestamp;
use salvo::{
    http::header::{HeaderValue, RETRY_AFTER},
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use farmstand_app::auth::{AuthServiceError, LoginKind};

use crate::{
    auth::into_status_error,
    extensions::*,
    observability::{LoginOutcome, record_login},
};

/// Login Request
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    /// Admin password. On first run this becomes the admin password.
    #[serde(default)]
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("password", &"**redacted**")
            .finish()
    }
}

/// Login Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginResponse {
    /// Bearer token for admin requests.
    pub token: String,

    /// Session expiry, Unix seconds.
    pub expires_at: i64,
}

fn outcome_for(error: &AuthServiceError) -> LoginOutcome {
    match error {
        AuthServiceError::ValidationFailed(_) => LoginOutcome::Validation,
        AuthServiceError::RateLimited { .. } => LoginOutcome::RateLimited,
        AuthServiceError::InvalidCredential => LoginOutcome::Invalid,
        AuthServiceError::StoreNotFound
        | AuthServiceError::Hashing(_)
        | AuthServiceError::Sql(_) => LoginOutcome::Error,
    }
}

/// Admin Login Handler
#[endpoint(
    tags("auth"),
    summary = "Admin Login",
    responses(
        (status_code = StatusCode::OK, description = "Session issued"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing or too short password"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid password"),
        (status_code = StatusCode::NOT_FOUND, description = "Store not found"),
        (status_code = StatusCode::TOO_MANY_REQUESTS, description = "Too many login attempts"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "auth.login",
    skip(json, req, depot, res),
    fields(
        store_uuid = tracing::field::Empty,
        client_address = tracing::field::Empty
    )
)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<LoginResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let client = req.client_address(state.client_ip_header.as_deref());
    let request = json.into_inner();

    let span = tracing::Span::current();

    span.record("store_uuid", tracing::field::display(state.store_uuid));
    span.record("client_address", tracing::field::display(&client));

    let result = state
        .app
        .auth
        .login(state.store_uuid, &request.password, &client, Timestamp::now())
        .await;

    let success = match result {
        Ok(success) => success,
        Err(error) => {
            record_login(outcome_for(&error));

            if let AuthServiceError::RateLimited { retry_after_secs } = error {
                res.headers_mut()
                    .insert(RETRY_AFTER, HeaderValue::from(retry_after_secs));
            }

            return Err(into_status_error(error));
        }
    };

    record_login(match success.kind {
        LoginKind::Verified => LoginOutcome::Success,
        LoginKind::Bootstrapped => LoginOutcome::Bootstrap,
    });

    Ok(Json(LoginResponse {
        token: success.session.token,
        expires_at: success.session.expires_at.as_second(),
    }))
}
