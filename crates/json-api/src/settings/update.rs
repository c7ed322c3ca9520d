//! Update Settings Handler

use std::fmt;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use farmstand_app::domain::stores::data::StoreSettingsUpdate;

use crate::{auth, extensions::*, responses::OkResponse, settings::errors::into_status_error};

/// Update Settings Request
///
/// Every field is optional. Absent fields are left unchanged.
#[derive(Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct UpdateSettingsRequest {
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub color_primary: Option<String>,
    pub color_secondary: Option<String>,
    pub color_accent: Option<String>,
    pub stripe_publishable_key: Option<String>,

    /// Ignored when empty.
    pub stripe_secret_key: Option<String>,

    pub venmo_handle: Option<String>,
    pub apple_pay_domain_file: Option<String>,

    /// New admin password. Ignored when empty.
    pub admin_password: Option<String>,
}

impl fmt::Debug for UpdateSettingsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &Option<String>| value.as_ref().map(|_| "**redacted**");

        f.debug_struct("UpdateSettingsRequest")
            .field("name", &self.name)
            .field("logo_url", &self.logo_url)
            .field("color_primary", &self.color_primary)
            .field("color_secondary", &self.color_secondary)
            .field("color_accent", &self.color_accent)
            .field("stripe_publishable_key", &self.stripe_publishable_key)
            .field("stripe_secret_key", &redact(&self.stripe_secret_key))
            .field("venmo_handle", &self.venmo_handle)
            .field("apple_pay_domain_file", &self.apple_pay_domain_file)
            .field("admin_password", &redact(&self.admin_password))
            .finish()
    }
}

impl UpdateSettingsRequest {
    /// Split into the store update and the new admin password, if any.
    fn into_parts(self) -> (StoreSettingsUpdate, Option<String>) {
        let update = StoreSettingsUpdate {
            name: self.name,
            logo_url: self.logo_url,
            color_primary: self.color_primary,
            color_secondary: self.color_secondary,
            color_accent: self.color_accent,
            stripe_publishable_key: self.stripe_publishable_key,
            stripe_secret_key: self.stripe_secret_key,
            venmo_handle: self.venmo_handle,
            apple_pay_domain_file: self.apple_pay_domain_file,
        };

        let admin_password = self.admin_password.filter(|password| !password.is_empty());

        (update, admin_password)
    }
}

/// Update Settings Handler
///
/// Runs behind the session middleware.
#[endpoint(
    tags("settings"),
    summary = "Update Store Settings",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Settings updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid settings or password too short"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::NOT_FOUND, description = "Store not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "settings.update",
    skip(json, depot),
    fields(
        store_uuid = tracing::field::Empty,
        password_changed = tracing::field::Empty
    )
)]
pub(crate) async fn handler(
    json: JsonBody<UpdateSettingsRequest>,
    depot: &mut Depot,
) -> Result<Json<OkResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let (update, admin_password) = json.into_inner().into_parts();

    let span = tracing::Span::current();

    span.record("store_uuid", tracing::field::display(state.store_uuid));
    span.record("password_changed", admin_password.is_some());

    if let Some(password) = admin_password {
        state
            .app
            .auth
            .change_password(state.store_uuid, &password)
            .await
            .map_err(auth::into_status_error)?;
    }

    state
        .app
        .stores
        .update_settings(state.store_uuid, update)
        .await
        .map_err(into_status_error)?;

    Ok(Json(OkResponse::ok()))
}
