//! Get Settings Handler

use jiff::Timestamp;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use farmstand_app::domain::stores::records::StoreRecord;

use crate::{auth, extensions::*, settings::errors::into_status_error};

/// Settings Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SettingsResponse {
    /// Store UUID
    pub id: Uuid,

    pub name: String,
    pub logo_url: String,
    pub color_primary: String,
    pub color_secondary: String,
    pub color_accent: String,
    pub stripe_publishable_key: String,
    pub venmo_handle: String,

    /// Only present for an authenticated admin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_pay_domain_file: Option<String>,
}

impl SettingsResponse {
    fn from_record(store: StoreRecord, admin: bool) -> Self {
        Self {
            id: store.uuid.into_uuid(),
            name: store.name,
            logo_url: store.logo_url,
            color_primary: store.color_primary,
            color_secondary: store.color_secondary,
            color_accent: store.color_accent,
            stripe_publishable_key: store.stripe_publishable_key,
            venmo_handle: store.venmo_handle,
            apple_pay_domain_file: admin.then_some(store.apple_pay_domain_file),
        }
    }
}

/// Get Settings Handler
///
/// Public storefront settings. Admin-only fields are included when the
/// request carries a live session.
#[endpoint(
    tags("settings"),
    summary = "Get Store Settings",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Store settings"),
        (status_code = StatusCode::NOT_FOUND, description = "Store not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<SettingsResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let admin = match req.bearer_token() {
        Some(token) => state
            .app
            .auth
            .is_authenticated(state.store_uuid, token, Timestamp::now())
            .await
            .map_err(auth::into_status_error)?,
        None => false,
    };

    let store = state
        .app
        .stores
        .get_store(state.store_uuid)
        .await
        .map_err(into_status_error)?;

    Ok(Json(SettingsResponse::from_record(store, admin)))
}
