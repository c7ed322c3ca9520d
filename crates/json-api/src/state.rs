//! State

use std::sync::Arc;

use farmstand_app::{context::AppContext, domain::stores::records::StoreUuid};

use crate::config::auth::AuthConfig;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// Store every request is served for.
    pub(crate) store_uuid: StoreUuid,

    /// Lowercased header name carrying the original client IP, if trusted.
    pub(crate) client_ip_header: Option<String>,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, store_uuid: StoreUuid) -> Self {
        Self {
            app,
            store_uuid,
            client_ip_header: None,
        }
    }

    #[must_use]
    pub(crate) fn with_client_ip_header(mut self, header: Option<&str>) -> Self {
        self.client_ip_header = header
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_ascii_lowercase);
        self
    }

    #[must_use]
    pub(crate) fn from_config(app: AppContext, config: &AuthConfig) -> Arc<Self> {
        Arc::new(
            Self::new(app, config.store_uuid())
                .with_client_ip_header(config.client_ip_header.as_deref()),
        )
    }
}
