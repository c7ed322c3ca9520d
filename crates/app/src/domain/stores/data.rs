//! Store Data

use crate::domain::stores::records::StoreUuid;

/// New Store Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStore {
    /// UUID to assign to the store row.
    pub uuid: StoreUuid,

    /// Store name to persist.
    pub name: String,
}

/// Partial settings update. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSettingsUpdate {
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub color_primary: Option<String>,
    pub color_secondary: Option<String>,
    pub color_accent: Option<String>,
    pub stripe_publishable_key: Option<String>,

    /// Only applied when non-empty.
    pub stripe_secret_key: Option<String>,

    pub venmo_handle: Option<String>,
    pub apple_pay_domain_file: Option<String>,
}

impl StoreSettingsUpdate {
    /// Drop values that must not be applied, such as an empty secret key.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.stripe_secret_key.as_deref().is_some_and(str::is_empty) {
            self.stripe_secret_key = None;
        }

        self
    }

    /// Whether applying this update would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.logo_url.is_none()
            && self.color_primary.is_none()
            && self.color_secondary.is_none()
            && self.color_accent.is_none()
            && self.stripe_publishable_key.is_none()
            && self.stripe_secret_key.is_none()
            && self.venmo_handle.is_none()
            && self.apple_pay_domain_file.is_none()
    }
}
