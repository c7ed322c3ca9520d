//! Store Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Store UUID
pub type StoreUuid = TypedUuid<StoreRecord>;

/// Store Record
///
/// Secret columns (the Stripe secret key and the admin credential) are
/// never read into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreRecord {
    /// Unique store identifier.
    pub uuid: StoreUuid,

    /// Storefront display name.
    pub name: String,

    pub logo_url: String,

    pub color_primary: String,

    pub color_secondary: String,

    pub color_accent: String,

    /// Publishable Stripe key handed to the storefront.
    pub stripe_publishable_key: String,

    pub venmo_handle: String,

    /// Apple Pay domain association file contents. Admin-only.
    pub apple_pay_domain_file: String,

    /// Store creation timestamp.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,
}
