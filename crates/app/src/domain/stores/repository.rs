//! Stores Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::stores::{
    data::{NewStore, StoreSettingsUpdate},
    records::{StoreRecord, StoreUuid},
};

const CREATE_STORE_SQL: &str = include_str!("sql/create_store.sql");
const GET_STORE_SQL: &str = include_str!("sql/get_store.sql");
const UPDATE_SETTINGS_SQL: &str = include_str!("sql/update_settings.sql");
const RESET_CREDENTIAL_SQL: &str = include_str!("sql/reset_credential.sql");

#[derive(Debug, Clone)]
/// PostgreSQL-backed stores repository.
pub(crate) struct PgStoresRepository {
    pool: PgPool,
}

impl PgStoresRepository {
    /// Creates a new repository instance.
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create_store(&self, store: NewStore) -> Result<StoreRecord, sqlx::Error> {
        query_as::<Postgres, StoreRecord>(CREATE_STORE_SQL)
            .bind(store.uuid.into_uuid())
            .bind(store.name)
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn get_store(&self, store: StoreUuid) -> Result<StoreRecord, sqlx::Error> {
        query_as::<Postgres, StoreRecord>(GET_STORE_SQL)
            .bind(store.into_uuid())
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn update_settings(
        &self,
        store: StoreUuid,
        update: StoreSettingsUpdate,
    ) -> Result<(), sqlx::Error> {
        let rows_affected = query(UPDATE_SETTINGS_SQL)
            .bind(store.into_uuid())
            .bind(update.name)
            .bind(update.logo_url)
            .bind(update.color_primary)
            .bind(update.color_secondary)
            .bind(update.color_accent)
            .bind(update.stripe_publishable_key)
            .bind(update.stripe_secret_key)
            .bind(update.venmo_handle)
            .bind(update.apple_pay_domain_file)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(sqlx::Error::RowNotFound);
        }

        Ok(())
    }

    pub(crate) async fn reset_credential(&self, store: StoreUuid) -> Result<(), sqlx::Error> {
        let rows_affected = query(RESET_CREDENTIAL_SQL)
            .bind(store.into_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(sqlx::Error::RowNotFound);
        }

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for StoreRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: StoreUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            logo_url: row.try_get("logo_url")?,
            color_primary: row.try_get("color_primary")?,
            color_secondary: row.try_get("color_secondary")?,
            color_accent: row.try_get("color_accent")?,
            stripe_publishable_key: row.try_get("stripe_publishable_key")?,
            venmo_handle: row.try_get("venmo_handle")?,
            apple_pay_domain_file: row.try_get("apple_pay_domain_file")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
