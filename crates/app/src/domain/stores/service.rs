//! Stores service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::info;

use crate::domain::stores::{
    data::{NewStore, StoreSettingsUpdate},
    errors::StoresServiceError,
    records::{StoreRecord, StoreUuid},
    repository::PgStoresRepository,
};

#[derive(Debug, Clone)]
pub struct PgStoresService {
    repository: PgStoresRepository,
}

impl PgStoresService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgStoresRepository::new(pool),
        }
    }
}

#[async_trait]
impl StoresService for PgStoresService {
    async fn create_store(&self, store: NewStore) -> Result<StoreRecord, StoresServiceError> {
        self.repository
            .create_store(store)
            .await
            .map_err(Into::into)
    }

    async fn get_store(&self, store: StoreUuid) -> Result<StoreRecord, StoresServiceError> {
        self.repository.get_store(store).await.map_err(Into::into)
    }

    async fn update_settings(
        &self,
        store: StoreUuid,
        update: StoreSettingsUpdate,
    ) -> Result<(), StoresServiceError> {
        let update = update.normalized();

        if update.is_empty() {
            return Ok(());
        }

        self.repository.update_settings(store, update).await?;

        info!(%store, "store settings updated");

        Ok(())
    }

    async fn reset_credential(&self, store: StoreUuid) -> Result<(), StoresServiceError> {
        self.repository.reset_credential(store).await?;

        info!(%store, "admin credential reset");

        Ok(())
    }
}

#[automock]
#[async_trait]
/// Store persistence operations.
pub trait StoresService: Send + Sync {
    /// Creates a new store with default branding and no admin credential.
    async fn create_store(&self, store: NewStore) -> Result<StoreRecord, StoresServiceError>;

    async fn get_store(&self, store: StoreUuid) -> Result<StoreRecord, StoresServiceError>;

    /// Applies a partial settings update. An empty update is a no-op.
    async fn update_settings(
        &self,
        store: StoreUuid,
        update: StoreSettingsUpdate,
    ) -> Result<(), StoresServiceError>;

    /// Clears the admin credential so the next login bootstraps a new one.
    async fn reset_credential(&self, store: StoreUuid) -> Result<(), StoresServiceError>;
}
