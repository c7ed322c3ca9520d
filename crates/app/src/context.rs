//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, LoginGuard, LoginPolicy},
    database,
    domain::stores::{PgStoresService, StoresService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] sqlx::migrate::MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub auth: Arc<dyn AuthService>,
    pub stores: Arc<dyn StoresService>,
}

impl AppContext {
    /// Connect, migrate and wire the PostgreSQL-backed services.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or applying
    /// migrations fails.
    pub async fn from_database_url(
        url: &str,
        max_connections: u32,
        policy: LoginPolicy,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect_with(url, max_connections)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrations)?;

        Ok(Self {
            auth: Arc::new(LoginGuard::postgres(pool.clone(), policy)),
            stores: Arc::new(PgStoresService::new(pool)),
        })
    }
}
