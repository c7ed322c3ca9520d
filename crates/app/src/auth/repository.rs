//! Auth repository.
//!
//! The login guard talks to three narrow stores. [`PgAuthRepository`]
//! implements all of them on top of the `stores`, `login_attempts` and
//! `sessions` tables; each call is a single statement.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{PgPool, Postgres, query, query_scalar};

use crate::{auth::models::NewSession, domain::stores::records::StoreUuid};

const GET_CREDENTIAL_HASH_SQL: &str = include_str!("sql/get_credential_hash.sql");
const SET_CREDENTIAL_HASH_SQL: &str = include_str!("sql/set_credential_hash.sql");
const SET_CREDENTIAL_HASH_IF_ABSENT_SQL: &str =
    include_str!("sql/set_credential_hash_if_absent.sql");
const COUNT_ATTEMPTS_SQL: &str = include_str!("sql/count_attempts.sql");
const INSERT_ATTEMPT_SQL: &str = include_str!("sql/insert_attempt.sql");
const DELETE_ATTEMPTS_BEFORE_SQL: &str = include_str!("sql/delete_attempts_before.sql");
const INSERT_SESSION_SQL: &str = include_str!("sql/insert_session.sql");
const FIND_VALID_SESSION_SQL: &str = include_str!("sql/find_valid_session.sql");
const DELETE_SESSION_SQL: &str = include_str!("sql/delete_session.sql");

/// Admin credential storage, one credential per store.
#[automock]
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Stored `{salt}:{key}` credential, or `None` before first run.
    /// Fails with `RowNotFound` when the store does not exist.
    async fn get_credential_hash(&self, store: StoreUuid) -> Result<Option<String>, sqlx::Error>;

    /// Overwrite the stored credential.
    async fn set_credential_hash(&self, store: StoreUuid, hash: &str) -> Result<(), sqlx::Error>;

    /// Set the credential only if none is stored. Returns `true` if written.
    async fn set_credential_hash_if_absent(
        &self,
        store: StoreUuid,
        hash: &str,
    ) -> Result<bool, sqlx::Error>;
}

/// Append-only record of login attempts.
#[automock]
#[async_trait]
pub trait AttemptLog: Send + Sync {
    /// Attempts from `client_address` made after `since` (Unix seconds).
    async fn count_attempts(
        &self,
        store: StoreUuid,
        client_address: &str,
        since: i64,
    ) -> Result<u64, sqlx::Error>;

    async fn insert_attempt(
        &self,
        store: StoreUuid,
        client_address: &str,
        attempted_at: i64,
    ) -> Result<(), sqlx::Error>;

    /// Drop attempts made before `before` (Unix seconds), across all stores.
    async fn delete_attempts_before(&self, before: i64) -> Result<(), sqlx::Error>;
}

/// Issued admin sessions, keyed by token digest.
#[automock]
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert_session(&self, store: StoreUuid, session: NewSession)
    -> Result<(), sqlx::Error>;

    /// Whether an unexpired session exists for `token_digest` at `now`.
    async fn find_valid_session(
        &self,
        store: StoreUuid,
        token_digest: &str,
        now: i64,
    ) -> Result<bool, sqlx::Error>;

    /// Delete a session. Deleting an unknown session is not an error.
    async fn delete_session(&self, store: StoreUuid, token_digest: &str)
    -> Result<(), sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgAuthRepository {
    async fn get_credential_hash(&self, store: StoreUuid) -> Result<Option<String>, sqlx::Error> {
        query_scalar::<Postgres, Option<String>>(GET_CREDENTIAL_HASH_SQL)
            .bind(store.into_uuid())
            .fetch_one(&self.pool)
            .await
    }

    async fn set_credential_hash(&self, store: StoreUuid, hash: &str) -> Result<(), sqlx::Error> {
        let rows_affected = query(SET_CREDENTIAL_HASH_SQL)
            .bind(store.into_uuid())
            .bind(hash)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(sqlx::Error::RowNotFound);
        }

        Ok(())
    }

    async fn set_credential_hash_if_absent(
        &self,
        store: StoreUuid,
        hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let rows_affected = query(SET_CREDENTIAL_HASH_IF_ABSENT_SQL)
            .bind(store.into_uuid())
            .bind(hash)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected == 1)
    }
}

#[async_trait]
impl AttemptLog for PgAuthRepository {
    async fn count_attempts(
        &self,
        store: StoreUuid,
        client_address: &str,
        since: i64,
    ) -> Result<u64, sqlx::Error> {
        let count = query_scalar::<Postgres, i64>(COUNT_ATTEMPTS_SQL)
            .bind(store.into_uuid())
            .bind(client_address)
            .bind(since)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.unsigned_abs())
    }

    async fn insert_attempt(
        &self,
        store: StoreUuid,
        client_address: &str,
        attempted_at: i64,
    ) -> Result<(), sqlx::Error> {
        query(INSERT_ATTEMPT_SQL)
            .bind(store.into_uuid())
            .bind(client_address)
            .bind(attempted_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_attempts_before(&self, before: i64) -> Result<(), sqlx::Error> {
        query(DELETE_ATTEMPTS_BEFORE_SQL)
            .bind(before)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl SessionStore for PgAuthRepository {
    async fn insert_session(
        &self,
        store: StoreUuid,
        session: NewSession,
    ) -> Result<(), sqlx::Error> {
        query(INSERT_SESSION_SQL)
            .bind(session.token_digest)
            .bind(store.into_uuid())
            .bind(session.created_at)
            .bind(session.expires_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_valid_session(
        &self,
        store: StoreUuid,
        token_digest: &str,
        now: i64,
    ) -> Result<bool, sqlx::Error> {
        query_scalar::<Postgres, i32>(FIND_VALID_SESSION_SQL)
            .bind(token_digest)
            .bind(store.into_uuid())
            .bind(now)
            .fetch_optional(&self.pool)
            .await
            .map(|found| found.is_some())
    }

    async fn delete_session(&self, store: StoreUuid, token_digest: &str) -> Result<(), sqlx::Error> {
        query(DELETE_SESSION_SQL)
            .bind(token_digest)
            .bind(store.into_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
