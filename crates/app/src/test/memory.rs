//! In-memory auth stores for guard behavior tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    auth::{
        NewSession,
        repository::{AttemptLog, CredentialStore, SessionStore},
    },
    domain::stores::records::StoreUuid,
};

#[derive(Debug, Clone)]
struct Attempt {
    store: StoreUuid,
    client_address: String,
    attempted_at: i64,
}

#[derive(Debug, Clone)]
struct Session {
    store: StoreUuid,
    expires_at: i64,
}

/// Implements every auth store over plain collections.
#[derive(Debug, Default)]
pub(crate) struct MemoryAuthStore {
    credentials: Mutex<HashMap<StoreUuid, String>>,
    attempts: Mutex<Vec<Attempt>>,
    sessions: Mutex<HashMap<String, Session>>,
}

impl MemoryAuthStore {
    pub async fn credential(&self, store: StoreUuid) -> Option<String> {
        self.credentials.lock().await.get(&store).cloned()
    }

    pub async fn attempt_count(&self) -> usize {
        self.attempts.lock().await.len()
    }
}

#[async_trait]
impl CredentialStore for MemoryAuthStore {
    async fn get_credential_hash(&self, store: StoreUuid) -> Result<Option<String>, sqlx::Error> {
        Ok(self.credential(store).await)
    }

    async fn set_credential_hash(&self, store: StoreUuid, hash: &str) -> Result<(), sqlx::Error> {
        self.credentials
            .lock()
            .await
            .insert(store, hash.to_string());

        Ok(())
    }

    async fn set_credential_hash_if_absent(
        &self,
        store: StoreUuid,
        hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let mut credentials = self.credentials.lock().await;

        if credentials.contains_key(&store) {
            return Ok(false);
        }

        credentials.insert(store, hash.to_string());

        Ok(true)
    }
}

#[async_trait]
impl AttemptLog for MemoryAuthStore {
    async fn count_attempts(
        &self,
        store: StoreUuid,
        client_address: &str,
        since: i64,
    ) -> Result<u64, sqlx::Error> {
        let attempts = self.attempts.lock().await;

        let count = attempts
            .iter()
            .filter(|attempt| {
                attempt.store == store
                    && attempt.client_address == client_address
                    && attempt.attempted_at > since
            })
            .count();

        Ok(count as u64)
    }

    async fn insert_attempt(
        &self,
        store: StoreUuid,
        client_address: &str,
        attempted_at: i64,
    ) -> Result<(), sqlx::Error> {
        self.attempts.lock().await.push(Attempt {
            store,
            client_address: client_address.to_string(),
            attempted_at,
        });

        Ok(())
    }

    async fn delete_attempts_before(&self, before: i64) -> Result<(), sqlx::Error> {
        self.attempts
            .lock()
            .await
            .retain(|attempt| attempt.attempted_at >= before);

        Ok(())
    }
}

#[async_trait]
impl SessionStore for MemoryAuthStore {
    async fn insert_session(
        &self,
        store: StoreUuid,
        session: NewSession,
    ) -> Result<(), sqlx::Error> {
        self.sessions.lock().await.insert(
            session.token_digest,
            Session {
                store,
                expires_at: session.expires_at,
            },
        );

        Ok(())
    }

    async fn find_valid_session(
        &self,
        store: StoreUuid,
        token_digest: &str,
        now: i64,
    ) -> Result<bool, sqlx::Error> {
        Ok(self
            .sessions
            .lock()
            .await
            .get(token_digest)
            .is_some_and(|session| session.store == store && session.expires_at > now))
    }

    async fn delete_session(&self, store: StoreUuid, token_digest: &str) -> Result<(), sqlx::Error> {
        let mut sessions = self.sessions.lock().await;

        if sessions
            .get(token_digest)
            .is_some_and(|session| session.store == store)
        {
            sessions.remove(token_digest);
        }

        Ok(())
    }
}
