//! Login & session guard.
//!
//! Every call is independent: all state lives behind the store traits and
//! nothing about sessions or attempts is cached in process memory.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use sqlx::PgPool;
use tokio::task;
use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use crate::{
    auth::{
        AuthServiceError, ClientAddress, CredentialHasher, IssuedSession, LoginKind, LoginPolicy,
        LoginSuccess, NewSession, SessionToken, ValidationFailure, is_well_formed,
        repository::{AttemptLog, CredentialStore, PgAuthRepository, SessionStore},
        token_digest,
    },
    domain::stores::records::StoreUuid,
};

/// Credential verification, login throttling, and bearer sessions for a
/// store's admin console.
pub struct LoginGuard {
    credentials: Arc<dyn CredentialStore>,
    attempts: Arc<dyn AttemptLog>,
    sessions: Arc<dyn SessionStore>,
    hasher: CredentialHasher,
    policy: LoginPolicy,
}

impl LoginGuard {
    #[must_use]
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        attempts: Arc<dyn AttemptLog>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            credentials,
            attempts,
            sessions,
            hasher: CredentialHasher::default(),
            policy: LoginPolicy::default(),
        }
    }

    /// Guard backed by PostgreSQL for all three stores.
    #[must_use]
    pub fn postgres(pool: PgPool, policy: LoginPolicy) -> Self {
        let repository = Arc::new(PgAuthRepository::new(pool));

        Self::new(repository.clone(), repository.clone(), repository).with_policy(policy)
    }

    #[must_use]
    pub fn with_policy(mut self, policy: LoginPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_hasher(mut self, hasher: CredentialHasher) -> Self {
        self.hasher = hasher;
        self
    }

    #[must_use]
    pub fn policy(&self) -> &LoginPolicy {
        &self.policy
    }

    fn validate_new_password(&self, password: &str) -> Result<(), AuthServiceError> {
        if password.is_empty() {
            return Err(AuthServiceError::ValidationFailed(
                ValidationFailure::MissingPassword,
            ));
        }

        if !self.policy.accepts_new_password(password) {
            return Err(AuthServiceError::ValidationFailed(
                ValidationFailure::PasswordTooShort {
                    min_len: self.policy.min_password_len,
                },
            ));
        }

        Ok(())
    }

    async fn hash_new(&self, password: &str) -> Result<String, AuthServiceError> {
        let hasher = self.hasher;
        let password = Zeroizing::new(password.to_owned());

        task::spawn_blocking(move || hasher.hash_new(&password))
            .await
            .map_err(AuthServiceError::Hashing)
    }

    async fn verify(&self, password: &str, stored: String) -> Result<bool, AuthServiceError> {
        let hasher = self.hasher;
        let password = Zeroizing::new(password.to_owned());

        task::spawn_blocking(move || hasher.verify(&password, &stored))
            .await
            .map_err(AuthServiceError::Hashing)
    }

    /// First-run path. Returns `None` if another request set the credential
    /// between our read and our conditional write.
    async fn bootstrap(
        &self,
        store: StoreUuid,
        password: &str,
        now: Timestamp,
    ) -> Result<Option<LoginSuccess>, AuthServiceError> {
        self.validate_new_password(password)?;

        let hash = self.hash_new(password).await?;

        if !self
            .credentials
            .set_credential_hash_if_absent(store, &hash)
            .await?
        {
            debug!(%store, "first-run credential already set by a concurrent request");

            return Ok(None);
        }

        info!(%store, "initial admin credential set");

        let session = self.issue_session(store, now).await?;

        Ok(Some(LoginSuccess {
            kind: LoginKind::Bootstrapped,
            session,
        }))
    }

    async fn issue_session(
        &self,
        store: StoreUuid,
        now: Timestamp,
    ) -> Result<IssuedSession, AuthServiceError> {
        let token = SessionToken::generate();
        let created_at = now.as_second();
        let expires_at = self.policy.session_expiry(now);

        self.sessions
            .insert_session(
                store,
                NewSession {
                    token_digest: token.digest(),
                    created_at,
                    expires_at,
                },
            )
            .await?;

        Ok(IssuedSession {
            token: token.expose(),
            created_at: now,
            expires_at: Timestamp::from_second(expires_at).unwrap_or(Timestamp::MAX),
        })
    }

    async fn prune_attempts(&self, now: Timestamp) {
        if let Err(source) = self
            .attempts
            .delete_attempts_before(self.policy.prune_before(now))
            .await
        {
            warn!("failed to prune login attempts: {source}");
        }
    }
}

#[async_trait]
impl AuthService for LoginGuard {
    async fn login(
        &self,
        store: StoreUuid,
        password: &str,
        client: &ClientAddress,
        now: Timestamp,
    ) -> Result<LoginSuccess, AuthServiceError> {
        if password.is_empty() {
            return Err(AuthServiceError::ValidationFailed(
                ValidationFailure::MissingPassword,
            ));
        }

        let attempts = self
            .attempts
            .count_attempts(store, client.as_str(), self.policy.window_start(now))
            .await?;

        if self.policy.is_exceeded(attempts) {
            warn!(%store, client_address = %client, attempts, "login rate limited");

            return Err(AuthServiceError::RateLimited {
                retry_after_secs: self.policy.retry_after_secs(),
            });
        }

        let stored = match self.credentials.get_credential_hash(store).await? {
            Some(stored) => stored,
            None => {
                if let Some(success) = self.bootstrap(store, password, now).await? {
                    return Ok(success);
                }

                self.credentials
                    .get_credential_hash(store)
                    .await?
                    .unwrap_or_default()
            }
        };

        let valid = self.verify(password, stored).await?;

        self.attempts
            .insert_attempt(store, client.as_str(), now.as_second())
            .await?;

        self.prune_attempts(now).await;

        if !valid {
            warn!(%store, client_address = %client, "invalid admin credential");

            return Err(AuthServiceError::InvalidCredential);
        }

        let session = self.issue_session(store, now).await?;

        info!(%store, client_address = %client, "admin login succeeded");

        Ok(LoginSuccess {
            kind: LoginKind::Verified,
            session,
        })
    }

    async fn logout(&self, store: StoreUuid, token: &str) -> Result<(), AuthServiceError> {
        if !is_well_formed(token) {
            return Ok(());
        }

        self.sessions
            .delete_session(store, &token_digest(token))
            .await
            .map_err(AuthServiceError::from)
    }

    async fn is_authenticated(
        &self,
        store: StoreUuid,
        token: &str,
        now: Timestamp,
    ) -> Result<bool, AuthServiceError> {
        if !is_well_formed(token) {
            return Ok(false);
        }

        self.sessions
            .find_valid_session(store, &token_digest(token), now.as_second())
            .await
            .map_err(AuthServiceError::from)
    }

    async fn change_password(
        &self,
        store: StoreUuid,
        new_password: &str,
    ) -> Result<(), AuthServiceError> {
        self.validate_new_password(new_password)?;

        let hash = self.hash_new(new_password).await?;

        self.credentials.set_credential_hash(store, &hash).await?;

        info!(%store, "admin credential changed");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify an admin password, bootstrapping the credential on first run,
    /// and issue a session on success.
    async fn login(
        &self,
        store: StoreUuid,
        password: &str,
        client: &ClientAddress,
        now: Timestamp,
    ) -> Result<LoginSuccess, AuthServiceError>;

    /// End a session. Unknown or already-ended sessions are not an error.
    async fn logout(&self, store: StoreUuid, token: &str) -> Result<(), AuthServiceError>;

    /// Whether `token` names an unexpired session for `store` at `now`.
    async fn is_authenticated(
        &self,
        store: StoreUuid,
        token: &str,
        now: Timestamp,
    ) -> Result<bool, AuthServiceError>;

    /// Replace the stored admin credential.
    async fn change_password(
        &self,
        store: StoreUuid,
        new_password: &str,
    ) -> Result<(), AuthServiceError>;
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use testresult::TestResult;

    use crate::{
        auth::repository::{MockAttemptLog, MockCredentialStore, MockSessionStore},
        test::memory::MemoryAuthStore,
    };

    use super::*;

    const T0: i64 = 1_700_000_000;

    fn at(second: i64) -> Timestamp {
        Timestamp::from_second(second).unwrap_or(Timestamp::UNIX_EPOCH)
    }

    fn client(address: &str) -> ClientAddress {
        ClientAddress::new(address)
    }

    fn fast_hasher() -> CredentialHasher {
        CredentialHasher::with_iterations(1_000)
    }

    fn memory_guard() -> (LoginGuard, Arc<MemoryAuthStore>) {
        let store = Arc::new(MemoryAuthStore::default());
        let guard = LoginGuard::new(store.clone(), store.clone(), store.clone())
            .with_hasher(fast_hasher());

        (guard, store)
    }

    fn mock_guard(
        credentials: MockCredentialStore,
        attempts: MockAttemptLog,
        sessions: MockSessionStore,
    ) -> LoginGuard {
        LoginGuard::new(Arc::new(credentials), Arc::new(attempts), Arc::new(sessions))
            .with_hasher(fast_hasher())
    }

    async fn initialized_guard(
        password: &str,
    ) -> Result<(LoginGuard, Arc<MemoryAuthStore>), AuthServiceError> {
        let (guard, store) = memory_guard();

        guard
            .login(StoreUuid::nil(), password, &client("setup"), at(T0))
            .await?;

        Ok((guard, store))
    }

    #[tokio::test]
    async fn empty_password_is_rejected_before_any_storage_access() {
        let mut credentials = MockCredentialStore::new();
        let mut attempts = MockAttemptLog::new();
        let mut sessions = MockSessionStore::new();

        credentials.expect_get_credential_hash().never();
        attempts.expect_count_attempts().never();
        attempts.expect_insert_attempt().never();
        sessions.expect_insert_session().never();

        let guard = mock_guard(credentials, attempts, sessions);

        let result = guard
            .login(StoreUuid::nil(), "", &client("10.0.0.1"), at(T0))
            .await;

        assert!(matches!(
            result,
            Err(AuthServiceError::ValidationFailed(
                ValidationFailure::MissingPassword
            ))
        ));
    }

    #[tokio::test]
    async fn bootstrap_rejects_short_password_and_stays_uninitialized() {
        let (guard, store) = memory_guard();

        let result = guard
            .login(StoreUuid::nil(), "short", &client("10.0.0.1"), at(T0))
            .await;

        assert!(matches!(
            result,
            Err(AuthServiceError::ValidationFailed(
                ValidationFailure::PasswordTooShort { min_len: 8 }
            ))
        ));
        assert_eq!(store.credential(StoreUuid::nil()).await, None);
        assert_eq!(store.attempt_count().await, 0);
    }

    #[tokio::test]
    async fn bootstrap_sets_credential_and_issues_session_in_one_call() -> TestResult {
        let (guard, store) = memory_guard();

        let success = guard
            .login(StoreUuid::nil(), "longenough1", &client("10.0.0.1"), at(T0))
            .await?;

        assert_eq!(success.kind, LoginKind::Bootstrapped);
        assert!(store.credential(StoreUuid::nil()).await.is_some());
        assert_eq!(store.attempt_count().await, 0, "bootstrap is not an attempt");
        assert!(
            guard
                .is_authenticated(StoreUuid::nil(), &success.session.token, at(T0 + 1))
                .await?
        );

        Ok(())
    }

    #[tokio::test]
    async fn second_login_verifies_against_bootstrapped_credential() -> TestResult {
        let (guard, _store) = initialized_guard("longenough1").await?;

        let success = guard
            .login(StoreUuid::nil(), "longenough1", &client("10.0.0.1"), at(T0 + 10))
            .await?;

        assert_eq!(success.kind, LoginKind::Verified);

        Ok(())
    }

    #[tokio::test]
    async fn attempts_are_recorded_on_success_and_failure() -> TestResult {
        let (guard, store) = initialized_guard("longenough1").await?;

        guard
            .login(StoreUuid::nil(), "longenough1", &client("10.0.0.1"), at(T0 + 1))
            .await?;

        let failed = guard
            .login(StoreUuid::nil(), "wrongpass", &client("10.0.0.1"), at(T0 + 2))
            .await;

        assert!(matches!(failed, Err(AuthServiceError::InvalidCredential)));
        assert_eq!(store.attempt_count().await, 2);

        Ok(())
    }

    #[tokio::test]
    async fn rate_limit_allows_tenth_attempt_and_blocks_eleventh() -> TestResult {
        let (guard, _store) = initialized_guard("longenough1").await?;
        let attacker = client("203.0.113.9");

        for offset in 1..=10 {
            let result = guard
                .login(StoreUuid::nil(), "wrongpass", &attacker, at(T0 + offset))
                .await;

            assert!(
                matches!(result, Err(AuthServiceError::InvalidCredential)),
                "attempt {offset} should reach verification"
            );
        }

        let blocked = guard
            .login(StoreUuid::nil(), "longenough1", &attacker, at(T0 + 11))
            .await;

        assert!(matches!(
            blocked,
            Err(AuthServiceError::RateLimited {
                retry_after_secs: 900
            })
        ));

        let other = guard
            .login(StoreUuid::nil(), "longenough1", &client("198.51.100.7"), at(T0 + 12))
            .await?;

        assert_eq!(other.kind, LoginKind::Verified);

        Ok(())
    }

    #[tokio::test]
    async fn rate_limit_is_scoped_to_store() -> TestResult {
        let (guard, _store) = initialized_guard("longenough1").await?;
        let other = StoreUuid::new();
        let attacker = client("203.0.113.9");

        guard
            .login(other, "otherpass1", &client("setup"), at(T0))
            .await?;

        for offset in 1..=10 {
            let _failed = guard
                .login(StoreUuid::nil(), "wrongpass", &attacker, at(T0 + offset))
                .await;
        }

        let blocked = guard
            .login(StoreUuid::nil(), "longenough1", &attacker, at(T0 + 11))
            .await;

        assert!(matches!(blocked, Err(AuthServiceError::RateLimited { .. })));

        let wrong_elsewhere = guard
            .login(other, "wrongpass", &attacker, at(T0 + 12))
            .await;

        assert!(matches!(
            wrong_elsewhere,
            Err(AuthServiceError::InvalidCredential)
        ));

        let elsewhere = guard
            .login(other, "otherpass1", &attacker, at(T0 + 13))
            .await?;

        assert_eq!(elsewhere.kind, LoginKind::Verified);

        Ok(())
    }

    #[tokio::test]
    async fn rate_limit_window_slides() -> TestResult {
        let (guard, _store) = initialized_guard("longenough1").await?;
        let attacker = client("203.0.113.9");

        for offset in 1..=10 {
            let _failed = guard
                .login(StoreUuid::nil(), "wrongpass", &attacker, at(T0 + offset))
                .await;
        }

        let later = guard
            .login(StoreUuid::nil(), "longenough1", &attacker, at(T0 + 10 + 900))
            .await?;

        assert_eq!(later.kind, LoginKind::Verified);

        Ok(())
    }

    #[tokio::test]
    async fn rate_limited_login_neither_reads_credential_nor_records_attempt() {
        let mut credentials = MockCredentialStore::new();
        let mut attempts = MockAttemptLog::new();
        let mut sessions = MockSessionStore::new();

        attempts
            .expect_count_attempts()
            .once()
            .withf(|_, address, since| address == "10.0.0.1" && *since == T0 - 900)
            .return_once(|_, _, _| Ok(10));

        credentials.expect_get_credential_hash().never();
        attempts.expect_insert_attempt().never();
        attempts.expect_delete_attempts_before().never();
        sessions.expect_insert_session().never();

        let guard = mock_guard(credentials, attempts, sessions);

        let result = guard
            .login(StoreUuid::nil(), "whatever1", &client("10.0.0.1"), at(T0))
            .await;

        assert!(matches!(result, Err(AuthServiceError::RateLimited { .. })));
    }

    #[tokio::test]
    async fn prune_failure_does_not_fail_login() -> TestResult {
        let stored = fast_hasher().hash_new("longenough1");

        let mut credentials = MockCredentialStore::new();
        let mut attempts = MockAttemptLog::new();
        let mut sessions = MockSessionStore::new();

        attempts.expect_count_attempts().return_once(|_, _, _| Ok(0));
        credentials
            .expect_get_credential_hash()
            .return_once(move |_| Ok(Some(stored)));
        attempts
            .expect_insert_attempt()
            .once()
            .withf(|_, address, attempted_at| address == "10.0.0.1" && *attempted_at == T0)
            .return_once(|_, _, _| Ok(()));
        attempts
            .expect_delete_attempts_before()
            .once()
            .withf(|before| *before == T0 - 1_800)
            .return_once(|_| Err(sqlx::Error::PoolTimedOut));
        sessions
            .expect_insert_session()
            .once()
            .withf(|_, session| session.expires_at == session.created_at + 604_800)
            .return_once(|_, _| Ok(()));

        let guard = mock_guard(credentials, attempts, sessions);

        let success = guard
            .login(StoreUuid::nil(), "longenough1", &client("10.0.0.1"), at(T0))
            .await?;

        assert_eq!(success.kind, LoginKind::Verified);
        assert_eq!(success.session.expires_at.as_second(), T0 + 604_800);

        Ok(())
    }

    #[tokio::test]
    async fn storage_failure_propagates() {
        let mut credentials = MockCredentialStore::new();
        let mut attempts = MockAttemptLog::new();

        attempts.expect_count_attempts().return_once(|_, _, _| Ok(0));
        credentials
            .expect_get_credential_hash()
            .return_once(|_| Err(sqlx::Error::PoolTimedOut));
        attempts.expect_insert_attempt().never();

        let guard = mock_guard(credentials, attempts, MockSessionStore::new());

        let result = guard
            .login(StoreUuid::nil(), "longenough1", &client("10.0.0.1"), at(T0))
            .await;

        assert!(matches!(result, Err(AuthServiceError::Sql(_))));
    }

    #[tokio::test]
    async fn unknown_store_fails_before_hashing_or_recording() {
        let mut credentials = MockCredentialStore::new();
        let mut attempts = MockAttemptLog::new();
        let mut sessions = MockSessionStore::new();

        attempts.expect_count_attempts().return_once(|_, _, _| Ok(0));
        credentials
            .expect_get_credential_hash()
            .once()
            .return_once(|_| Err(sqlx::Error::RowNotFound));
        credentials.expect_set_credential_hash_if_absent().never();
        attempts.expect_insert_attempt().never();
        sessions.expect_insert_session().never();

        let guard = mock_guard(credentials, attempts, sessions);

        let result = guard
            .login(StoreUuid::new(), "longenough1", &client("10.0.0.1"), at(T0))
            .await;

        assert!(matches!(result, Err(AuthServiceError::StoreNotFound)));
    }

    #[tokio::test]
    async fn lost_bootstrap_race_falls_back_to_verification() -> TestResult {
        let winner = fast_hasher().hash_new("winner-password");
        let reads = AtomicUsize::new(0);

        let mut credentials = MockCredentialStore::new();
        let mut attempts = MockAttemptLog::new();
        let mut sessions = MockSessionStore::new();

        attempts.expect_count_attempts().return_once(|_, _, _| Ok(0));
        credentials
            .expect_get_credential_hash()
            .times(2)
            .returning(move |_| {
                if reads.fetch_add(1, Ordering::SeqCst) == 0 {
                    Ok(None)
                } else {
                    Ok(Some(winner.clone()))
                }
            });
        credentials
            .expect_set_credential_hash_if_absent()
            .once()
            .return_once(|_, _| Ok(false));
        attempts
            .expect_insert_attempt()
            .once()
            .return_once(|_, _, _| Ok(()));
        attempts
            .expect_delete_attempts_before()
            .return_once(|_| Ok(()));
        sessions.expect_insert_session().never();

        let guard = mock_guard(credentials, attempts, sessions);

        let result = guard
            .login(StoreUuid::nil(), "loser-password", &client("10.0.0.1"), at(T0))
            .await;

        assert!(matches!(result, Err(AuthServiceError::InvalidCredential)));

        Ok(())
    }

    #[tokio::test]
    async fn session_is_valid_until_expiry() -> TestResult {
        let (guard, _store) = memory_guard();

        let success = guard
            .login(StoreUuid::nil(), "longenough1", &client("10.0.0.1"), at(T0))
            .await?;

        let session = success.session;
        let expires_at = session.expires_at.as_second();

        assert_eq!(expires_at, session.created_at.as_second() + 604_800);
        assert!(
            guard
                .is_authenticated(StoreUuid::nil(), &session.token, at(expires_at - 1))
                .await?
        );
        assert!(
            !guard
                .is_authenticated(StoreUuid::nil(), &session.token, at(expires_at))
                .await?
        );

        Ok(())
    }

    #[tokio::test]
    async fn sessions_do_not_cross_stores() -> TestResult {
        let (guard, _store) = memory_guard();
        let other = StoreUuid::new();

        let success = guard
            .login(StoreUuid::nil(), "longenough1", &client("10.0.0.1"), at(T0))
            .await?;

        assert!(
            !guard
                .is_authenticated(other, &success.session.token, at(T0 + 1))
                .await?
        );

        Ok(())
    }

    #[tokio::test]
    async fn malformed_token_is_unauthenticated_without_lookup() -> TestResult {
        let mut sessions = MockSessionStore::new();

        sessions.expect_find_valid_session().never();
        sessions.expect_delete_session().never();

        let guard = mock_guard(MockCredentialStore::new(), MockAttemptLog::new(), sessions);

        assert!(
            !guard
                .is_authenticated(StoreUuid::nil(), "not-a-token", at(T0))
                .await?
        );

        guard.logout(StoreUuid::nil(), "not-a-token").await?;

        Ok(())
    }

    #[tokio::test]
    async fn logout_is_idempotent() -> TestResult {
        let (guard, _store) = memory_guard();

        let success = guard
            .login(StoreUuid::nil(), "longenough1", &client("10.0.0.1"), at(T0))
            .await?;

        let token = success.session.token;

        guard.logout(StoreUuid::nil(), &token).await?;
        guard.logout(StoreUuid::nil(), &token).await?;
        guard
            .logout(StoreUuid::nil(), &SessionToken::generate().expose())
            .await?;

        assert!(
            !guard
                .is_authenticated(StoreUuid::nil(), &token, at(T0 + 1))
                .await?
        );

        Ok(())
    }

    #[tokio::test]
    async fn change_password_replaces_credential() -> TestResult {
        let (guard, _store) = initialized_guard("longenough1").await?;

        let too_short = guard.change_password(StoreUuid::nil(), "tiny").await;

        assert!(matches!(
            too_short,
            Err(AuthServiceError::ValidationFailed(
                ValidationFailure::PasswordTooShort { .. }
            ))
        ));

        guard
            .change_password(StoreUuid::nil(), "brand-new-pass")
            .await?;

        let old = guard
            .login(StoreUuid::nil(), "longenough1", &client("10.0.0.1"), at(T0 + 1))
            .await;

        assert!(matches!(old, Err(AuthServiceError::InvalidCredential)));

        guard
            .login(StoreUuid::nil(), "brand-new-pass", &client("10.0.0.1"), at(T0 + 2))
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn end_to_end_login_scenario() -> TestResult {
        let (guard, store) = memory_guard();
        let store_uuid = StoreUuid::nil();
        let caller = client("192.0.2.10");

        let short = guard.login(store_uuid, "short", &caller, at(T0)).await;

        assert!(matches!(short, Err(AuthServiceError::ValidationFailed(_))));
        assert_eq!(store.credential(store_uuid).await, None);

        let t1 = guard
            .login(store_uuid, "longenough1", &caller, at(T0 + 1))
            .await?
            .session
            .token;

        assert!(store.credential(store_uuid).await.is_some());

        for offset in 0..10 {
            let result = guard
                .login(store_uuid, "wrongpass", &caller, at(T0 + 2 + offset))
                .await;

            assert!(
                matches!(result, Err(AuthServiceError::InvalidCredential)),
                "wrong password attempt {} should be verified",
                offset + 1
            );
        }

        let eleventh = guard
            .login(store_uuid, "wrongpass", &caller, at(T0 + 12))
            .await;

        assert!(matches!(eleventh, Err(AuthServiceError::RateLimited { .. })));

        guard.logout(store_uuid, &t1).await?;

        assert!(!guard.is_authenticated(store_uuid, &t1, at(T0 + 13)).await?);

        Ok(())
    }
}
