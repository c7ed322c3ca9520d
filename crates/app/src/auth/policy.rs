//! Login throttling and session lifetime policy.

use jiff::{SignedDuration, Timestamp};

/// Default maximum attempts per client address within the window.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Default trailing rate-limit window.
pub const DEFAULT_WINDOW: SignedDuration = SignedDuration::from_mins(15);

/// Default session lifetime.
pub const DEFAULT_SESSION_TTL: SignedDuration = SignedDuration::from_hours(24 * 7);

/// Minimum length of a newly set admin password.
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginPolicy {
    /// Attempts allowed per address inside `window`.
    pub max_attempts: u32,

    /// Trailing window attempts are counted over.
    pub window: SignedDuration,

    /// Fixed lifetime of an issued session.
    pub session_ttl: SignedDuration,

    /// Minimum password length when a credential is set.
    pub min_password_len: usize,
}

impl Default for LoginPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            window: DEFAULT_WINDOW,
            session_ttl: DEFAULT_SESSION_TTL,
            min_password_len: DEFAULT_MIN_PASSWORD_LEN,
        }
    }
}

impl LoginPolicy {
    /// Attempts made after this second count against the limit.
    #[must_use]
    pub fn window_start(&self, now: Timestamp) -> i64 {
        now.as_second().saturating_sub(self.window.as_secs())
    }

    /// Attempts older than this second may be pruned.
    #[must_use]
    pub fn prune_before(&self, now: Timestamp) -> i64 {
        now.as_second()
            .saturating_sub(self.window.as_secs().saturating_mul(2))
    }

    #[must_use]
    pub fn is_exceeded(&self, attempts: u64) -> bool {
        attempts >= u64::from(self.max_attempts)
    }

    /// Client back-off hint, in whole seconds.
    #[must_use]
    pub fn retry_after_secs(&self) -> u64 {
        self.window.as_secs().unsigned_abs()
    }

    /// Expiry second for a session created at `now`.
    #[must_use]
    pub fn session_expiry(&self, now: Timestamp) -> i64 {
        now.as_second().saturating_add(self.session_ttl.as_secs())
    }

    #[must_use]
    pub fn accepts_new_password(&self, password: &str) -> bool {
        password.chars().count() >= self.min_password_len
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_match_documented_limits() {
        let policy = LoginPolicy::default();

        assert_eq!(policy.max_attempts, 10);
        assert_eq!(policy.window.as_secs(), 900);
        assert_eq!(policy.session_ttl.as_secs(), 604_800);
        assert_eq!(policy.retry_after_secs(), 900);
    }

    #[test]
    fn limit_is_reached_at_max_attempts() {
        let policy = LoginPolicy::default();

        assert!(!policy.is_exceeded(0));
        assert!(!policy.is_exceeded(9));
        assert!(policy.is_exceeded(10));
        assert!(policy.is_exceeded(11));
    }

    #[test]
    fn window_and_prune_bounds_trail_now() -> TestResult {
        let policy = LoginPolicy::default();
        let now = Timestamp::from_second(1_700_000_000)?;

        assert_eq!(policy.window_start(now), 1_700_000_000 - 900);
        assert_eq!(policy.prune_before(now), 1_700_000_000 - 1_800);
        assert_eq!(policy.session_expiry(now), 1_700_000_000 + 604_800);

        Ok(())
    }

    #[test]
    fn new_password_length_counts_characters() {
        let policy = LoginPolicy::default();

        assert!(!policy.accepts_new_password("short"));
        assert!(!policy.accepts_new_password("1234567"));
        assert!(policy.accepts_new_password("12345678"));
        assert!(policy.accepts_new_password("pässwörd"));
    }
}
