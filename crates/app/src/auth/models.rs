//! Auth data models.

use std::fmt;

use jiff::Timestamp;

/// Best-effort identity of the caller used to partition login attempts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientAddress(String);

impl ClientAddress {
    /// Placeholder used when the caller cannot be identified.
    pub const UNKNOWN: &'static str = "unknown";

    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        let address = address.into();

        if address.trim().is_empty() {
            return Self::unknown();
        }

        Self(address)
    }

    #[must_use]
    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Session row persisted by a session store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSession {
    /// SHA-256 digest of the bearer token.
    pub token_digest: String,

    /// Unix seconds.
    pub created_at: i64,

    /// Unix seconds; the session is invalid from this second on.
    pub expires_at: i64,
}

/// Session issuance result with the one-time raw token.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
}

/// How a successful login came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginKind {
    /// Password matched the stored credential.
    Verified,

    /// First-run credential was set by this request.
    Bootstrapped,
}

/// Successful login outcome.
#[derive(Debug, Clone)]
pub struct LoginSuccess {
    pub kind: LoginKind,
    pub session: IssuedSession,
}
