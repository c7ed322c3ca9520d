//! Auth Config

use clap::Args;
use farmstand_app::{
    auth::{DEFAULT_MAX_ATTEMPTS, DEFAULT_MIN_PASSWORD_LEN, LoginPolicy},
    domain::stores::records::StoreUuid,
};
use jiff::SignedDuration;
use uuid::Uuid;

/// Admin login and session settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Store served by this instance
    #[arg(long, env = "STORE_UUID", default_value_t = Uuid::nil())]
    pub store_uuid: Uuid,

    /// Login attempts allowed per client address within the window
    #[arg(
        long,
        env = "LOGIN_MAX_ATTEMPTS",
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub login_max_attempts: u32,

    /// Trailing login rate-limit window in seconds
    #[arg(
        long,
        env = "LOGIN_WINDOW_SECONDS",
        default_value_t = 900_u32,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub login_window_seconds: u32,

    /// Admin session lifetime in seconds
    #[arg(
        long,
        env = "SESSION_TTL_SECONDS",
        default_value_t = 604_800_u32,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub session_ttl_seconds: u32,

    /// Minimum length of a newly set admin password
    #[arg(long, env = "MIN_PASSWORD_LENGTH", default_value_t = DEFAULT_MIN_PASSWORD_LEN)]
    pub min_password_length: usize,

    /// Header carrying the original client IP when behind a proxy
    /// (e.g. `cf-connecting-ip`, `x-forwarded-for`)
    #[arg(long, env = "CLIENT_IP_HEADER")]
    pub client_ip_header: Option<String>,

    /// Origin allowed to make cross-origin requests
    #[arg(long, env = "ALLOWED_ORIGIN")]
    pub allowed_origin: Option<String>,
}

impl AuthConfig {
    /// The store this instance serves.
    #[must_use]
    pub fn store_uuid(&self) -> StoreUuid {
        StoreUuid::from_uuid(self.store_uuid)
    }

    /// Login policy assembled from the configured knobs.
    #[must_use]
    pub fn login_policy(&self) -> LoginPolicy {
        LoginPolicy {
            max_attempts: self.login_max_attempts,
            window: SignedDuration::from_secs(i64::from(self.login_window_seconds)),
            session_ttl: SignedDuration::from_secs(i64::from(self.session_ttl_seconds)),
            min_password_len: self.min_password_length,
        }
    }
}
