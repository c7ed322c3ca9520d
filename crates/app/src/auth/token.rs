//! Admin session token generation, shape checks, and storage digests.

use std::fmt;

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

/// Session token prefix.
pub const SESSION_TOKEN_PREFIX: &str = "fs_";

/// Number of random bytes encoded in a token.
pub const SESSION_TOKEN_SECRET_BYTES: usize = 32;

const SESSION_TOKEN_SECRET_HEX_CHARS: usize = SESSION_TOKEN_SECRET_BYTES * 2;

/// A freshly issued bearer token. Only ever handed back to the caller once.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken {
    token: String,
}

impl SessionToken {
    /// Generate a new random token.
    #[must_use]
    pub fn generate() -> Self {
        let mut secret = [0_u8; SESSION_TOKEN_SECRET_BYTES];

        OsRng.fill_bytes(&mut secret);

        let token = format!("{SESSION_TOKEN_PREFIX}{}", hex::encode(secret));

        secret.zeroize();

        Self { token }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// Storage digest of this token.
    #[must_use]
    pub fn digest(&self) -> String {
        token_digest(&self.token)
    }

    /// Hand the raw token to the caller.
    #[must_use]
    pub fn expose(mut self) -> String {
        std::mem::take(&mut self.token)
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(**redacted**)")?;
        Ok(())
    }
}

impl Drop for SessionToken {
    fn drop(&mut self) {
        self.token.zeroize();
    }
}

/// Whether `token` has the shape of an issued session token.
#[must_use]
pub fn is_well_formed(token: &str) -> bool {
    token
        .strip_prefix(SESSION_TOKEN_PREFIX)
        .is_some_and(|secret| {
            secret.len() == SESSION_TOKEN_SECRET_HEX_CHARS
                && secret.bytes().all(|byte| matches!(byte, b'0'..=b'9' | b'a'..=b'f'))
        })
}

/// SHA-256 digest of a presented token, as stored by the session store.
#[must_use]
pub fn token_digest(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn generated_tokens_are_well_formed() {
        let token = SessionToken::generate();

        assert!(is_well_formed(token.as_str()));
        assert_eq!(
            token.as_str().len(),
            SESSION_TOKEN_PREFIX.len() + SESSION_TOKEN_SECRET_HEX_CHARS
        );
    }

    #[test]
    fn generated_tokens_are_unique() {
        let tokens: HashSet<String> = (0..1_000)
            .map(|_| SessionToken::generate().expose())
            .collect();

        assert_eq!(tokens.len(), 1_000);
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(!is_well_formed(""));
        assert!(!is_well_formed("fs_"));
        assert!(!is_well_formed("fs_abc"));
        assert!(!is_well_formed(&format!("xx_{}", "a".repeat(64))));
        assert!(!is_well_formed(&format!("fs_{}", "A".repeat(64))));
        assert!(!is_well_formed(&format!("fs_{}", "g".repeat(64))));
        assert!(is_well_formed(&format!("fs_{}", "0a".repeat(32))));
    }

    #[test]
    fn digest_matches_presented_token_digest() {
        let token = SessionToken::generate();
        let digest = token.digest();
        let raw = token.expose();

        assert_eq!(digest, token_digest(&raw));
        assert_ne!(digest, raw);
    }

    #[test]
    fn debug_output_is_redacted() {
        let token = SessionToken::generate();
        let raw = token.as_str().to_owned();

        let debug = format!("{token:?}");

        assert!(!debug.contains(&raw));
        assert!(debug.contains("redacted"));
    }
}
