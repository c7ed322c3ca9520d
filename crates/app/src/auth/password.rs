//! Salted admin credential hashing and verification.
//!
//! Credentials are stored as `{salt}:{derived_key}` where both halves are
//! lowercase hex. The derived key is PBKDF2-HMAC-SHA256 over the password,
//! keyed by the salt's hex text, with [`PBKDF2_ITERATIONS`] rounds.

use pbkdf2::pbkdf2_hmac;
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// PBKDF2 rounds used for every stored credential.
pub const PBKDF2_ITERATIONS: u32 = 600_000;

/// Random salt length in bytes.
pub const SALT_BYTES: usize = 16;

/// Derived key length in bytes.
pub const DERIVED_KEY_BYTES: usize = 32;

/// Separator between salt and derived key in the stored form.
pub const CREDENTIAL_SEPARATOR: char = ':';

/// Derives and checks salted credential hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialHasher {
    iterations: u32,
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self {
            iterations: PBKDF2_ITERATIONS,
        }
    }
}

impl CredentialHasher {
    /// Build a hasher with a non-default round count.
    ///
    /// Hashes produced with one round count only verify with the same count.
    #[must_use]
    pub const fn with_iterations(iterations: u32) -> Self {
        Self { iterations }
    }

    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Derive the hex-encoded key for `password` under `salt`.
    #[must_use]
    pub fn hash(&self, password: &str, salt: &str) -> String {
        let mut key = [0_u8; DERIVED_KEY_BYTES];

        pbkdf2_hmac::<Sha256>(password.as_bytes(), salt.as_bytes(), self.iterations, &mut key);

        let encoded = hex::encode(key);

        key.zeroize();

        encoded
    }

    /// Hash `password` under a fresh salt, returning the stored form.
    #[must_use]
    pub fn hash_new(&self, password: &str) -> String {
        let salt = generate_salt();
        let key = self.hash(password, &salt);

        format!("{salt}{CREDENTIAL_SEPARATOR}{key}")
    }

    /// Check `password` against a stored `{salt}:{key}` credential.
    ///
    /// Returns `false` for an empty or malformed stored value rather than
    /// erroring, and compares keys in constant time.
    #[must_use]
    pub fn verify(&self, password: &str, stored: &str) -> bool {
        let Some((salt, expected)) = split_stored(stored) else {
            return false;
        };

        let computed = self.hash(password, salt);

        computed.as_bytes().ct_eq(expected.as_bytes()).into()
    }
}

/// Generate a fresh hex-encoded random salt.
#[must_use]
pub fn generate_salt() -> String {
    let mut salt = [0_u8; SALT_BYTES];

    OsRng.fill_bytes(&mut salt);

    hex::encode(salt)
}

fn split_stored(stored: &str) -> Option<(&str, &str)> {
    let (salt, key) = stored.split_once(CREDENTIAL_SEPARATOR)?;

    if salt.is_empty() || key.is_empty() || key.contains(CREDENTIAL_SEPARATOR) {
        return None;
    }

    Some((salt, key))
}
