//! Password hashing for buyer and seller accounts
//!
//! Plaintext never reaches the database: the repositories only accept a
//! `PasswordDigest`, which is an argon2id PHC string with a random salt.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Hashing failed inside argon2
#[derive(Debug, thiserror::Error)]
#[error("password hashing failed: {0}")]
pub struct PasswordError(String);

/// Argon2 PHC-format digest of a password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Hash a plaintext password with a fresh salt.
    ///
    /// # Example
    /// ```
    /// use todomart_server::models::PasswordDigest;
    ///
    /// let digest = PasswordDigest::hash("hunter2").unwrap();
    /// assert!(digest.as_str().starts_with("$argon2id$"));
    /// assert!(digest.verify("hunter2"));
    /// ```
    pub fn hash(plaintext: &str) -> Result<Self, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| PasswordError(e.to_string()))?;

        Ok(Self(hash.to_string()))
    }

    /// Wrap a digest read back from storage.
    pub fn from_stored(digest: String) -> Self {
        Self(digest)
    }

    /// Check a plaintext candidate against this digest.
    ///
    /// A stored value that doesn't parse as a PHC string never verifies.
    pub fn verify(&self, candidate: &str) -> bool {
        match PasswordHash::new(&self.0) {
            Ok(parsed) => Argon2::default()
                .verify_password(candidate.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
