//! Password hashing and verification with Argon2id.
//!
//! Stored credentials come in two shapes. New credentials are PHC strings produced by
//! [`hash_password`] (e.g. `$argon2id$v=19$m=19456,t=2,p=1$...`). Accounts created
//! before hashing was introduced may still hold the plaintext password; these are
//! recognised by the missing `$argon2` prefix and replaced with a hash on the next
//! successful login.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::{internal::InternalError, AppError};

const ARGON2_PREFIX: &str = "$argon2";

/// Shape of a stored credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoredCredential<'a> {
    /// Argon2 PHC string.
    Hashed(&'a str),
    /// Legacy plaintext password awaiting migration.
    Legacy(&'a str),
}

impl<'a> StoredCredential<'a> {
    pub fn classify(stored: &'a str) -> Self {
        if stored.starts_with(ARGON2_PREFIX) {
            Self::Hashed(stored)
        } else {
            Self::Legacy(stored)
        }
    }

    /// Checks a presented password against this credential.
    ///
    /// Hashed credentials are verified by argon2 in constant time. A hash that cannot be
    /// parsed is logged and treated as a mismatch rather than an error, so a corrupt row
    /// only locks out its own account.
    pub fn matches(&self, password: &str) -> bool {
        match self {
            Self::Hashed(hash) => verify_password(password, hash),
            Self::Legacy(plaintext) => *plaintext == password,
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Legacy(_))
    }
}

/// Hashes a password using Argon2id with a fresh random salt.
///
/// # Returns
/// - `Ok(String)` - PHC-format hash
/// - `Err(AppError::InternalErr(PasswordHash))` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verifies a password against a PHC-format hash string.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("Stored password hash could not be parsed: {}", e);
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}
