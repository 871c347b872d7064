//! Password hashing using argon2
//!
//! Provides salted one-way hashing and verification.
//!
//! # Performance Considerations
//!
//! Argon2 is intentionally CPU-intensive. Request handlers go through the
//! `*_async` variants, which run on the blocking thread pool so a hash never
//! stalls the async runtime.

use anyhow::Result;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use std::sync::OnceLock;
use tracing::{debug, error};

/// Password hashing service
///
/// Uses Argon2id with a fresh random salt per hash. The salt and cost
/// parameters are embedded in the PHC string that `hash` returns.
pub struct PasswordService;

impl PasswordService {
    /// Hash a password using argon2 (blocking operation)
    pub fn hash(password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;
        Ok(hash.to_string())
    }

    /// Hash a password asynchronously (non-blocking)
    pub async fn hash_async(password: String) -> Result<String> {
        tokio::task::spawn_blocking(move || Self::hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Verify a password against a stored hash (blocking operation)
    ///
    /// A hash that cannot be parsed never matches.
    pub fn verify(password: &str, hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!(error = %e, "stored password hash is malformed");
                return false;
            }
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }

    /// Hash of a random password, verified against when a login names an
    /// unknown email so that both failure paths cost one argon2 run
    ///
    /// Computed once per process.
    pub fn dummy_hash() -> &'static str {
        static DUMMY_HASH: OnceLock<String> = OnceLock::new();
        DUMMY_HASH.get_or_init(|| {
            let password = SaltString::generate(&mut OsRng);
            Self::hash(password.as_str()).unwrap_or_else(|e| {
                error!(error = %e, "failed to build dummy password hash");
                String::new()
            })
        })
    }

    /// Verify a password asynchronously (non-blocking)
    pub async fn verify_async(password: String, hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))
    }
}
