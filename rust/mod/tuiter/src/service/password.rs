//! Password hashing (argon2id, PHC string format).
//!
//! Hashing is CPU-bound, so both operations run on the blocking pool.

use argon2::Argon2;
use password_hash::rand_core::OsRng;
use password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use crate::service::TuiterError;

pub async fn hash(password: String) -> Result<String, TuiterError> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| TuiterError::Internal(format!("hash password: {e}")))
    })
    .await
    .map_err(|e| TuiterError::Internal(format!("hash task failed: {e}")))?
}

/// Whether `password` matches the stored `phc` hash. A malformed hash
/// never matches.
pub async fn verify(password: String, phc: String) -> Result<bool, TuiterError> {
    tokio::task::spawn_blocking(move || match PasswordHash::new(&phc) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    })
    .await
    .map_err(|e| TuiterError::Internal(format!("verify task failed: {e}")))
}
