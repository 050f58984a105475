//! Argon2id hashing of link password secrets.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher as _, SaltString};

use linkhub_core::error::AppError;
use linkhub_core::result::AppResult;
use linkhub_core::traits::SecretHasher;

/// Hashes link passwords into PHC strings with Argon2id and a random salt.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Creates a hasher with the default Argon2id parameters.
    pub fn new() -> Self {
        Self
    }
}

impl SecretHasher for PasswordHasher {
    fn hash_secret(&self, secret: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(secret.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::internal(format!("Link secret hashing failed: {e}")))
    }
}
