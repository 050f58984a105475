//! One-way transformation applied to link passwords before they are persisted.

use crate::result::AppResult;

/// Turns a cleartext link password into the form a store writes.
///
/// The algorithm belongs to whoever provides the hasher; stores only see the trait.
pub trait SecretHasher: Send + Sync + std::fmt::Debug + 'static {
    /// Produce the stored form of `secret`.
    fn hash_secret(&self, secret: &str) -> AppResult<String>;
}
