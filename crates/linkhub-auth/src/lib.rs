//! # linkhub-auth
//!
//! Authentication collaborators for LinkHub.
//!
//! ## Modules
//!
//! - `identity`: the [`IdentityResolver`] capability and its JWT implementation
//! - `jwt`: JWT token creation and validation
//! - `password`: Argon2id hashing for link password secrets

pub mod identity;
pub mod jwt;
pub mod password;

pub use identity::{Identity, IdentityResolver, JwtIdentityResolver};
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
