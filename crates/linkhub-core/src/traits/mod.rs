//! Core traits defined in `linkhub-core` and implemented by other crates.

pub mod secret;

pub use secret::SecretHasher;
