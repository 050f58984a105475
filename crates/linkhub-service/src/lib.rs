//! # linkhub-service
//!
//! Business logic layer for LinkHub. Services validate and normalize
//! caller input, then delegate persistence to the injected store.
//!
//! Services follow constructor injection; all dependencies are provided
//! at construction time via `Arc` references.

pub mod attachment;
pub mod context;

pub use attachment::{AttachmentUrlService, CreateUrlInput, UpdateUrlInput};
pub use context::RequestContext;
