//! Attachment URL domain entities.

pub mod model;
pub mod upsert;

pub use model::AttachmentUrl;
pub use upsert::{EXPIRES_ON_FORMAT, UpsertAttachmentUrl, UpsertMode};
