//! Attachment URL issuance and maintenance.

pub mod input;
pub mod service;

pub use input::{CreateUrlInput, INVALID_DATE_MESSAGE, UpdateUrlInput};
pub use service::AttachmentUrlService;
