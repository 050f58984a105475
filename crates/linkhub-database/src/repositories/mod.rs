//! Repository implementations backed by PostgreSQL.

pub mod attachment_url;

pub use attachment_url::AttachmentUrlRepository;
