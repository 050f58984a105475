//! # linkhub-database
//!
//! PostgreSQL connection management, the [`AttachmentUrlStore`] storage
//! contract, and its Postgres and in-memory implementations.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryAttachmentUrlStore;
pub use repositories::AttachmentUrlRepository;
pub use store::AttachmentUrlStore;
