//! Uploaded file records that attachment URLs hang off.

pub mod model;

pub use model::StoredFile;
