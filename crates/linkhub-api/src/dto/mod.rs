//! Request and response bodies. Field names follow the PascalCase wire format.

pub mod request;
pub mod response;
