//! Request context carrying the authenticated user.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context for the current authenticated request.
///
/// Built by the HTTP layer from the resolved identity and passed into
/// service methods so that every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The username.
    pub username: String,
    /// IP address of the request origin.
    pub ip_address: String,
    /// User-Agent header value.
    pub user_agent: Option<String>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(
        user_id: Uuid,
        username: String,
        ip_address: String,
        user_agent: Option<String>,
    ) -> Self {
        Self {
            user_id,
            username,
            ip_address,
            user_agent,
        }
    }
}
