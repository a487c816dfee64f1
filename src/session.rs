//! Explicit user session.
//!
//! Passed by reference into service calls rather than read from ambient
//! shared state, so the core stays testable without a UI layer.

use uuid::Uuid;

/// An authenticated user's session.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: Uuid,
    pub username: String,
}

impl Session {
    pub fn new(user_id: Uuid, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }
}
