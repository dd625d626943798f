//! Session marker model.

use serde::{Deserialize, Serialize};

/// Opaque record indicating "a user is logged in".
///
/// The guard only ever asks whether a marker is present; nothing validates
/// its contents. Created at login (external to this crate), destroyed at
/// logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMarker {
    pub user_handle: String,
    pub created_at: i64,
}

impl SessionMarker {
    pub fn new(user_handle: impl Into<String>) -> Self {
        Self {
            user_handle: user_handle.into(),
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}
