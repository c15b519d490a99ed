// Cached User Record

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::store::SessionStore;

/// User record cached at login, the backend's user DTO minus server-side
/// bookkeeping. Field names follow the backend's camelCase JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// Unique user identifier; zero means "no usable identity"
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Read the authenticated user out of the store.
///
/// Returns `None` when no record is cached, when the record carries no usable
/// user identifier, or when it fails to deserialize. A record that fails to
/// deserialize is deleted so the next read starts clean; the token key is
/// left untouched.
pub fn current_user(store: &dyn SessionStore) -> Option<SessionUser> {
    let raw = store.user_record()?;
    match serde_json::from_str::<SessionUser>(&raw) {
        Ok(user) if user.user_id != 0 => Some(user),
        Ok(_) => None,
        Err(err) => {
            debug!(error = %err, "dropping unreadable cached user record");
            store.remove_user();
            None
        }
    }
}
