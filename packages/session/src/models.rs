//! The client-side session record.

use serde::{Deserialize, Serialize};

/// Identity snapshot cached after a successful login.
///
/// The token is the bearer credential attached to every authenticated
/// request; `email` and `name` are display fields only — the backend owns
/// the user entity and this client never mutates it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub email: String,
    pub name: String,
}
