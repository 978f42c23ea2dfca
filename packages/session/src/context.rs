//! # Session context — typed access to the durable session record
//!
//! [`SessionContext`] is the single place the session record (token, user id,
//! cached display fields) is read or written. All access goes through the
//! [`SessionStore`] trait, so the same logic works against browser
//! `localStorage` on the web ([`crate::web`]) and an in-memory map everywhere
//! else ([`crate::memory`]).
//!
//! The storage keys are fixed: `token`, `userId`, `email`, `name`. A session
//! is considered present only when both `token` and `userId` exist;
//! [`SessionContext::clear`] removes all four keys and is the only
//! invalidation point (logout).

use crate::models::Session;

const KEY_TOKEN: &str = "token";
const KEY_USER_ID: &str = "userId";
const KEY_EMAIL: &str = "email";
const KEY_NAME: &str = "name";

/// String key/value store backing the session record.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Typed accessors over a [`SessionStore`].
pub struct SessionContext<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> SessionContext<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the stored session, if one is present.
    ///
    /// Requires both the token and the user id; the display fields fall back
    /// to empty strings when missing.
    pub fn load(&self) -> Option<Session> {
        let token = self.store.get(KEY_TOKEN)?;
        let user_id = self.store.get(KEY_USER_ID)?;
        Some(Session {
            token,
            user_id,
            email: self.store.get(KEY_EMAIL).unwrap_or_default(),
            name: self.store.get(KEY_NAME).unwrap_or_default(),
        })
    }

    /// Persist a session after login.
    pub fn save(&self, session: &Session) {
        self.store.set(KEY_TOKEN, &session.token);
        self.store.set(KEY_USER_ID, &session.user_id);
        self.store.set(KEY_EMAIL, &session.email);
        self.store.set(KEY_NAME, &session.name);
    }

    /// Remove every session key. This is the logout invalidation point.
    pub fn clear(&self) {
        self.store.remove(KEY_TOKEN);
        self.store.remove(KEY_USER_ID);
        self.store.remove(KEY_EMAIL);
        self.store.remove(KEY_NAME);
    }

    /// The bearer token, if a session is stored.
    pub fn token(&self) -> Option<String> {
        self.store.get(KEY_TOKEN)
    }

    /// The owning user's id, if a session is stored.
    pub fn user_id(&self) -> Option<String> {
        self.store.get(KEY_USER_ID)
    }
}
