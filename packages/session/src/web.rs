//! # localStorage session store — browser-side persistence
//!
//! [`WebStore`] is the [`SessionStore`] implementation used on the **web
//! platform**. It keeps the session record in the browser's `localStorage`,
//! which survives reloads and new tabs — the durable storage the login flow
//! relies on.
//!
//! ## Error handling
//!
//! All trait methods silently swallow storage errors (returning `None` for
//! reads, doing nothing for writes). A browser with storage disabled degrades
//! to "no session", which the UI already handles by routing to the login page.

use crate::context::SessionStore;

/// localStorage-backed SessionStore for the web platform.
#[derive(Clone, Default)]
pub struct WebStore;

impl WebStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for WebStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
