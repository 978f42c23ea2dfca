use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::context::SessionStore;

/// In-memory SessionStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::SessionContext;
    use crate::models::Session;

    fn sample() -> Session {
        Session {
            token: "tok-123".to_string(),
            user_id: "user-1".to_string(),
            email: "ada@example.com".to_string(),
            name: "Ada Lovelace".to_string(),
        }
    }

    #[test]
    fn test_empty_store_has_no_session() {
        let ctx = SessionContext::new(MemoryStore::new());
        assert!(ctx.load().is_none());
        assert!(ctx.token().is_none());
        assert!(ctx.user_id().is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let ctx = SessionContext::new(MemoryStore::new());
        ctx.save(&sample());

        let loaded = ctx.load().unwrap();
        assert_eq!(loaded, sample());
        assert_eq!(ctx.token().as_deref(), Some("tok-123"));
        assert_eq!(ctx.user_id().as_deref(), Some("user-1"));
    }

    #[test]
    fn test_session_uses_contract_keys() {
        // The key names are part of the backend contract; a rename would
        // orphan sessions stored by earlier builds.
        let store = MemoryStore::new();
        let ctx = SessionContext::new(store.clone());
        ctx.save(&sample());

        assert_eq!(store.get("token").as_deref(), Some("tok-123"));
        assert_eq!(store.get("userId").as_deref(), Some("user-1"));
        assert_eq!(store.get("email").as_deref(), Some("ada@example.com"));
        assert_eq!(store.get("name").as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_load_requires_token_and_user_id() {
        let store = MemoryStore::new();
        store.set("token", "tok-123");
        let ctx = SessionContext::new(store.clone());
        assert!(ctx.load().is_none());

        store.set("userId", "user-1");
        let loaded = ctx.load().unwrap();
        assert_eq!(loaded.token, "tok-123");
        assert_eq!(loaded.email, "");
        assert_eq!(loaded.name, "");
    }

    #[test]
    fn test_clear_removes_every_key() {
        let store = MemoryStore::new();
        let ctx = SessionContext::new(store.clone());
        ctx.save(&sample());

        ctx.clear();

        assert!(ctx.load().is_none());
        assert!(store.get("token").is_none());
        assert!(store.get("userId").is_none());
        assert!(store.get("email").is_none());
        assert!(store.get("name").is_none());
    }
}
