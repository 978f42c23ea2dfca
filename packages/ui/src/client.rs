//! Shared session/client constructors for all views.
//!
//! Returns the platform-appropriate [`session::SessionStore`]:
//! - **Web** (WASM + `web` feature): browser `localStorage` via
//!   [`session::WebStore`]
//! - **Native** (tests, future desktop shell): a process-wide
//!   [`session::MemoryStore`]

use crate::SessionState;

/// Create a platform-appropriate session context.
pub fn make_session() -> session::SessionContext<impl session::SessionStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        session::SessionContext::new(session::WebStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        session::SessionContext::new(shared_memory_store())
    }
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn shared_memory_store() -> session::MemoryStore {
    use std::sync::OnceLock;
    static STORE: OnceLock<session::MemoryStore> = OnceLock::new();
    STORE.get_or_init(session::MemoryStore::new).clone()
}

/// Anonymous client for the signup/login endpoints.
pub fn make_client() -> api::ApiClient {
    api::ApiClient::new(api::base_url())
}

/// Client carrying the context's bearer token. Falls back to an anonymous
/// client when no session is present; the backend's 401 then surfaces through
/// the normal error path.
pub fn make_client_for(state: &SessionState) -> api::ApiClient {
    match state.token() {
        Some(token) => api::ApiClient::with_token(api::base_url(), token),
        None => make_client(),
    }
}
