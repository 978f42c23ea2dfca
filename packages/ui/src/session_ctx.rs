//! Session context and hooks for the UI.

use dioxus::prelude::*;
use session::Session;

/// Session state for the application.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.token.clone())
    }

    pub fn user_id(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.user_id.clone())
    }

    pub fn name(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.name.clone())
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that owns the session state.
/// Wrap the app with this component; it restores the durable session record
/// once at startup.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let state = use_signal(|| SessionState {
        session: crate::make_session().load(),
    });

    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Persist a freshly issued session and update the context.
pub fn sign_in(state: &mut Signal<SessionState>, session: Session) {
    crate::make_session().save(&session);
    state.set(SessionState {
        session: Some(session),
    });
}

/// Clear the durable record and the context. The single logout point.
pub fn sign_out(state: &mut Signal<SessionState>) {
    crate::make_session().clear();
    state.set(SessionState::default());
}
