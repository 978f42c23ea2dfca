//! Login page view.

use api::LoginRequest;
use dioxus::prelude::*;
use session::Session;
use ui::components::{Button, ButtonVariant, Input};
use ui::{make_client, sign_in, use_session};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut session_state = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let nav = use_navigator();

    // Already logged in: straight to the dashboard
    if session_state().is_authenticated() {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let request = LoginRequest {
                email: email().trim().to_string(),
                password: password(),
            };

            match make_client().login(&request).await {
                Ok(identity) => {
                    sign_in(
                        &mut session_state,
                        Session {
                            token: identity.token,
                            user_id: identity.user_id,
                            email: identity.email,
                            name: identity.name,
                        },
                    );
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            div {
                class: "auth-card",

                h2 { class: "auth-title", "Login" }

                form {
                    onsubmit: handle_submit,
                    class: "auth-form",

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    Input {
                        r#type: "email",
                        placeholder: "Email Address",
                        value: email(),
                        required: true,
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    Input {
                        r#type: "password",
                        placeholder: "Password",
                        value: password(),
                        required: true,
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        class: "auth-submit",
                        disabled: loading(),
                        if loading() { "Logging in..." } else { "Login" }
                    }
                }

                p { class: "auth-footer",
                    "Don't have an account? "
                    a { href: "/signup", "Sign Up" }
                }
            }
        }
    }
}
