//! Signup page view.

use api::SignupRequest;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input};
use ui::{make_client, use_toast};

use crate::Route;

/// Signup page component.
///
/// The confirmation field is collected and submitted as-is; the backend is
/// the only place it is checked against the password.
#[component]
pub fn Signup() -> Element {
    let mut name = use_signal(String::new);
    let mut mobile_no = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let nav = use_navigator();
    let toast = use_toast();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let request = SignupRequest {
                name: name().trim().to_string(),
                mobile_no: mobile_no().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
                confirm_password: confirm_password(),
            };

            match make_client().signup(&request).await {
                Ok(message) => {
                    toast.success(message);
                    nav.push(Route::Login {});
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

                h2 { class: "auth-title", "Create an Account" }

                form {
                    onsubmit: handle_submit,
                    class: "auth-form",

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    Input {
                        r#type: "text",
                        placeholder: "Full Name",
                        value: name(),
                        required: true,
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }

                    Input {
                        r#type: "text",
                        placeholder: "Mobile Number",
                        value: mobile_no(),
                        required: true,
                        oninput: move |evt: FormEvent| mobile_no.set(evt.value()),
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

                    Input {
                        r#type: "password",
                        placeholder: "Confirm Password",
                        value: confirm_password(),
                        required: true,
                        oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        class: "auth-submit",
                        disabled: loading(),
                        if loading() { "Registering..." } else { "Sign Up" }
                    }
                }

                p { class: "auth-footer",
                    "Already have an account? "
                    a { href: "/login", "Login" }
                }
            }
        }
    }
}
