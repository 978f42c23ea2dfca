//! Transient notifications, rendered as a stack in the page corner.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
struct Toast {
    id: u64,
    level: ToastLevel,
    message: String,
}

/// Handle for pushing notifications from any view or handler.
#[derive(Clone, Copy)]
pub struct ToastApi {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl ToastApi {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    fn push(&self, level: ToastLevel, message: String) {
        let mut toasts = self.toasts;
        let mut next_id = self.next_id;
        let id = next_id();
        next_id.set(id + 1);
        toasts.write().push(Toast { id, level, message });

        // Auto-dismiss after a few seconds
        spawn(async move {
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::sleep(std::time::Duration::from_secs(4)).await;
            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(std::time::Duration::from_secs(4)).await;

            toasts.write().retain(|t| t.id != id);
        });
    }
}

/// Get the toast handle.
pub fn use_toast() -> ToastApi {
    use_context::<ToastApi>()
}

/// Provider component that owns the toast stack.
/// Wrap the app with this component to enable notifications.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Vec::<Toast>::new);
    let next_id = use_signal(|| 0u64);

    use_context_provider(|| ToastApi { toasts, next_id });

    rsx! {
        {children}

        div {
            class: "toast-stack",
            for toast in toasts() {
                div {
                    key: "{toast.id}",
                    class: match toast.level {
                        ToastLevel::Success => "toast toast-success",
                        ToastLevel::Error => "toast toast-error",
                    },
                    "{toast.message}"
                }
            }
        }
    }
}
