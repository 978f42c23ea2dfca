use dioxus::prelude::*;

use crate::Route;

/// Catch-all page for unknown routes.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "page not-found-page",
            h2 { "Page not found" }
            p { "There is no page at /{path}." }
            Link { to: Route::Root {}, class: "not-found-link", "Go home" }
        }
    }
}
