use dioxus::prelude::*;

use ui::{use_session, SessionProvider, ToastProvider};
use views::{CreateResume, Dashboard, EditResume, Login, NotFound, Signup, ViewResume};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/signup")]
    Signup {},
    #[route("/login")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/create-resume")]
    CreateResume {},
    #[route("/edit-resume/:resume_id?:version")]
    EditResume { resume_id: String, version: Option<u32> },
    #[route("/view-resume/:resume_id")]
    ViewResume { resume_id: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastProvider {
            SessionProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Redirect `/` to the dashboard when a session exists, to the login page
/// otherwise.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    let session = use_session();

    if session().is_authenticated() {
        nav.replace(Route::Dashboard {});
    } else {
        nav.replace(Route::Login {});
    }
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn test_edit_route_carries_version_query() {
        let first = Route::EditResume {
            resume_id: "r1".to_string(),
            version: Some(1),
        };
        let second = Route::EditResume {
            resume_id: "r1".to_string(),
            version: Some(2),
        };
        assert_eq!(first.to_string(), "/edit-resume/r1?version=1");
        assert_eq!(second.to_string(), "/edit-resume/r1?version=2");
    }

    #[test]
    fn test_view_route_embeds_resume_id() {
        let route = Route::ViewResume {
            resume_id: "r1".to_string(),
        };
        assert_eq!(route.to_string(), "/view-resume/r1");
    }
}
