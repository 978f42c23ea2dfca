//! Dashboard view: every saved resume version, one card each.

use api::{remove_version, VersionSummary};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant};
use ui::icons::{FaPlus, FaRightFromBracket};
use ui::{
    make_client_for, pdf_filename, save_pdf, sign_out, use_session, use_toast, ConfirmDialog,
    Icon, ResumeCard,
};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let mut session_state = use_session();
    let nav = use_navigator();
    let toast = use_toast();
    let mut versions = use_signal(Vec::<VersionSummary>::new);
    let mut loading = use_signal(|| true);
    let mut pending_delete = use_signal(|| Option::<(String, u32)>::None);

    // Fetch the version list once on mount
    let _loader = use_resource(move || async move {
        let Some(user_id) = session_state().user_id() else {
            loading.set(false);
            return;
        };
        let client = make_client_for(&session_state());
        match client.list_versions(&user_id).await {
            Ok(list) => versions.set(list),
            Err(e) => {
                tracing::error!("Failed to load resumes: {e}");
                toast.error("Failed to load resumes");
                versions.set(Vec::new());
            }
        }
        loading.set(false);
    });

    if !session_state().is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let handle_download = move |(resume_id, version): (String, u32)| {
        spawn(async move {
            let client = make_client_for(&session_state());
            match client.download_pdf(&resume_id, version).await {
                Ok(bytes) => {
                    if let Err(e) = save_pdf(&bytes, &pdf_filename(version)) {
                        tracing::error!("Failed to save PDF: {e}");
                        toast.error("Error downloading PDF");
                    }
                }
                Err(e) => toast.error(e.to_string()),
            }
        });
    };

    let handle_delete = move |(resume_id, version): (String, u32)| {
        spawn(async move {
            let client = make_client_for(&session_state());
            match client.delete_version(&resume_id, version).await {
                Ok(()) => {
                    // Drop just the deleted version; no refetch
                    remove_version(&mut versions.write(), &resume_id, version);
                    toast.success("Resume deleted!");
                }
                Err(e) => {
                    tracing::error!("Failed to delete version {version} of {resume_id}: {e}");
                    toast.error("Error deleting resume");
                }
            }
        });
    };

    let handle_logout = move |_| {
        sign_out(&mut session_state);
        nav.push(Route::Login {});
    };

    rsx! {
        div {
            class: "page dashboard-page",

            div {
                class: "dashboard-header",
                h2 { class: "dashboard-title", "My Resume Dashboard" }
                div {
                    class: "dashboard-header-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| { nav.push(Route::CreateResume {}); },
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        " Create Resume"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: handle_logout,
                        Icon { icon: FaRightFromBracket, width: 12, height: 12 }
                        " Log out"
                    }
                }
            }

            if loading() {
                p { class: "page-status", "Loading resumes..." }
            } else if versions().is_empty() {
                div {
                    class: "dashboard-empty",
                    p { "No resumes found." }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| { nav.push(Route::CreateResume {}); },
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        " Create Your First Resume"
                    }
                }
            } else {
                div {
                    class: "dashboard-grid",
                    for summary in versions() {
                        ResumeCard {
                            key: "{summary.resume_id}-{summary.version}",
                            summary: summary.clone(),
                            on_view: {
                                let resume_id = summary.resume_id.clone();
                                move |_| {
                                    nav.push(Route::ViewResume { resume_id: resume_id.clone() });
                                }
                            },
                            on_edit: {
                                let resume_id = summary.resume_id.clone();
                                let version = summary.version;
                                move |_| {
                                    nav.push(Route::EditResume {
                                        resume_id: resume_id.clone(),
                                        version: Some(version),
                                    });
                                }
                            },
                            on_download: {
                                let resume_id = summary.resume_id.clone();
                                let version = summary.version;
                                move |_| handle_download((resume_id.clone(), version))
                            },
                            on_delete: {
                                let resume_id = summary.resume_id.clone();
                                let version = summary.version;
                                move |_| pending_delete.set(Some((resume_id.clone(), version)))
                            },
                        }
                    }
                }
            }

            if let Some((resume_id, version)) = pending_delete() {
                ConfirmDialog {
                    message: "Are you sure you want to delete this resume?",
                    on_confirm: {
                        let resume_id = resume_id.clone();
                        move |_| {
                            pending_delete.set(None);
                            handle_delete((resume_id.clone(), version));
                        }
                    },
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}
