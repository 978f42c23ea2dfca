//! Read-only resume view with a PDF download action.

use api::Resume;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant};
use ui::icons::{
    FaArrowLeft, FaBriefcase, FaDiagramProject, FaDownload, FaGraduationCap,
    FaScrewdriverWrench, FaUser,
};
use ui::{format_date, make_client_for, open_in_new_tab, use_session, Icon, ViewState};

use crate::Route;

/// Render a date range, treating a missing end as still ongoing.
fn date_range(start: &str, end: &str) -> String {
    if end.is_empty() {
        format!("{} - Present", format_date(start))
    } else {
        format!("{} - {}", format_date(start), format_date(end))
    }
}

#[component]
pub fn ViewResume(resume_id: String) -> Element {
    let session_state = use_session();
    let nav = use_navigator();

    let mut id_param = use_signal(|| resume_id.clone());
    if *id_param.peek() != resume_id {
        id_param.set(resume_id.clone());
    }

    let mut state = use_signal(|| ViewState::<Resume>::Loading);

    let _loader = use_resource(move || {
        let resume_id = id_param();
        async move {
            let client = make_client_for(&session_state());
            state.set(ViewState::from_fetch(
                client.fetch_current(&resume_id, None).await,
            ));
        }
    });

    if !session_state().is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    // Opens the PDF endpoint in a new browsing context; the backend renders
    // the document.
    let handle_download = move |_| {
        if let ViewState::Loaded(resume) = state() {
            let client = make_client_for(&session_state());
            open_in_new_tab(&client.download_url(&resume.id, resume.version));
        }
    };

    rsx! {
        div {
            class: "page viewer-page",

            {match state() {
                ViewState::Loading => rsx! {
                    p { class: "page-status", "Loading resume..." }
                },
                ViewState::NotFound => rsx! {
                    p { class: "page-status page-error", "Resume not found" }
                },
                ViewState::Error(message) => rsx! {
                    p { class: "page-status page-error", "{message}" }
                },
                ViewState::Loaded(resume) => rsx! {
                    div {
                        class: "viewer-toolbar",
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| { nav.go_back(); },
                            Icon { icon: FaArrowLeft, width: 12, height: 12 }
                            " Back"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: handle_download,
                            Icon { icon: FaDownload, width: 12, height: 12 }
                            " Download PDF"
                        }
                    }

                    div {
                        class: "viewer-layout",

                        // Contact sidebar
                        div {
                            class: "viewer-sidebar",
                            div {
                                class: "viewer-identity",
                                Icon { icon: FaUser, width: 48, height: 48 }
                                h2 { "{resume.content.personal.first_name} {resume.content.personal.last_name}" }
                                p { "{resume.content.personal.email}" }
                                p { "{resume.content.personal.phone}" }
                                if let Some(address) = resume.content.personal.address.as_ref() {
                                    p { "{address}" }
                                }
                            }

                            if !resume.content.skills.is_empty() {
                                div {
                                    class: "viewer-skills",
                                    h3 {
                                        Icon { icon: FaScrewdriverWrench, width: 14, height: 14 }
                                        " Skills"
                                    }
                                    div {
                                        class: "viewer-skill-badges",
                                        for (i, skill) in resume.content.skills.iter().enumerate() {
                                            span { key: "{i}", class: "skill-badge", "{skill}" }
                                        }
                                    }
                                }
                            }
                        }

                        // Main column
                        div {
                            class: "viewer-main",

                            if let Some(summary) = resume.content.personal.summary.as_ref() {
                                section {
                                    class: "viewer-section",
                                    h3 { "Summary" }
                                    p { "{summary}" }
                                }
                            }

                            if !resume.content.experience.is_empty() {
                                section {
                                    class: "viewer-section",
                                    h3 {
                                        Icon { icon: FaBriefcase, width: 14, height: 14 }
                                        " Experience"
                                    }
                                    for (i, exp) in resume.content.experience.iter().enumerate() {
                                        div {
                                            key: "{i}",
                                            class: "viewer-entry",
                                            h4 { "{exp.title}" }
                                            p { class: "viewer-entry-meta",
                                                "{exp.company} | "
                                                {date_range(&exp.start_date, &exp.end_date)}
                                            }
                                            if let Some(description) = exp.description.as_ref() {
                                                p { "{description}" }
                                            }
                                        }
                                    }
                                }
                            }

                            if !resume.content.education.is_empty() {
                                section {
                                    class: "viewer-section",
                                    h3 {
                                        Icon { icon: FaGraduationCap, width: 14, height: 14 }
                                        " Education"
                                    }
                                    for (i, edu) in resume.content.education.iter().enumerate() {
                                        div {
                                            key: "{i}",
                                            class: "viewer-entry",
                                            h4 { "{edu.degree}" }
                                            p { class: "viewer-entry-meta",
                                                "{edu.school} | "
                                                {date_range(&edu.start_date, &edu.end_date)}
                                            }
                                        }
                                    }
                                }
                            }

                            if !resume.projects.is_empty() {
                                section {
                                    class: "viewer-section",
                                    h3 {
                                        Icon { icon: FaDiagramProject, width: 14, height: 14 }
                                        " Projects"
                                    }
                                    for (i, project) in resume.projects.iter().enumerate() {
                                        div {
                                            key: "{i}",
                                            class: "viewer-entry",
                                            h4 { "{project.title}" }
                                            if !project.technologies.is_empty() {
                                                p { class: "viewer-entry-meta",
                                                    {project.technologies.join(", ")}
                                                }
                                            }
                                            if !project.description.is_empty() {
                                                p { "{project.description}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}
