//! Resume edit view: fetch one snapshot, edit fields in place, save.
//!
//! Row counts are fixed to whatever was fetched — unlike the creator there
//! is no add/remove here.

use api::Resume;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Textarea};
use ui::icons::{FaArrowLeft, FaFloppyDisk};
use ui::{make_client_for, use_session, use_toast, Icon, ViewState};

use crate::Route;

#[component]
pub fn EditResume(resume_id: String, version: Option<u32>) -> Element {
    let session_state = use_session();
    let nav = use_navigator();
    let toast = use_toast();

    // Track route params in a signal so use_resource re-runs when they change
    let mut params = use_signal(|| (resume_id.clone(), version));
    if *params.peek() != (resume_id.clone(), version) {
        params.set((resume_id.clone(), version));
    }

    let mut state = use_signal(|| ViewState::<Resume>::Loading);
    let mut saving = use_signal(|| false);

    let _loader = use_resource(move || {
        let (resume_id, version) = params();
        async move {
            let client = make_client_for(&session_state());
            state.set(ViewState::from_fetch(
                client.fetch_current(&resume_id, version).await,
            ));
        }
    });

    if !session_state().is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let handle_save = move |_| {
        spawn(async move {
            let (resume_id, _) = params();
            if let ViewState::Loaded(resume) = state() {
                saving.set(true);
                let client = make_client_for(&session_state());
                match client.update_resume(&resume_id, &resume.content).await {
                    Ok(()) => {
                        toast.success("Resume updated successfully!");
                        nav.push(Route::Dashboard {});
                    }
                    Err(e) => {
                        saving.set(false);
                        toast.error(e.to_string());
                    }
                }
            }
        });
    };

    rsx! {
        div {
            class: "page form-page",

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
                        class: "form-toolbar",
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| { nav.go_back(); },
                            Icon { icon: FaArrowLeft, width: 12, height: 12 }
                            " Back"
                        }
                        span { class: "form-toolbar-label", "Editing version {resume.version}" }
                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: saving(),
                            onclick: handle_save,
                            Icon { icon: FaFloppyDisk, width: 12, height: 12 }
                            if saving() { " Saving..." } else { " Save Changes" }
                        }
                    }

                    div {
                        class: "form-card",

                        h3 { class: "form-section-title", "Personal Info" }
                        div {
                            class: "form-grid form-grid-2",
                            Input {
                                placeholder: "First Name",
                                value: resume.content.personal.first_name.clone(),
                                oninput: move |evt: FormEvent| {
                                    if let ViewState::Loaded(resume) = &mut *state.write() {
                                        resume.content.personal.first_name = evt.value();
                                    }
                                },
                            }
                            Input {
                                placeholder: "Last Name",
                                value: resume.content.personal.last_name.clone(),
                                oninput: move |evt: FormEvent| {
                                    if let ViewState::Loaded(resume) = &mut *state.write() {
                                        resume.content.personal.last_name = evt.value();
                                    }
                                },
                            }
                            Input {
                                r#type: "email",
                                placeholder: "Email",
                                value: resume.content.personal.email.clone(),
                                oninput: move |evt: FormEvent| {
                                    if let ViewState::Loaded(resume) = &mut *state.write() {
                                        resume.content.personal.email = evt.value();
                                    }
                                },
                            }
                            Input {
                                placeholder: "Phone",
                                value: resume.content.personal.phone.clone(),
                                oninput: move |evt: FormEvent| {
                                    if let ViewState::Loaded(resume) = &mut *state.write() {
                                        resume.content.personal.phone = evt.value();
                                    }
                                },
                            }
                            Input {
                                placeholder: "Address",
                                value: resume.content.personal.address.clone().unwrap_or_default(),
                                oninput: move |evt: FormEvent| {
                                    let value = evt.value();
                                    if let ViewState::Loaded(resume) = &mut *state.write() {
                                        resume.content.personal.address =
                                            if value.is_empty() { None } else { Some(value) };
                                    }
                                },
                            }
                        }
                        Textarea {
                            class: "form-summary",
                            placeholder: "Professional summary",
                            value: resume.content.personal.summary.clone().unwrap_or_default(),
                            oninput: move |evt: FormEvent| {
                                let value = evt.value();
                                if let ViewState::Loaded(resume) = &mut *state.write() {
                                    resume.content.personal.summary =
                                        if value.is_empty() { None } else { Some(value) };
                                }
                            },
                        }

                        if !resume.content.education.is_empty() {
                            h3 { class: "form-section-title", "Education" }
                        }
                        for (i, edu) in resume.content.education.iter().enumerate() {
                            div {
                                key: "{i}",
                                class: "form-row",
                                Input {
                                    placeholder: "School",
                                    value: edu.school.clone(),
                                    oninput: move |evt: FormEvent| {
                                        if let ViewState::Loaded(resume) = &mut *state.write() {
                                            resume.content.education[i].school = evt.value();
                                        }
                                    },
                                }
                                Input {
                                    placeholder: "Degree",
                                    value: edu.degree.clone(),
                                    oninput: move |evt: FormEvent| {
                                        if let ViewState::Loaded(resume) = &mut *state.write() {
                                            resume.content.education[i].degree = evt.value();
                                        }
                                    },
                                }
                                Input {
                                    r#type: "date",
                                    value: edu.start_date.clone(),
                                    oninput: move |evt: FormEvent| {
                                        if let ViewState::Loaded(resume) = &mut *state.write() {
                                            resume.content.education[i].start_date = evt.value();
                                        }
                                    },
                                }
                                Input {
                                    r#type: "date",
                                    value: edu.end_date.clone(),
                                    oninput: move |evt: FormEvent| {
                                        if let ViewState::Loaded(resume) = &mut *state.write() {
                                            resume.content.education[i].end_date = evt.value();
                                        }
                                    },
                                }
                            }
                        }

                        if !resume.content.experience.is_empty() {
                            h3 { class: "form-section-title", "Experience" }
                        }
                        for (i, exp) in resume.content.experience.iter().enumerate() {
                            div {
                                key: "{i}",
                                class: "form-row",
                                Input {
                                    placeholder: "Company",
                                    value: exp.company.clone(),
                                    oninput: move |evt: FormEvent| {
                                        if let ViewState::Loaded(resume) = &mut *state.write() {
                                            resume.content.experience[i].company = evt.value();
                                        }
                                    },
                                }
                                Input {
                                    placeholder: "Job Title",
                                    value: exp.title.clone(),
                                    oninput: move |evt: FormEvent| {
                                        if let ViewState::Loaded(resume) = &mut *state.write() {
                                            resume.content.experience[i].title = evt.value();
                                        }
                                    },
                                }
                                Input {
                                    r#type: "date",
                                    value: exp.start_date.clone(),
                                    oninput: move |evt: FormEvent| {
                                        if let ViewState::Loaded(resume) = &mut *state.write() {
                                            resume.content.experience[i].start_date = evt.value();
                                        }
                                    },
                                }
                                Input {
                                    r#type: "date",
                                    value: exp.end_date.clone(),
                                    oninput: move |evt: FormEvent| {
                                        if let ViewState::Loaded(resume) = &mut *state.write() {
                                            resume.content.experience[i].end_date = evt.value();
                                        }
                                    },
                                }
                                Input {
                                    placeholder: "Description",
                                    value: exp.description.clone().unwrap_or_default(),
                                    oninput: move |evt: FormEvent| {
                                        let value = evt.value();
                                        if let ViewState::Loaded(resume) = &mut *state.write() {
                                            resume.content.experience[i].description =
                                                if value.is_empty() { None } else { Some(value) };
                                        }
                                    },
                                }
                            }
                        }

                        if !resume.content.skills.is_empty() {
                            h3 { class: "form-section-title", "Skills" }
                        }
                        for (i, skill) in resume.content.skills.iter().enumerate() {
                            div {
                                key: "{i}",
                                class: "form-row form-row-skill",
                                Input {
                                    placeholder: "Skill",
                                    value: skill.clone(),
                                    oninput: move |evt: FormEvent| {
                                        if let ViewState::Loaded(resume) = &mut *state.write() {
                                            resume.content.skills[i] = evt.value();
                                        }
                                    },
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}
