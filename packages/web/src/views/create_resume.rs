//! Resume creation view: one draft, four sections, repeatable rows.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Textarea};
use ui::icons::FaPlus;
use ui::{make_client_for, use_session, use_toast, Icon, ResumeDraft};

use crate::Route;

#[component]
pub fn CreateResume() -> Element {
    let session_state = use_session();
    let nav = use_navigator();
    let toast = use_toast();
    let mut draft = use_signal(ResumeDraft::new);
    let mut saving = use_signal(|| false);

    if !session_state().is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            saving.set(true);
            let client = make_client_for(&session_state());
            match client.create_resume(&draft().content).await {
                Ok(()) => {
                    toast.success("Resume saved successfully!");
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    saving.set(false);
                    toast.error(e.to_string());
                }
            }
        });
    };

    rsx! {
        div {
            class: "page form-page",

            div {
                class: "form-card",

                h2 { class: "form-title", "Create Resume" }

                form {
                    onsubmit: handle_submit,

                    // Personal Info
                    h3 { class: "form-section-title", "Personal Information" }
                    div {
                        class: "form-grid form-grid-2",
                        Input {
                            placeholder: "First Name",
                            value: draft().content.personal.first_name.clone(),
                            required: true,
                            oninput: move |evt: FormEvent| {
                                draft.write().content.personal.first_name = evt.value();
                            },
                        }
                        Input {
                            placeholder: "Last Name",
                            value: draft().content.personal.last_name.clone(),
                            required: true,
                            oninput: move |evt: FormEvent| {
                                draft.write().content.personal.last_name = evt.value();
                            },
                        }
                        Input {
                            r#type: "email",
                            placeholder: "Email",
                            value: draft().content.personal.email.clone(),
                            required: true,
                            oninput: move |evt: FormEvent| {
                                draft.write().content.personal.email = evt.value();
                            },
                        }
                        Input {
                            placeholder: "Phone",
                            value: draft().content.personal.phone.clone(),
                            required: true,
                            oninput: move |evt: FormEvent| {
                                draft.write().content.personal.phone = evt.value();
                            },
                        }
                        Input {
                            placeholder: "Address (optional)",
                            value: draft().content.personal.address.clone().unwrap_or_default(),
                            oninput: move |evt: FormEvent| {
                                let value = evt.value();
                                draft.write().content.personal.address =
                                    if value.is_empty() { None } else { Some(value) };
                            },
                        }
                    }
                    Textarea {
                        class: "form-summary",
                        placeholder: "Professional summary (optional)",
                        value: draft().content.personal.summary.clone().unwrap_or_default(),
                        oninput: move |evt: FormEvent| {
                            let value = evt.value();
                            draft.write().content.personal.summary =
                                if value.is_empty() { None } else { Some(value) };
                        },
                    }

                    // Education
                    h3 { class: "form-section-title", "Education" }
                    for (i, edu) in draft().content.education.iter().enumerate() {
                        div {
                            key: "{i}",
                            class: "form-row",
                            Input {
                                placeholder: "School",
                                value: edu.school.clone(),
                                required: true,
                                oninput: move |evt: FormEvent| {
                                    draft.write().content.education[i].school = evt.value();
                                },
                            }
                            Input {
                                placeholder: "Degree",
                                value: edu.degree.clone(),
                                required: true,
                                oninput: move |evt: FormEvent| {
                                    draft.write().content.education[i].degree = evt.value();
                                },
                            }
                            Input {
                                r#type: "date",
                                placeholder: "Start Date",
                                value: edu.start_date.clone(),
                                required: true,
                                oninput: move |evt: FormEvent| {
                                    draft.write().content.education[i].start_date = evt.value();
                                },
                            }
                            Input {
                                r#type: "date",
                                placeholder: "End Date",
                                value: edu.end_date.clone(),
                                oninput: move |evt: FormEvent| {
                                    draft.write().content.education[i].end_date = evt.value();
                                },
                            }
                            Button {
                                variant: ButtonVariant::Danger,
                                disabled: !draft().can_remove_education(),
                                onclick: move |_| {
                                    draft.write().remove_education(i);
                                },
                                "Remove"
                            }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        class: "form-add",
                        onclick: move |_| draft.write().add_education(),
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        " Add Education"
                    }

                    // Experience
                    h3 { class: "form-section-title", "Experience" }
                    for (i, exp) in draft().content.experience.iter().enumerate() {
                        div {
                            key: "{i}",
                            class: "form-row",
                            Input {
                                placeholder: "Company",
                                value: exp.company.clone(),
                                required: true,
                                oninput: move |evt: FormEvent| {
                                    draft.write().content.experience[i].company = evt.value();
                                },
                            }
                            Input {
                                placeholder: "Job Title",
                                value: exp.title.clone(),
                                required: true,
                                oninput: move |evt: FormEvent| {
                                    draft.write().content.experience[i].title = evt.value();
                                },
                            }
                            Input {
                                r#type: "date",
                                placeholder: "Start Date",
                                value: exp.start_date.clone(),
                                required: true,
                                oninput: move |evt: FormEvent| {
                                    draft.write().content.experience[i].start_date = evt.value();
                                },
                            }
                            Input {
                                r#type: "date",
                                placeholder: "End Date",
                                value: exp.end_date.clone(),
                                oninput: move |evt: FormEvent| {
                                    draft.write().content.experience[i].end_date = evt.value();
                                },
                            }
                            Input {
                                placeholder: "Description",
                                value: exp.description.clone().unwrap_or_default(),
                                oninput: move |evt: FormEvent| {
                                    let value = evt.value();
                                    draft.write().content.experience[i].description =
                                        if value.is_empty() { None } else { Some(value) };
                                },
                            }
                            Button {
                                variant: ButtonVariant::Danger,
                                disabled: !draft().can_remove_experience(),
                                onclick: move |_| {
                                    draft.write().remove_experience(i);
                                },
                                "Remove"
                            }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        class: "form-add",
                        onclick: move |_| draft.write().add_experience(),
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        " Add Experience"
                    }

                    // Skills
                    h3 { class: "form-section-title", "Skills" }
                    for (i, skill) in draft().content.skills.iter().enumerate() {
                        div {
                            key: "{i}",
                            class: "form-row form-row-skill",
                            Input {
                                placeholder: "Skill",
                                value: skill.clone(),
                                oninput: move |evt: FormEvent| {
                                    draft.write().content.skills[i] = evt.value();
                                },
                            }
                            Button {
                                variant: ButtonVariant::Danger,
                                disabled: !draft().can_remove_skill(),
                                onclick: move |_| {
                                    draft.write().remove_skill(i);
                                },
                                "Remove"
                            }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        class: "form-add",
                        onclick: move |_| draft.write().add_skill(),
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        " Add Skill"
                    }

                    // Submit
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        class: "form-submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save Resume" }
                    }
                }
            }
        }
    }
}
