use api::VersionSummary;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::format_date;
use crate::icons::{FaDownload, FaEnvelope, FaEye, FaPenToSquare, FaPhone, FaTrash};
use crate::Icon;

/// One dashboard card for a resume version.
///
/// Shows the owner's name and contact fields, the server-assigned version
/// label, the creation date, and up to three skills. The four actions are
/// delegated to the dashboard through callbacks.
#[component]
pub fn ResumeCard(
    summary: VersionSummary,
    on_view: EventHandler<()>,
    on_edit: EventHandler<()>,
    on_download: EventHandler<()>,
    on_delete: EventHandler<()>,
) -> Element {
    let created = summary
        .created_at
        .as_deref()
        .map(format_date)
        .unwrap_or_default();

    rsx! {
        div {
            class: "resume-card",

            h3 { class: "resume-card-name",
                "{summary.personal.first_name} {summary.personal.last_name}"
            }

            p { class: "resume-card-contact",
                span {
                    Icon { icon: FaEnvelope, width: 12, height: 12 }
                    " {summary.personal.email}"
                }
                span {
                    Icon { icon: FaPhone, width: 12, height: 12 }
                    " {summary.personal.phone}"
                }
            }

            span { class: "resume-card-version", "Version {summary.version}" }

            if !created.is_empty() {
                p { class: "resume-card-created", "Created: {created}" }
            }

            if !summary.skills.is_empty() {
                div {
                    class: "resume-card-skills",
                    for (i, skill) in summary.skills.iter().take(3).enumerate() {
                        span { key: "{i}", class: "skill-badge", "{skill}" }
                    }
                }
            }

            div {
                class: "resume-card-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_view.call(()),
                    Icon { icon: FaEye, width: 12, height: 12 }
                    " View"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_edit.call(()),
                    Icon { icon: FaPenToSquare, width: 12, height: 12 }
                    " Edit"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_download.call(()),
                    Icon { icon: FaDownload, width: 12, height: 12 }
                    " PDF"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: move |_| on_delete.call(()),
                    Icon { icon: FaTrash, width: 12, height: 12 }
                    " Delete"
                }
            }
        }
    }
}
