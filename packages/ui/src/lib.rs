//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session_ctx;
pub use session_ctx::{sign_in, sign_out, use_session, SessionProvider, SessionState};

mod client;
pub use client::{make_client, make_client_for, make_session};

mod toast;
pub use toast::{use_toast, ToastApi, ToastLevel, ToastProvider};

mod confirm;
pub use confirm::ConfirmDialog;

mod resume_card;
pub use resume_card::ResumeCard;

mod draft;
pub use draft::ResumeDraft;

mod view_state;
pub use view_state::ViewState;

mod download;
pub use download::{open_in_new_tab, pdf_filename, save_pdf};

mod format;
pub use format::format_date;
