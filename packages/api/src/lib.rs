//! # API crate — typed REST client for the resume backend
//!
//! Every frontend view talks to the backend through this crate. It owns the
//! endpoint paths, the request/response schemas, and the error surface; no
//! view ever touches a raw URL or an untyped JSON value.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] — one method per backend endpoint, bearer-token attachment, status/schema checking |
//! | [`models`] | Resume, section entries, and version summaries as they appear on the wire |
//! | [`error`] | [`ApiError`] — transport, HTTP-status, and malformed-response failures |
//!
//! ## Response validation
//!
//! Responses are deserialized against explicit schemas. A body that does not
//! match its schema is an [`ApiError::Malformed`], never a silently-empty
//! collection — the dashboard either shows the user's versions or says why it
//! can't.

pub mod client;
pub mod error;
pub mod models;

pub use client::{ApiClient, LoginRequest, LoginResponse, SignupRequest};
pub use error::ApiError;
pub use models::{
    remove_version, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, Resume,
    ResumeContent, VersionSummary,
};

const DEV_API_URL: &str = "http://localhost:5000";
const PROD_API_URL: &str = "https://api.resumebuilder.app";

/// Base origin of the backend, chosen at build time.
///
/// Debug builds target the development origin, release builds the production
/// one; either can be overridden through the `RESUME_API_DEV_URL` /
/// `RESUME_API_PROD_URL` compile-time environment variables.
pub fn base_url() -> &'static str {
    if cfg!(debug_assertions) {
        option_env!("RESUME_API_DEV_URL").unwrap_or(DEV_API_URL)
    } else {
        option_env!("RESUME_API_PROD_URL").unwrap_or(PROD_API_URL)
    }
}
