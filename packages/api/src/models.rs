//! # Wire models for resumes and their versions
//!
//! The shapes the backend reads and writes, named exactly as they appear in
//! JSON (`camelCase` field names, `_id` for the resume id). These types are
//! the schema boundary: if a response doesn't parse into them, the client
//! reports a malformed response instead of guessing.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Resume`] | One full resume snapshot: id, server-assigned version, creation time, the four editable sections, and the read-only project list. |
//! | [`ResumeContent`] | The four sections a user edits (personal, education, experience, skills). Also the request body for create and update. |
//! | [`VersionSummary`] | The dashboard's per-version card data: ids plus enough personal/skill fields to render a card without fetching the full resume. |
//!
//! Identity fields are required — a version summary without a `resumeId` is a
//! backend bug worth surfacing. Section lists default to empty because an
//! absent list *means* empty (the viewer omits the section either way), and
//! per-entry optional fields (`address`, `summary`, `description`, end dates)
//! stay optional all the way to the render.

use serde::{Deserialize, Serialize};

/// Contact block of a resume.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// One education row.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

/// One experience row. An empty `end_date` renders as "Present".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub company: String,
    pub title: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One project row. Read-only in this client: rendered by the viewer, never
/// created or edited here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// The four user-editable sections. Serialized as-is for both
/// `POST /api/resume/create` and `PUT /api/resume/update/{resumeId}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeContent {
    pub personal: PersonalInfo,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// A full resume snapshot as returned by `GET /api/resume/current/{resumeId}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    #[serde(rename = "_id")]
    pub id: String,
    /// Positive, unique per resume, assigned by the backend — never computed
    /// here.
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub content: ResumeContent,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
}

/// One entry of `GET /api/resume/versions/{userId}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionSummary {
    pub resume_id: String,
    pub version: u32,
    pub personal: PersonalInfo,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Drop exactly one `(resumeId, version)` pair from a version list, keeping
/// the relative order of everything else. Used by the dashboard after a
/// successful delete instead of refetching.
pub fn remove_version(versions: &mut Vec<VersionSummary>, resume_id: &str, version: u32) {
    versions.retain(|v| !(v.resume_id == resume_id && v.version == version));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(resume_id: &str, version: u32) -> VersionSummary {
        VersionSummary {
            resume_id: resume_id.to_string(),
            version,
            personal: PersonalInfo {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                phone: "555-0100".to_string(),
                address: None,
                summary: None,
            },
            skills: vec!["Rust".to_string()],
            created_at: None,
        }
    }

    #[test]
    fn test_resume_parses_with_absent_sections() {
        // An absent list means an empty section; the viewer omits it.
        let json = r#"{
            "_id": "r1",
            "version": 2,
            "personal": {
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com",
                "phone": "555-0100"
            }
        }"#;

        let resume: Resume = serde_json::from_str(json).unwrap();
        assert_eq!(resume.id, "r1");
        assert_eq!(resume.version, 2);
        assert!(resume.content.education.is_empty());
        assert!(resume.content.experience.is_empty());
        assert!(resume.content.skills.is_empty());
        assert!(resume.projects.is_empty());
        assert!(resume.content.personal.address.is_none());
    }

    #[test]
    fn test_resume_requires_identity_fields() {
        // Identity is not defaultable; a resume without an id is malformed.
        let json = r#"{"version": 1, "personal": {"firstName": "A", "lastName": "B", "email": "a@b.c", "phone": "1"}}"#;
        assert!(serde_json::from_str::<Resume>(json).is_err());

        let json = r#"{"_id": "r1", "version": 1, "personal": {"firstName": "A"}}"#;
        assert!(serde_json::from_str::<Resume>(json).is_err());
    }

    #[test]
    fn test_content_round_trips_through_resume_schema() {
        // What the creator submits is exactly what the editor gets back:
        // no client-side transformation or loss for supported fields.
        let content = ResumeContent {
            personal: PersonalInfo {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                phone: "555-0100".to_string(),
                address: Some("12 Analytical Row".to_string()),
                summary: Some("Engine programmer".to_string()),
            },
            education: vec![EducationEntry {
                school: "University of London".to_string(),
                degree: "Mathematics".to_string(),
                start_date: "1835-09-01".to_string(),
                end_date: "1839-06-30".to_string(),
            }],
            experience: vec![ExperienceEntry {
                company: "Analytical Engines Ltd".to_string(),
                title: "Programmer".to_string(),
                start_date: "1842-01-01".to_string(),
                end_date: String::new(),
                description: Some("Wrote the first published program.".to_string()),
            }],
            skills: vec!["Mathematics".to_string(), "Punched cards".to_string()],
        };

        // Simulate the backend storing the draft and serving it back.
        let mut stored = serde_json::to_value(&content).unwrap();
        stored["_id"] = serde_json::json!("r1");
        stored["version"] = serde_json::json!(1);

        let fetched: Resume = serde_json::from_value(stored).unwrap();
        assert_eq!(fetched.content, content);
    }

    #[test]
    fn test_remove_version_drops_only_the_target() {
        let mut versions = vec![summary("r1", 1), summary("r1", 2), summary("r2", 1)];

        remove_version(&mut versions, "r1", 1);

        assert_eq!(versions.len(), 2);
        assert_eq!((versions[0].resume_id.as_str(), versions[0].version), ("r1", 2));
        assert_eq!((versions[1].resume_id.as_str(), versions[1].version), ("r2", 1));
    }

    #[test]
    fn test_remove_version_ignores_unknown_pair() {
        let mut versions = vec![summary("r1", 1)];
        remove_version(&mut versions, "r1", 9);
        assert_eq!(versions.len(), 1);
    }
}
