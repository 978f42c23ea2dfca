//! # ApiClient — one method per backend endpoint
//!
//! A thin, typed wrapper over `reqwest`. Construction decides the auth mode:
//! [`ApiClient::new`] for the anonymous auth endpoints, [`ApiClient::with_token`]
//! for everything else — the bearer token is attached to every request the
//! client sends, so call sites cannot forget it.
//!
//! Every method follows the same shape: build the URL, send, check the
//! status (extracting the server's `{message}` on failure), then parse the
//! body against the endpoint's schema.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::{Resume, ResumeContent, VersionSummary};

/// Signup form payload.
///
/// `confirm_password` is submitted verbatim; whether it matches `password`
/// is checked by the backend only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub mobile_no: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Login form payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token and identity snapshot returned by a successful login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user_id: String,
    pub email: String,
    pub name: String,
}

/// `{message}` body used by signup responses and by error payloads.
#[derive(Debug, Default, Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: String,
}

/// `GET /api/resume/versions/{userId}` envelope. The field is required:
/// a response without it is malformed, not an empty dashboard.
#[derive(Debug, Deserialize)]
struct VersionsResponse {
    #[serde(rename = "ResumeVersions")]
    resume_versions: Vec<VersionSummary>,
}

/// `GET /api/resume/current/{resumeId}` envelope.
#[derive(Debug, Deserialize)]
struct ResumeEnvelope {
    data: Resume,
}

/// Typed REST client over the resume backend.
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
    token: Option<String>,
}

impl ApiClient {
    /// Anonymous client for the signup/login endpoints.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into(),
            token: None,
        }
    }

    /// Authenticated client; attaches `token` as a bearer credential to every
    /// request.
    pub fn with_token(base: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into(),
            token: Some(token.into()),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// `POST /api/auth/signup`. Returns the server's confirmation message.
    pub async fn signup(&self, request: &SignupRequest) -> Result<String, ApiError> {
        let response = self
            .http
            .post(self.url("/api/auth/signup"))
            .json(request)
            .send()
            .await?;
        let response = check_status(response).await?;
        let body: MessageBody = json_body(response).await.unwrap_or_default();
        if body.message.is_empty() {
            Ok("Signup successful".to_string())
        } else {
            Ok(body.message)
        }
    }

    /// `POST /api/auth/login`.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(request)
            .send()
            .await?;
        json_body(check_status(response).await?).await
    }

    /// `GET /api/resume/versions/{userId}` — version summaries for the
    /// dashboard.
    pub async fn list_versions(&self, user_id: &str) -> Result<Vec<VersionSummary>, ApiError> {
        let response = self
            .authed(self.http.get(self.url(&format!("/api/resume/versions/{user_id}"))))
            .send()
            .await?;
        let body: VersionsResponse = json_body(check_status(response).await?).await?;
        Ok(body.resume_versions)
    }

    /// `GET /api/resume/current/{resumeId}` — the current snapshot, or one
    /// specific version when `version` is given.
    pub async fn fetch_current(
        &self,
        resume_id: &str,
        version: Option<u32>,
    ) -> Result<Resume, ApiError> {
        let mut request = self
            .authed(self.http.get(self.url(&format!("/api/resume/current/{resume_id}"))));
        if let Some(version) = version {
            request = request.query(&[("version", version)]);
        }
        let body: ResumeEnvelope = json_body(check_status(request.send().await?).await?).await?;
        Ok(body.data)
    }

    /// `POST /api/resume/create`.
    pub async fn create_resume(&self, content: &ResumeContent) -> Result<(), ApiError> {
        let response = self
            .authed(self.http.post(self.url("/api/resume/create")))
            .json(content)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// `PUT /api/resume/update/{resumeId}` — replaces the four editable
    /// sections.
    pub async fn update_resume(
        &self,
        resume_id: &str,
        content: &ResumeContent,
    ) -> Result<(), ApiError> {
        let response = self
            .authed(self.http.put(self.url(&format!("/api/resume/update/{resume_id}"))))
            .json(content)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// `DELETE /api/resume/delete/{resumeId}/{version}` — removes one
    /// version.
    pub async fn delete_version(&self, resume_id: &str, version: u32) -> Result<(), ApiError> {
        let response = self
            .authed(
                self.http
                    .delete(self.url(&format!("/api/resume/delete/{resume_id}/{version}"))),
            )
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// `GET /api/resume/download/{resumeId}/{version}` — the rendered PDF.
    pub async fn download_pdf(&self, resume_id: &str, version: u32) -> Result<Vec<u8>, ApiError> {
        let response = self
            .authed(self.http.get(self.download_url(resume_id, version)))
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Absolute URL of the PDF endpoint, for opening in a new browsing
    /// context.
    pub fn download_url(&self, resume_id: &str, version: u32) -> String {
        self.url(&format!("/api/resume/download/{resume_id}/{version}"))
    }
}

/// Map a non-success status to [`ApiError::Api`], extracting the server's
/// `{message}` when the error body carries one.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = match response.json::<MessageBody>().await {
        Ok(body) if !body.message.is_empty() => body.message,
        _ => format!("request failed with status {}", status.as_u16()),
    };
    tracing::warn!(status = status.as_u16(), "api request failed: {message}");
    Err(ApiError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Parse a 2xx body against `T`; a mismatch is a malformed response.
async fn json_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|err| ApiError::Malformed(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_url_embeds_resume_and_version() {
        let client = ApiClient::new("http://localhost:5000");
        assert_eq!(
            client.download_url("r1", 3),
            "http://localhost:5000/api/resume/download/r1/3"
        );
    }

    #[test]
    fn test_signup_payload_submits_both_password_fields() {
        // No client-side mismatch check: differing values are sent as-is and
        // the backend is the sole judge.
        let request = SignupRequest {
            name: "Ada Lovelace".to_string(),
            mobile_no: "555-0100".to_string(),
            email: "ada@example.com".to_string(),
            password: "engine-no-1".to_string(),
            confirm_password: "engine-no-2".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["password"], "engine-no-1");
        assert_eq!(value["confirmPassword"], "engine-no-2");
        assert_eq!(value["mobileNo"], "555-0100");
    }

    #[test]
    fn test_login_response_parses_identity_fields() {
        let json = r#"{"token":"tok-1","userId":"u1","email":"ada@example.com","name":"Ada"}"#;
        let parsed: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.token, "tok-1");
        assert_eq!(parsed.user_id, "u1");
    }

    #[test]
    fn test_versions_envelope_parses_summaries() {
        let json = r#"{"ResumeVersions": [
            {"resumeId":"r1","version":1,"personal":{"firstName":"Ada","lastName":"Lovelace","email":"ada@example.com","phone":"555-0100"}},
            {"resumeId":"r1","version":2,"personal":{"firstName":"Ada","lastName":"Lovelace","email":"ada@example.com","phone":"555-0100"}}
        ]}"#;

        let parsed: VersionsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.resume_versions.len(), 2);
        assert_eq!(parsed.resume_versions[0].version, 1);
        assert_eq!(parsed.resume_versions[1].version, 2);
        assert_eq!(parsed.resume_versions[1].resume_id, "r1");
    }

    #[test]
    fn test_versions_envelope_without_list_is_an_error() {
        // A missing list must surface as a schema mismatch, not as an empty
        // dashboard.
        assert!(serde_json::from_str::<VersionsResponse>("{}").is_err());
        assert!(serde_json::from_str::<VersionsResponse>(r#"{"versions": []}"#).is_err());
    }

    #[test]
    fn test_message_body_tolerates_missing_message() {
        let body: MessageBody = serde_json::from_str("{}").unwrap();
        assert!(body.message.is_empty());

        let body: MessageBody = serde_json::from_str(r#"{"message":"User created"}"#).unwrap();
        assert_eq!(body.message, "User created");
    }
}
