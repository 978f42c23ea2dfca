use thiserror::Error;

/// Failure surface of the REST client.
///
/// `Display` for [`ApiError::Api`] is the server-supplied message alone, so
/// views can show `err.to_string()` directly the way they show any other
/// status line.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never completed (DNS, refused connection, aborted fetch).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered 2xx but the body does not match the endpoint's
    /// schema.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Api { status: 404, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}
