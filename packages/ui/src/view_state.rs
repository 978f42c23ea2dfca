//! Per-view fetch lifecycle shared by the data-bearing views.
//!
//! Entered once per mount: `Loading` until the single fetch resolves, then
//! one of the terminal render states. There is no retry and no transition
//! back to `Loading`.

use api::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Loaded(T),
    NotFound,
    Error(String),
}

impl<T> ViewState<T> {
    /// Classify a primary-data fetch result.
    ///
    /// Transport failures and backend rejections both land on `NotFound` —
    /// the page's data is unavailable either way and nothing is retried. A
    /// schema mismatch is the one failure kept distinct: the page *was*
    /// served, the payload is wrong, and hiding that behind "not found"
    /// would bury a backend contract break.
    pub fn from_fetch(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => ViewState::Loaded(value),
            Err(ApiError::Malformed(message)) => {
                tracing::error!("malformed response: {message}");
                ViewState::Error(message)
            }
            Err(err) => {
                tracing::warn!("fetch failed: {err}");
                ViewState::NotFound
            }
        }
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_is_loaded() {
        let state = ViewState::from_fetch(Ok(7));
        assert_eq!(state.loaded(), Some(&7));
    }

    #[test]
    fn test_network_failure_renders_not_found() {
        // A failed mount fetch shows "not found" and never retries.
        let state: ViewState<u32> =
            ViewState::from_fetch(Err(ApiError::Network("connection refused".to_string())));
        assert_eq!(state, ViewState::NotFound);
    }

    #[test]
    fn test_backend_rejection_renders_not_found() {
        let state: ViewState<u32> = ViewState::from_fetch(Err(ApiError::Api {
            status: 404,
            message: "no such resume".to_string(),
        }));
        assert_eq!(state, ViewState::NotFound);
    }

    #[test]
    fn test_schema_mismatch_is_surfaced() {
        let state: ViewState<u32> =
            ViewState::from_fetch(Err(ApiError::Malformed("missing field `data`".to_string())));
        assert_eq!(state, ViewState::Error("missing field `data`".to_string()));
    }
}
