//! GitHub API error types.

use thiserror::Error;

/// Errors that can occur when interacting with the GitHub API.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// The request never produced a response.
    #[error("GitHub request failed: {0}")]
    Http(String),

    /// API returned a non-200 response. `message` is the status text.
    #[error("GitHub API error: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON.
    #[error("GitHub JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Client could not be constructed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl GitHubError {
    /// HTTP status of the failed response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            GitHubError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_status_text() {
        let err = GitHubError::Api {
            status: 404,
            message: "404 Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "GitHub API error: 404 Not Found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_transport_error_has_no_status() {
        let err = GitHubError::Http("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
        assert_eq!(err.status(), None);
    }
}
