//! Error types for Gitea API operations.

use thiserror::Error;

/// Errors that can occur when interacting with the Gitea API.
#[derive(Debug, Error)]
pub enum GiteaError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an unexpected status. `message` is the status text.
    #[error("API error: {message}")]
    Api { status: u16, message: String },

    /// The migration endpoint did not answer 201 Created.
    #[error("Migrating {repo} failed: {message}")]
    MigrationRejected {
        repo: String,
        status: u16,
        message: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl GiteaError {
    /// HTTP status of the failed response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            GiteaError::Api { status, .. } | GiteaError::MigrationRejected { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Whether the server rejected the token.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message() {
        let err = GiteaError::Api {
            status: 401,
            message: "401 Unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 401 Unauthorized");
        assert!(err.is_auth_error());
    }

    #[test]
    fn test_migration_rejected_names_repo() {
        let err = GiteaError::MigrationRejected {
            repo: "dotfiles".to_string(),
            status: 409,
            message: "409 Conflict".to_string(),
        };
        assert_eq!(err.to_string(), "Migrating dotfiles failed: 409 Conflict");
        assert_eq!(err.status(), Some(409));
        assert!(!err.is_auth_error());
    }

    #[test]
    fn test_transport_error_has_no_status() {
        let err = GiteaError::Http("timed out".to_string());
        assert_eq!(err.status(), None);
        assert!(!err.is_auth_error());
    }
}
