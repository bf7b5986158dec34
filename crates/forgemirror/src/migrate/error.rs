//! Error type for a migration run.

use thiserror::Error;

use crate::gitea::GiteaError;
use crate::github::GitHubError;

/// Any failure that aborts a migration run.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// Listing the source repositories failed.
    #[error(transparent)]
    Source(#[from] GitHubError),

    /// A destination call failed.
    #[error(transparent)]
    Destination(#[from] GiteaError),
}
