//! Traits at the seam between the migration pipeline and the forge clients.
//!
//! [`GitHubClient`](crate::github::GitHubClient) implements [`SourceLister`]
//! and [`GiteaClient`](crate::gitea::GiteaClient) implements
//! [`MirrorDestination`]. The pipeline in [`crate::migrate`] only sees the
//! traits, so tests can drive it with in-memory fakes.

use async_trait::async_trait;

use crate::gitea::{GiteaError, GiteaRepo};
use crate::github::{GitHubError, GitHubRepo};
use crate::migrate::ProgressCallback;

/// Where repositories are copied from.
#[async_trait]
pub trait SourceLister: Send + Sync {
    /// List every repository owned by `owner`, handling pagination internally.
    async fn list_repos(
        &self,
        owner: &str,
        on_progress: Option<&ProgressCallback>,
    ) -> Result<Vec<GitHubRepo>, GitHubError>;
}

/// Where mirrors are created.
#[async_trait]
pub trait MirrorDestination: Send + Sync {
    /// List the repositories the authenticated user already owns.
    async fn list_repos(&self) -> Result<Vec<GiteaRepo>, GiteaError>;

    /// Create a mirror of `repo`.
    async fn migrate(&self, repo: &GitHubRepo) -> Result<(), GiteaError>;
}
