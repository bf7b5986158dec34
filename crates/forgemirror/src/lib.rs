//! forgemirror - mirror a GitHub user's repositories into a Gitea instance.
//!
//! The library lists a user's public GitHub repositories, compares them with
//! the repositories the authenticated Gitea user already owns, and asks Gitea
//! to create a pull mirror for every repository that is missing.
//!
//! Repositories are sorted into three buckets (see [`reconcile`]):
//!
//! - no repository of that name on Gitea: migrated
//! - a mirror of that name exists: already migrated, skipped
//! - a non-mirror repository of that name exists: conflict, skipped
//!
//! # Example
//!
//! ```ignore
//! use forgemirror::gitea::GiteaClient;
//! use forgemirror::github::{GITHUB_API_HOST, GitHubClient};
//! use forgemirror::http::reqwest_transport::TransportOptions;
//! use forgemirror::migrate::{MigrationOptions, run_migration};
//!
//! let github = GitHubClient::new(GITHUB_API_HOST, None, TransportOptions::default())?;
//! let gitea = GiteaClient::new("https://git.example.com", "token", TransportOptions::default())?;
//! let options = MigrationOptions::default();
//! let summary = run_migration(&github, &gitea, "octocat", &options, None).await?;
//! ```

mod de;

pub mod gitea;
pub mod github;
pub mod http;
pub mod migrate;
pub mod platform;
pub mod reconcile;

pub use migrate::{MigrationError, MigrationOptions, MigrationSummary, run_migration};
pub use platform::{MirrorDestination, SourceLister};
pub use reconcile::{Reconciliation, reconcile};
