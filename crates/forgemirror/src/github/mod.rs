//! GitHub API client for listing a user's public repositories.
//!
//! # Module Structure
//!
//! - [`error`] - Error types for GitHub API operations
//! - [`types`] - Repository model decoded from the listing endpoint
//! - [`client`] - Client creation and paginated listing
//!
//! ```ignore
//! use forgemirror::github::{GitHubClient, GITHUB_API_HOST};
//! use forgemirror::http::reqwest_transport::TransportOptions;
//!
//! let client = GitHubClient::new(GITHUB_API_HOST, None, TransportOptions::default())?;
//! let repos = client.list_user_repos("octocat", None).await?;
//! ```

mod client;
mod error;
mod types;

pub use client::{GITHUB_API_HOST, GitHubClient, PAGE_SIZE};
pub use error::GitHubError;
pub use types::GitHubRepo;
