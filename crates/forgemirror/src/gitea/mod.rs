//! Gitea API client for the mirror destination.
//!
//! Works against Gitea, Forgejo and Gogs, which share the `/api/v1` surface
//! used here: listing the authenticated user's repositories, looking up the
//! user's numeric id, and creating mirror migrations.
//!
//! # Module Structure
//!
//! - [`error`] - Error types for Gitea API operations
//! - [`types`] - Repository, user and migration request models
//! - [`client`] - Client creation and API calls
//!
//! ```ignore
//! use forgemirror::gitea::GiteaClient;
//! use forgemirror::http::reqwest_transport::TransportOptions;
//!
//! let client = GiteaClient::new("https://git.example.com", "token", TransportOptions::default())?;
//! let existing = client.list_user_repos().await?;
//! ```

mod client;
mod error;
mod types;

pub use client::GiteaClient;
pub use error::GiteaError;
pub use types::{GiteaAuthUser, GiteaRepo, MigrateRepoOptions};
