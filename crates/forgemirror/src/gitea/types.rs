//! Gitea API data types.

use serde::{Deserialize, Serialize};

use crate::de::null_as_default;

/// Gitea repository - fields we need from `GET /user/repos`.
///
/// API docs: https://docs.gitea.com/api/1.20/#tag/user/operation/userCurrentListRepos
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GiteaRepo {
    /// Repository name.
    pub name: String,
    /// Repository description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Whether the repository is a mirror.
    #[serde(default)]
    pub mirror: bool,
}

/// Gitea user (authenticated user endpoint response).
#[derive(Debug, Clone, Deserialize)]
pub struct GiteaAuthUser {
    /// User ID.
    pub id: i64,
    /// Username/login.
    #[serde(default)]
    pub login: String,
}

/// Body of `POST /repos/migrate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrateRepoOptions<'a> {
    /// URL the destination clones from.
    pub clone_addr: &'a str,
    pub description: &'a str,
    /// Always true: the destination keeps pulling from the source.
    pub mirror: bool,
    pub repo_name: &'a str,
    /// Owner of the new repository.
    pub uid: i64,
}
