//! GitHub API data types.

use serde::Deserialize;

use crate::de::null_as_default;

/// A repository as returned by `GET /users/{username}/repos`.
///
/// Only the fields needed for migration are decoded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GitHubRepo {
    /// Repository name, unique per owner.
    pub name: String,
    /// Web URL of the repository, used as the clone address.
    #[serde(rename = "html_url")]
    pub url: String,
    /// Repository description (empty when GitHub returns `null`).
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Whether the repository is a fork.
    #[serde(default)]
    pub fork: bool,
}
