//! GitHub API client creation and paginated listing.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::error::GitHubError;
use super::types::GitHubRepo;
use crate::http::reqwest_transport::{ReqwestTransport, TransportOptions};
use crate::http::{HttpHeaders, HttpMethod, HttpRequest, HttpTransport};
use crate::migrate::{MigrationProgress, ProgressCallback, emit};
use crate::platform::SourceLister;

/// Public GitHub REST API host.
pub const GITHUB_API_HOST: &str = "https://api.github.com";

/// Repositories requested per page. A shorter page marks the end of the listing.
pub const PAGE_SIZE: usize = 50;

/// GitHub API client.
///
/// Anonymous access is enough for public listings; a token only raises the
/// rate limit.
#[derive(Clone)]
pub struct GitHubClient {
    transport: Arc<dyn HttpTransport>,
    api_host: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Create a new GitHub client.
    ///
    /// # Arguments
    ///
    /// * `api_host` - REST API root (e.g., "https://api.github.com")
    /// * `token` - Optional personal access token; empty strings are ignored
    /// * `options` - Transport settings
    pub fn new(
        api_host: &str,
        token: Option<&str>,
        options: TransportOptions,
    ) -> Result<Self, GitHubError> {
        let transport = ReqwestTransport::with_options(options)
            .map_err(|e| GitHubError::Config(e.to_string()))?;

        Ok(Self::new_with_transport(api_host, token, Arc::new(transport)))
    }

    pub fn new_with_transport(
        api_host: &str,
        token: Option<&str>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            transport,
            api_host: api_host.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()).map(str::to_string),
        }
    }

    /// Get the API host URL.
    pub fn api_host(&self) -> &str {
        &self.api_host
    }

    fn headers(&self) -> HttpHeaders {
        let mut headers = vec![
            (
                "Accept".to_string(),
                "application/vnd.github+json".to_string(),
            ),
            ("User-Agent".to_string(), "forgemirror".to_string()),
        ];
        if let Some(ref token) = self.token {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        headers
    }

    /// Make a GET request, treating anything but 200 as an error.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, GitHubError> {
        let url = format!("{}{}", self.api_host, path);
        tracing::debug!(url = %url, "GET");

        let request = HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: self.headers(),
            body: Vec::new(),
        };

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| GitHubError::Http(e.to_string()))?;

        if response.status != 200 {
            return Err(GitHubError::Api {
                status: response.status,
                message: response.status_text(),
            });
        }

        serde_json::from_slice(&response.body).map_err(GitHubError::Json)
    }

    /// List all public repositories owned by `username`.
    ///
    /// Pages are requested one at a time until a page comes back with fewer
    /// than [`PAGE_SIZE`] entries. Any failure discards what was fetched.
    pub async fn list_user_repos(
        &self,
        username: &str,
        on_progress: Option<&ProgressCallback>,
    ) -> Result<Vec<GitHubRepo>, GitHubError> {
        emit(
            on_progress,
            MigrationProgress::FetchingSource {
                owner: username.to_string(),
            },
        );

        let mut all_repos = Vec::new();
        let mut page = 1u32;

        loop {
            let repos: Vec<GitHubRepo> = self
                .get(&format!(
                    "/users/{}/repos?page={}&per_page={}",
                    username, page, PAGE_SIZE
                ))
                .await?;

            let count = repos.len();
            all_repos.extend(repos);

            emit(
                on_progress,
                MigrationProgress::FetchedSourcePage {
                    owner: username.to_string(),
                    page,
                    count,
                    total_so_far: all_repos.len(),
                },
            );

            if count < PAGE_SIZE {
                break;
            }

            page += 1;
        }

        emit(
            on_progress,
            MigrationProgress::FetchedSource {
                owner: username.to_string(),
                total: all_repos.len(),
            },
        );

        Ok(all_repos)
    }
}

#[async_trait]
impl SourceLister for GitHubClient {
    async fn list_repos(
        &self,
        owner: &str,
        on_progress: Option<&ProgressCallback>,
    ) -> Result<Vec<GitHubRepo>, GitHubError> {
        self.list_user_repos(owner, on_progress).await
    }
}
