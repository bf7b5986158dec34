//! Gitea API client creation and management.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;

use super::error::GiteaError;
use super::types::{GiteaAuthUser, GiteaRepo, MigrateRepoOptions};
use crate::github::GitHubRepo;
use crate::http::reqwest_transport::{ReqwestTransport, TransportOptions};
use crate::http::{HttpHeaders, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::platform::MirrorDestination;

/// Gitea API client.
///
/// The authenticated user's id is looked up on first use and shared by all
/// clones of the client.
#[derive(Clone)]
pub struct GiteaClient {
    transport: Arc<dyn HttpTransport>,
    host: String,
    token: String,
    user_id: Arc<OnceCell<i64>>,
}

impl GiteaClient {
    /// Create a new Gitea client.
    ///
    /// # Arguments
    ///
    /// * `host` - Gitea base URL (e.g., "https://git.example.com")
    /// * `token` - Access token; when empty, requests are sent without an
    ///   `Authorization` header
    /// * `options` - Transport settings, including whether to skip TLS
    ///   certificate validation
    pub fn new(host: &str, token: &str, options: TransportOptions) -> Result<Self, GiteaError> {
        let transport =
            ReqwestTransport::with_options(options).map_err(|e| GiteaError::Config(e.to_string()))?;

        Ok(Self::new_with_transport(host, token, Arc::new(transport)))
    }

    pub fn new_with_transport(host: &str, token: &str, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            host: host.trim_end_matches('/').to_string(),
            token: token.to_string(),
            user_id: Arc::new(OnceCell::new()),
        }
    }

    /// Get the host URL.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The memoized user id, if it has been resolved.
    pub fn cached_user_id(&self) -> Option<i64> {
        self.user_id.get().copied()
    }

    fn headers(&self) -> HttpHeaders {
        let mut headers = vec![
            ("Accept".to_string(), "application/json".to_string()),
            ("User-Agent".to_string(), "forgemirror".to_string()),
        ];
        if !self.token.is_empty() {
            headers.push(("Authorization".to_string(), format!("token {}", self.token)));
        }
        headers
    }

    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        headers: HttpHeaders,
        body: Vec<u8>,
    ) -> Result<HttpResponse, GiteaError> {
        let url = format!("{}/api/v1{}", self.host, path);
        tracing::debug!(method = method.as_str(), url = %url, "Gitea request");

        let request = HttpRequest {
            method,
            url,
            headers,
            body,
        };

        self.transport
            .send(request)
            .await
            .map_err(|e| GiteaError::Http(e.to_string()))
    }

    /// Make an authenticated GET request, treating anything but 200 as an error.
    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, GiteaError> {
        let response = self
            .send(HttpMethod::Get, path, self.headers(), Vec::new())
            .await?;

        if response.status != 200 {
            return Err(GiteaError::Api {
                status: response.status,
                message: response.status_text(),
            });
        }

        serde_json::from_slice(&response.body).map_err(GiteaError::Json)
    }

    /// List the repositories owned by the authenticated user.
    pub async fn list_user_repos(&self) -> Result<Vec<GiteaRepo>, GiteaError> {
        let repos: Vec<GiteaRepo> = self.get("/user/repos").await?;
        tracing::debug!(count = repos.len(), "Fetched destination repositories");
        Ok(repos)
    }

    /// Get information about the authenticated user.
    pub async fn get_user_info(&self) -> Result<GiteaAuthUser, GiteaError> {
        self.get("/user").await
    }

    /// Resolve the authenticated user's numeric id.
    ///
    /// Only the first successful call hits the network; later calls return
    /// the memoized id. A failed lookup is not cached.
    pub async fn resolve_user_id(&self) -> Result<i64, GiteaError> {
        let id = self
            .user_id
            .get_or_try_init(|| async {
                let user = self.get_user_info().await?;
                tracing::debug!(login = %user.login, id = user.id, "Resolved destination user");
                Ok::<_, GiteaError>(user.id)
            })
            .await?;
        Ok(*id)
    }

    /// Ask the server to create a mirror of `repo` owned by the authenticated user.
    ///
    /// Succeeds only on 201 Created.
    pub async fn migrate_repo(&self, repo: &GitHubRepo) -> Result<(), GiteaError> {
        let uid = self.resolve_user_id().await?;

        let options = MigrateRepoOptions {
            clone_addr: &repo.url,
            description: &repo.description,
            mirror: true,
            repo_name: &repo.name,
            uid,
        };
        let body = serde_json::to_vec(&options)?;

        let mut headers = self.headers();
        headers.push(("Content-Type".to_string(), "application/json".to_string()));

        let response = self
            .send(HttpMethod::Post, "/repos/migrate", headers, body)
            .await?;

        if response.status != 201 {
            tracing::debug!(
                repo = %repo.name,
                status = response.status,
                body = %String::from_utf8_lossy(&response.body),
                "Migration rejected"
            );
            return Err(GiteaError::MigrationRejected {
                repo: repo.name.clone(),
                status: response.status,
                message: response.status_text(),
            });
        }

        tracing::info!(repo = %repo.name, clone_addr = %repo.url, "Created mirror");
        Ok(())
    }
}

#[async_trait]
impl MirrorDestination for GiteaClient {
    async fn list_repos(&self) -> Result<Vec<GiteaRepo>, GiteaError> {
        self.list_user_repos().await
    }

    async fn migrate(&self, repo: &GitHubRepo) -> Result<(), GiteaError> {
        self.migrate_repo(repo).await
    }
}
