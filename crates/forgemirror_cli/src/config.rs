//! Configuration file support for forgemirror.
//!
//! Configuration is loaded with the following precedence (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (prefixed with `FORGEMIRROR_`, e.g., `FORGEMIRROR_GITEA_TOKEN`),
//!    including a `.env` file in the current directory
//! 3. Local config file (./forgemirror.toml)
//! 4. XDG config file (~/.config/forgemirror/config.toml)
//! 5. Built-in defaults
//!
//! Example config file:
//! ```toml
//! [github]
//! api = "https://api.github.com"  # GitHub Enterprise: https://ghe.example.com/api/v3
//! token = "ghp_..."               # optional, raises the API rate limit
//!
//! [gitea]
//! token = "..."       # or use FORGEMIRROR_GITEA_TOKEN env var
//! insecure = false    # skip TLS certificate validation for the Gitea host
//!
//! [http]
//! timeout = 30        # seconds (`timeout_secs` is accepted too)
//! ```

use std::path::PathBuf;

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use console::{Term, style};
use directories::ProjectDirs;
use forgemirror::github::GITHUB_API_HOST;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Source (GitHub) configuration.
    pub github: GitHubConfig,
    /// Destination (Gitea) configuration.
    pub gitea: GiteaConfig,
    /// HTTP client settings.
    pub http: HttpConfig,
}

/// GitHub configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// REST API root. Defaults to the public GitHub API.
    pub api: Option<String>,
    /// GitHub API token.
    /// Can also be set via FORGEMIRROR_GITHUB_TOKEN environment variable.
    pub token: Option<String>,
}

/// Gitea configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GiteaConfig {
    /// Gitea API token (personal access token).
    /// Can also be set via FORGEMIRROR_GITEA_TOKEN environment variable.
    pub token: Option<String>,
    /// Skip TLS certificate validation for the Gitea host.
    pub insecure: bool,
}

/// HTTP client settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout in seconds.
    #[serde(alias = "timeout_secs")]
    pub timeout: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout: 30 }
    }
}

impl Config {
    /// Load configuration from the default file locations and the environment.
    pub fn load() -> Self {
        let mut files = Vec::new();
        if let Some(path) = Self::default_config_path() {
            files.push(path);
        }
        files.push(PathBuf::from("forgemirror.toml"));

        Self::load_from(&files, Some("FORGEMIRROR"))
    }

    /// Load configuration from `files` (later files override earlier ones),
    /// then environment variables with `env_prefix` if given.
    ///
    /// Errors are reported and fall back to defaults.
    pub fn load_from(files: &[PathBuf], env_prefix: Option<&str>) -> Self {
        match Self::try_load_from(files, env_prefix) {
            Ok(config) => config,
            Err(e) => {
                report_invalid_config(&e);
                Config::default()
            }
        }
    }

    /// Like [`Config::load_from`], but returns the error instead of falling back.
    pub fn try_load_from(
        files: &[PathBuf],
        env_prefix: Option<&str>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = ConfigBuilder::builder();

        for path in files {
            if path.exists() {
                tracing::debug!("Loading config from {:?}", path);
                builder = builder.add_source(
                    File::from(path.clone())
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        // e.g., FORGEMIRROR_GITEA_TOKEN -> gitea.token
        if let Some(prefix) = env_prefix {
            builder = builder.add_source(
                Environment::with_prefix(prefix)
                    .separator("_")
                    .try_parsing(true),
            );
        }

        builder.build()?.try_deserialize::<Config>()
    }

    /// Get the GitHub API root.
    pub fn github_api(&self) -> String {
        self.github
            .api
            .clone()
            .unwrap_or_else(|| GITHUB_API_HOST.to_string())
    }

    /// Get the GitHub token.
    pub fn github_token(&self) -> Option<String> {
        self.github.token.clone()
    }

    /// Get the Gitea token.
    pub fn gitea_token(&self) -> Option<String> {
        self.gitea.token.clone()
    }

    /// Get the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "forgemirror").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

/// No tracing subscriber is installed on a terminal, so the warning is also
/// printed to stderr there; otherwise a token in a broken file would vanish
/// without a trace.
fn report_invalid_config(err: &config::ConfigError) {
    tracing::warn!("Failed to load config, using defaults: {}", err);
    if Term::stdout().is_term() {
        eprintln!(
            "{} failed to load config, using defaults: {}",
            style("Warning:").yellow().bold(),
            err
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.github.api.is_none());
        assert!(config.github.token.is_none());
        assert!(config.gitea.token.is_none());
        assert!(!config.gitea.insecure);
        assert_eq!(config.http.timeout, 30);
        assert_eq!(config.github_api(), "https://api.github.com");
    }

    #[test]
    fn test_config_builder_with_toml_string() {
        let toml_content = r#"
            [github]
            api = "https://ghe.example.com/api/v3"
            token = "ghp_test123"

            [gitea]
            token = "gitea_test"
            insecure = true

            [http]
            timeout = 5
        "#;

        let settings = ConfigBuilder::builder()
            .add_source(config::File::from_str(toml_content, FileFormat::Toml))
            .build()
            .unwrap();

        let config: Config = settings.try_deserialize().unwrap();

        assert_eq!(config.github_api(), "https://ghe.example.com/api/v3");
        assert_eq!(config.github_token(), Some("ghp_test123".to_string()));
        assert_eq!(config.gitea_token(), Some("gitea_test".to_string()));
        assert!(config.gitea.insecure);
        assert_eq!(config.http.timeout, 5);
    }

    #[test]
    fn test_config_builder_partial_override() {
        let toml_content = r#"
            [gitea]
            token = "only-this"
        "#;

        let settings = ConfigBuilder::builder()
            .add_source(config::File::from_str(toml_content, FileFormat::Toml))
            .build()
            .unwrap();

        let config: Config = settings.try_deserialize().unwrap();

        assert_eq!(config.gitea_token(), Some("only-this".to_string()));
        assert!(!config.gitea.insecure);
        assert_eq!(config.http.timeout, 30);
    }

    #[test]
    fn test_load_from_later_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("config.toml");
        let local = dir.path().join("forgemirror.toml");
        std::fs::write(&global, "[gitea]\ntoken = \"global\"\n\n[http]\ntimeout = 10\n").unwrap();
        std::fs::write(&local, "[gitea]\ntoken = \"local\"\n").unwrap();

        let config = Config::load_from(&[global, local], None);

        assert_eq!(config.gitea_token(), Some("local".to_string()));
        assert_eq!(config.http.timeout, 10);
    }

    #[test]
    fn test_load_from_missing_files_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&[dir.path().join("absent.toml")], None);
        assert!(config.gitea_token().is_none());
        assert_eq!(config.http.timeout, 30);
    }

    #[test]
    fn test_documented_timeout_secs_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("forgemirror.toml");
        std::fs::write(
            &path,
            r#"
            [github]
            api = "https://api.github.com"
            token = "ghp_abc"

            [gitea]
            token = "tok"
            insecure = false

            [http]
            timeout_secs = 12
            "#,
        )
        .unwrap();

        let config = Config::load_from(&[path], None);
        assert_eq!(config.http.timeout, 12);
        assert_eq!(config.gitea_token(), Some("tok".to_string()));
    }

    #[test]
    fn test_try_load_from_reports_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(
            &path,
            "[gitea]\ntoken = \"kept\"\n\n[http]\ntimeout = \"soon\"\n",
        )
        .unwrap();

        let err = Config::try_load_from(&[path], None).unwrap_err();
        assert!(err.to_string().contains("timeout"), "{err}");
    }

    #[test]
    fn test_load_from_invalid_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[http]\ntimeout = \"soon\"\n").unwrap();

        let config = Config::load_from(&[path], None);
        assert_eq!(config.http.timeout, 30);
    }
}
