use std::sync::Arc;
use std::time::Duration;

use forgemirror::gitea::GiteaClient;
use forgemirror::github::GitHubClient;
use forgemirror::http::reqwest_transport::TransportOptions;
use forgemirror::migrate::{MigrationOptions, run_migration};

use crate::config::Config;
use crate::progress::ProgressReporter;
use crate::MirrorArgs;

/// Settings for one run after merging CLI flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MirrorSettings {
    pub source_username: String,
    pub destination_url: String,
    pub gitea_token: String,
    pub github_api: String,
    pub github_token: Option<String>,
    pub insecure: bool,
    pub dry_run: bool,
    pub timeout: Duration,
}

impl MirrorSettings {
    pub(crate) fn resolve(args: MirrorArgs, config: &Config) -> Self {
        Self {
            source_username: args.source_username,
            destination_url: args.destination_url,
            gitea_token: args
                .token
                .or_else(|| config.gitea_token())
                .unwrap_or_default(),
            github_api: args.github_api.unwrap_or_else(|| config.github_api()),
            github_token: args.github_token.or_else(|| config.github_token()),
            insecure: args.insecure || config.gitea.insecure,
            dry_run: args.dry_run,
            timeout: Duration::from_secs(args.timeout.unwrap_or(config.http.timeout)),
        }
    }
}

pub(crate) async fn handle_mirror(
    args: MirrorArgs,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = MirrorSettings::resolve(args, config);

    let source = GitHubClient::new(
        &settings.github_api,
        settings.github_token.as_deref(),
        TransportOptions {
            timeout: settings.timeout,
            accept_invalid_certs: false,
        },
    )?;
    let destination = GiteaClient::new(
        &settings.destination_url,
        &settings.gitea_token,
        TransportOptions {
            timeout: settings.timeout,
            accept_invalid_certs: settings.insecure,
        },
    )?;

    let reporter = Arc::new(ProgressReporter::new());
    let callback = reporter.as_callback();

    let result = run_migration(
        &source,
        &destination,
        &settings.source_username,
        &MigrationOptions {
            dry_run: settings.dry_run,
        },
        Some(&callback),
    )
    .await;

    if result.is_err() {
        reporter.clear();
    }
    result?;

    Ok(())
}
