//! forgemirror CLI - mirror a GitHub user's repositories into Gitea.

mod commands;
mod config;
mod progress;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use console::Term;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "forgemirror")]
#[command(about = "Mirror a GitHub user's public repositories into Gitea")]
#[command(disable_version_flag = true)]
#[command(override_usage = concat!(
    "forgemirror [OPTIONS] <GITHUB_USERNAME> <GITEA_URL>\n",
    "       forgemirror --version"
))]
#[command(
    long_about = "Lists every public repository of a GitHub user and asks a Gitea (or \
Forgejo/Gogs) instance to create a pull mirror for each one that is missing. \
Repositories whose name is already taken by a mirror are skipped; repositories \
whose name is taken by anything else are reported as conflicts and left alone."
)]
#[command(after_long_help = r#"EXAMPLES
    Mirror all of golang's public repositories:
        $ forgemirror --token 0123456789abcdef golang https://gitea.example.com

    See what would be migrated without creating anything:
        $ forgemirror --dry-run golang https://gitea.example.com

CONFIGURATION
    forgemirror reads configuration from:
      1. ~/.config/forgemirror/config.toml (or $XDG_CONFIG_HOME/forgemirror/config.toml)
      2. ./forgemirror.toml
      3. Environment variables (FORGEMIRROR_* prefix) and a .env file in the current directory

ENVIRONMENT VARIABLES
    FORGEMIRROR_GITEA_TOKEN       Gitea access token
    FORGEMIRROR_GITEA_INSECURE    Skip TLS certificate validation for Gitea (true/false)
    FORGEMIRROR_GITHUB_TOKEN      GitHub token (optional, raises the rate limit)
    FORGEMIRROR_GITHUB_API        GitHub API root (default: https://api.github.com)
    FORGEMIRROR_HTTP_TIMEOUT      Request timeout in seconds (default: 30)
"#)]
struct Cli {
    /// Gitea access token
    #[arg(long, value_name = "TOKEN")]
    token: Option<String>,

    /// GitHub token (optional, raises the API rate limit)
    #[arg(long, value_name = "TOKEN")]
    github_token: Option<String>,

    /// GitHub API root, for GitHub Enterprise
    #[arg(long, value_name = "URL")]
    github_api: Option<String>,

    /// Skip TLS certificate validation for the Gitea host
    #[arg(short = 'k', long)]
    insecure: bool,

    /// Dry run - show what would be migrated without creating anything
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Request timeout in seconds (default from config or 30)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Show version and build time
    #[arg(short = 'V', long)]
    version: bool,

    /// GitHub user whose public repositories are mirrored
    #[arg(value_name = "GITHUB_USERNAME", required_unless_present = "version")]
    source_username: Option<String>,

    /// Base URL of the Gitea instance, e.g. https://gitea.example.com
    #[arg(value_name = "GITEA_URL", required_unless_present = "version")]
    destination_url: Option<String>,
}

/// Arguments of a migration run once the positionals are known to be present.
#[derive(Debug, Clone)]
pub(crate) struct MirrorArgs {
    pub source_username: String,
    pub destination_url: String,
    pub token: Option<String>,
    pub github_token: Option<String>,
    pub github_api: Option<String>,
    pub insecure: bool,
    pub dry_run: bool,
    pub timeout: Option<u64>,
}

impl Cli {
    fn into_mirror_args(self) -> Option<MirrorArgs> {
        Some(MirrorArgs {
            source_username: self.source_username?,
            destination_url: self.destination_url?,
            token: self.token,
            github_token: self.github_token,
            github_api: self.github_api,
            insecure: self.insecure,
            dry_run: self.dry_run,
            timeout: self.timeout,
        })
    }
}

fn print_version() {
    println!("version {}", env!("CARGO_PKG_VERSION"));
    println!("build time {}", env!("FORGEMIRROR_BUILD_TIME"));
}

/// Exit status for a command line clap refused: help and similar displays
/// succeed, usage errors fail.
fn parse_error_status(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

fn error_line(err: &dyn std::error::Error) -> String {
    format!("Error: {}", err)
}

/// Run the parsed command line and return its exit status.
async fn run(cli: Cli, config: &config::Config) -> u8 {
    if cli.version {
        print_version();
        return 1;
    }

    let Some(args) = cli.into_mirror_args() else {
        eprintln!("{}", Cli::command().render_usage());
        return 1;
    };

    match commands::mirror::handle_mirror(args, config).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{}", error_line(e.as_ref()));
            1
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(parse_error_status(&e));
        }
    };

    // Initialize tracing for non-TTY mode (structured logging on stderr,
    // leaving stdout to the status lines)
    if !Term::stdout().is_term() {
        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::new("forgemirror=info,forgemirror_cli=info"),
        };

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_ansi(false)
            .with_writer(std::io::stderr)
            .init();
    }

    // Load configuration (config file -> env vars -> defaults)
    let config = config::Config::load();

    ExitCode::from(run(cli, &config).await)
}
