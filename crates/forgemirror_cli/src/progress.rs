//! Progress reporting for migration runs.
//!
//! This module provides two modes of progress reporting:
//! - Interactive mode (TTY): a fetch spinner plus plain status lines
//! - Logging mode (non-TTY): Structured logging using tracing
//!
//! Both modes print the summary and per-repository lines from
//! [`status_line`] to stdout regardless of the log filter.

mod interactive;
mod logging;

use std::sync::Arc;

use console::Term;
use forgemirror::migrate::{MigrationProgress, ProgressCallback};

pub use interactive::InteractiveReporter;
pub use logging::LoggingReporter;

/// Progress reporter that handles both interactive and logging modes.
pub enum ProgressReporter {
    /// Spinner and status lines for TTY.
    Interactive(InteractiveReporter),
    /// Structured logging for non-TTY (CI, pipes).
    Logging(LoggingReporter),
}

impl ProgressReporter {
    /// Create a new progress reporter, auto-detecting TTY mode.
    pub fn new() -> Self {
        if Term::stdout().is_term() {
            Self::Interactive(InteractiveReporter::new())
        } else {
            Self::Logging(LoggingReporter::new())
        }
    }

    /// Handle a progress event.
    pub fn handle(&self, event: MigrationProgress) {
        match self {
            Self::Interactive(r) => r.handle(event),
            Self::Logging(r) => r.handle(event),
        }
    }

    /// Convert to a ProgressCallback for the library.
    pub fn as_callback(self: &Arc<Self>) -> ProgressCallback {
        let reporter = Arc::clone(self);
        Box::new(move |event| {
            reporter.handle(event);
        })
    }

    /// Clear any live spinner (interactive mode only), e.g. before printing an error.
    pub fn clear(&self) {
        if let Self::Interactive(r) = self {
            r.clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// The line printed once source and destination have been compared.
pub fn summary_line(to_migrate: usize, conflicts: usize, already_migrated: usize) -> String {
    format!(
        "{} repos need to migrate, {} conflict repos ignored, {} repos already exist",
        to_migrate, conflicts, already_migrated
    )
}

/// The plain stdout line for `event`, if it has one.
pub fn status_line(event: &MigrationProgress) -> Option<String> {
    match event {
        MigrationProgress::Reconciled {
            to_migrate,
            conflicts,
            already_migrated,
        } => Some(summary_line(*to_migrate, *conflicts, *already_migrated)),
        MigrationProgress::MigratingRepo { name, dry_run, .. } => {
            Some(migrating_line(name, *dry_run))
        }
        _ => None,
    }
}

/// The line printed before each repository is migrated.
pub fn migrating_line(name: &str, dry_run: bool) -> String {
    if dry_run {
        format!("would migrate {}", name)
    } else {
        format!("migrating {}", name)
    }
}
