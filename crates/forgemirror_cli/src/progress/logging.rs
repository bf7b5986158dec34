use std::io::Write;
use std::sync::Mutex;

use forgemirror::migrate::MigrationProgress;

use super::status_line;

/// Logging reporter using tracing for structured output.
///
/// Status lines still go to the writer (stdout by default) so piped output
/// does not depend on `RUST_LOG`.
pub struct LoggingReporter {
    out: Mutex<Box<dyn Write + Send>>,
}

impl LoggingReporter {
    pub fn new() -> Self {
        Self::with_writer(Box::new(std::io::stdout()))
    }

    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn handle(&self, event: MigrationProgress) {
        if let Some(line) = status_line(&event) {
            let mut out = self.out.lock().unwrap();
            let _ = writeln!(out, "{}", line);
            let _ = out.flush();
        }

        match event {
            MigrationProgress::FetchingSource { owner } => {
                tracing::info!(owner = %owner, "Fetching source repositories");
            }

            MigrationProgress::FetchedSourcePage {
                owner,
                page,
                count,
                total_so_far,
            } => {
                tracing::debug!(owner = %owner, page, count, total_so_far, "Fetched page");
            }

            MigrationProgress::FetchedSource { owner, total } => {
                tracing::info!(owner = %owner, total, "Fetched source repositories");
            }

            MigrationProgress::FetchingDestination => {
                tracing::debug!("Fetching destination repositories");
            }

            MigrationProgress::FetchedDestination { total } => {
                tracing::info!(total, "Fetched destination repositories");
            }

            MigrationProgress::Reconciled {
                to_migrate,
                conflicts,
                already_migrated,
            } => {
                tracing::info!(to_migrate, conflicts, already_migrated, "Reconciled");
            }

            MigrationProgress::ConflictSkipped { name } => {
                tracing::warn!(repo = %name, "Name taken by a non-mirror repository, skipped");
            }

            MigrationProgress::MigratingRepo {
                name,
                index,
                total,
                dry_run,
            } => {
                tracing::info!(repo = %name, index, total, dry_run, "Migrating");
            }

            MigrationProgress::MigratedRepo { name } => {
                tracing::debug!(repo = %name, "Migrated");
            }

            MigrationProgress::MigrationComplete { migrated, dry_run } => {
                tracing::info!(migrated, dry_run, "Migration complete");
            }

            _ => {}
        }
    }
}

impl Default for LoggingReporter {
    fn default() -> Self {
        Self::new()
    }
}
