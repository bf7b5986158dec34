//! Progress reporting for migration runs.
//!
//! The library never prints. It emits these events and lets the caller decide
//! how to render them.

/// Progress events emitted during a migration run.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum MigrationProgress {
    /// Starting to list the source owner's repositories.
    FetchingSource {
        /// The source user being listed.
        owner: String,
    },

    /// Fetched one page of source repositories.
    FetchedSourcePage {
        owner: String,
        /// Page number (1-indexed).
        page: u32,
        /// Number of repos on this page.
        count: usize,
        /// Running total of repos fetched so far.
        total_so_far: usize,
    },

    /// Finished listing source repositories.
    FetchedSource { owner: String, total: usize },

    /// Starting to list destination repositories.
    FetchingDestination,

    /// Finished listing destination repositories.
    FetchedDestination { total: usize },

    /// Source and destination have been compared.
    Reconciled {
        /// Repositories that will be migrated.
        to_migrate: usize,
        /// Repositories skipped because of a name conflict.
        conflicts: usize,
        /// Repositories that already have a mirror.
        already_migrated: usize,
    },

    /// A source repository was skipped because of a name conflict.
    ConflictSkipped { name: String },

    /// About to migrate a repository.
    MigratingRepo {
        name: String,
        /// Position in the migration list (1-indexed).
        index: usize,
        total: usize,
        /// Whether this is a dry run (no request is sent).
        dry_run: bool,
    },

    /// The destination accepted a migration.
    MigratedRepo { name: String },

    /// All migrations finished.
    MigrationComplete { migrated: usize, dry_run: bool },
}

/// Callback for progress updates during a migration run.
pub type ProgressCallback = Box<dyn Fn(MigrationProgress) + Send + Sync>;

/// Emit a progress event if a callback is provided.
#[inline]
pub fn emit(on_progress: Option<&ProgressCallback>, event: MigrationProgress) {
    if let Some(cb) = on_progress {
        cb(event);
    }
}
