//! Options and results of a migration run.

/// Options for [`run_migration`](super::run_migration).
#[derive(Debug, Clone, Default)]
pub struct MigrationOptions {
    /// Report what would be migrated without creating anything.
    pub dry_run: bool,
}

/// Counts reported at the end of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationSummary {
    /// Mirrors created (or that would be created, in a dry run).
    pub migrated: usize,
    /// Source repositories skipped because a non-mirror repository has the same name.
    pub conflicts: usize,
    /// Source repositories that already have a mirror.
    pub already_migrated: usize,
    /// Whether this was a dry run.
    pub dry_run: bool,
}
