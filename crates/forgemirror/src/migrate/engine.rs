//! Sequential migration pipeline.

use super::error::MigrationError;
use super::progress::{MigrationProgress, ProgressCallback, emit};
use super::types::{MigrationOptions, MigrationSummary};
use crate::platform::{MirrorDestination, SourceLister};
use crate::reconcile::reconcile;

/// Mirror every repository of `owner` that the destination does not have yet.
///
/// Steps run one after another and the first failure is returned as-is.
/// There is no rollback: mirrors created before a failure remain.
pub async fn run_migration<S, D>(
    source: &S,
    destination: &D,
    owner: &str,
    options: &MigrationOptions,
    on_progress: Option<&ProgressCallback>,
) -> Result<MigrationSummary, MigrationError>
where
    S: SourceLister + ?Sized,
    D: MirrorDestination + ?Sized,
{
    let source_repos = source.list_repos(owner, on_progress).await?;

    emit(on_progress, MigrationProgress::FetchingDestination);
    let destination_repos = destination.list_repos().await?;
    emit(
        on_progress,
        MigrationProgress::FetchedDestination {
            total: destination_repos.len(),
        },
    );

    let plan = reconcile(source_repos, &destination_repos);
    tracing::debug!(
        to_migrate = plan.to_migrate.len(),
        conflicts = plan.conflict_count(),
        already_migrated = plan.already_migrated_count(),
        "Reconciled repositories"
    );
    emit(
        on_progress,
        MigrationProgress::Reconciled {
            to_migrate: plan.to_migrate.len(),
            conflicts: plan.conflict_count(),
            already_migrated: plan.already_migrated_count(),
        },
    );
    for name in &plan.conflicts {
        emit(
            on_progress,
            MigrationProgress::ConflictSkipped { name: name.clone() },
        );
    }

    let total = plan.to_migrate.len();
    for (i, repo) in plan.to_migrate.iter().enumerate() {
        emit(
            on_progress,
            MigrationProgress::MigratingRepo {
                name: repo.name.clone(),
                index: i + 1,
                total,
                dry_run: options.dry_run,
            },
        );

        if options.dry_run {
            continue;
        }

        destination.migrate(repo).await?;
        emit(
            on_progress,
            MigrationProgress::MigratedRepo {
                name: repo.name.clone(),
            },
        );
    }

    emit(
        on_progress,
        MigrationProgress::MigrationComplete {
            migrated: total,
            dry_run: options.dry_run,
        },
    );

    Ok(MigrationSummary {
        migrated: total,
        conflicts: plan.conflict_count(),
        already_migrated: plan.already_migrated_count(),
        dry_run: options.dry_run,
    })
}
