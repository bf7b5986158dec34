//! The migration pipeline.
//!
//! Runs strictly in order: list source repositories, list destination
//! repositories, reconcile, then create one mirror at a time. The first error
//! stops the run; mirrors created before it stay on the destination.
//!
//! ```ignore
//! use forgemirror::migrate::{MigrationOptions, run_migration};
//!
//! let options = MigrationOptions::default();
//! let summary = run_migration(&github, &gitea, "octocat", &options, None).await?;
//! println!("{} mirrors created", summary.migrated);
//! ```

mod engine;
mod error;
mod progress;
mod types;

pub use engine::run_migration;
pub use error::MigrationError;
pub use progress::{MigrationProgress, ProgressCallback, emit};
pub use types::{MigrationOptions, MigrationSummary};
