use std::sync::Mutex;

use console::style;
use forgemirror::migrate::MigrationProgress;
use indicatif::{ProgressBar, ProgressStyle};

use super::status_line;

/// Interactive reporter: a spinner while listing, then one line per step.
pub struct InteractiveReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl InteractiveReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    pub fn handle(&self, event: MigrationProgress) {
        let mut spinner = self.spinner.lock().unwrap();

        if let Some(line) = status_line(&event) {
            println!("{}", line);
        }

        match event {
            MigrationProgress::FetchingSource { owner } => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(Self::spinner_style());
                pb.set_prefix(format!("{:12}", owner));
                pb.set_message("Fetching repositories...");
                pb.enable_steady_tick(std::time::Duration::from_millis(100));
                *spinner = Some(pb);
            }

            MigrationProgress::FetchedSourcePage {
                page, total_so_far, ..
            } => {
                if let Some(ref pb) = *spinner {
                    pb.set_message(format!("Page {} ({} repos)", page, total_so_far));
                }
            }

            MigrationProgress::FetchedSource { total, .. } => {
                if let Some(ref pb) = *spinner {
                    pb.set_message(format!("Fetched {} repos", total));
                }
            }

            MigrationProgress::FetchingDestination => {
                if let Some(ref pb) = *spinner {
                    pb.set_message("Fetching destination repositories...");
                }
            }

            MigrationProgress::FetchedDestination { .. } => {
                if let Some(pb) = spinner.take() {
                    pb.finish_and_clear();
                }
            }

            MigrationProgress::ConflictSkipped { name } => {
                eprintln!(
                    "{} {} exists and is not a mirror, skipped",
                    style("conflict:").yellow().bold(),
                    name
                );
            }

            MigrationProgress::MigrationComplete { migrated, dry_run } => {
                if dry_run {
                    println!(
                        "{} {} repos would be migrated",
                        style("Dry run:").cyan().bold(),
                        migrated
                    );
                } else if migrated > 0 {
                    println!(
                        "{} {} mirrors created",
                        style("Done:").green().bold(),
                        migrated
                    );
                }
            }

            _ => {}
        }
    }

    /// Remove the spinner if a run stops while it is still showing.
    pub fn clear(&self) {
        if let Some(pb) = self.spinner.lock().unwrap().take() {
            pb.finish_and_clear();
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{prefix:.bold.cyan} {spinner:.green} {msg}")
            .expect("Invalid template")
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
    }
}

impl Default for InteractiveReporter {
    fn default() -> Self {
        Self::new()
    }
}
