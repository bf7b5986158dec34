//! Deciding which source repositories still need a mirror.

use std::collections::HashMap;

use crate::gitea::GiteaRepo;
use crate::github::GitHubRepo;

/// Outcome of comparing the source listing with the destination listing.
///
/// Every source repository lands in exactly one of the three buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Repositories with no same-named destination repository, in source order.
    pub to_migrate: Vec<GitHubRepo>,
    /// Names that collide with a destination repository that is not a mirror.
    pub conflicts: Vec<String>,
    /// Names that already exist on the destination as mirrors.
    pub already_migrated: Vec<String>,
}

impl Reconciliation {
    pub fn conflict_count(&self) -> usize {
        self.conflicts.len()
    }

    pub fn already_migrated_count(&self) -> usize {
        self.already_migrated.len()
    }

    /// Number of source repositories that were classified.
    pub fn total(&self) -> usize {
        self.to_migrate.len() + self.conflict_count() + self.already_migrated_count()
    }
}

/// Partition `source` into repositories to migrate, conflicts and existing mirrors.
///
/// A name match against a non-mirror destination repository is never
/// migrated, so an unrelated repository is not overwritten. If the
/// destination lists a name twice, the later entry decides.
pub fn reconcile(source: Vec<GitHubRepo>, destination: &[GiteaRepo]) -> Reconciliation {
    let by_name: HashMap<&str, &GiteaRepo> = destination
        .iter()
        .map(|repo| (repo.name.as_str(), repo))
        .collect();

    let mut result = Reconciliation::default();
    for repo in source {
        match by_name.get(repo.name.as_str()) {
            None => result.to_migrate.push(repo),
            Some(existing) if existing.mirror => result.already_migrated.push(repo.name),
            Some(_) => result.conflicts.push(repo.name),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn src(name: &str) -> GitHubRepo {
        GitHubRepo {
            name: name.to_string(),
            url: format!("https://github.com/octocat/{name}"),
            description: String::new(),
            fork: false,
        }
    }

    fn dst(name: &str, mirror: bool) -> GiteaRepo {
        GiteaRepo {
            name: name.to_string(),
            description: String::new(),
            mirror,
        }
    }

    fn names(repos: &[GitHubRepo]) -> Vec<&str> {
        repos.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_empty_destination_migrates_everything_in_order() {
        let result = reconcile(vec![src("c"), src("a"), src("b")], &[]);
        assert_eq!(names(&result.to_migrate), vec!["c", "a", "b"]);
        assert_eq!(result.conflict_count(), 0);
        assert_eq!(result.already_migrated_count(), 0);
    }

    #[test]
    fn test_mirror_match_is_already_migrated() {
        let mut fork = src("c");
        fork.fork = true;
        let result = reconcile(vec![src("a"), src("b"), fork], &[dst("b", true)]);

        assert_eq!(names(&result.to_migrate), vec!["a", "c"]);
        assert_eq!(result.already_migrated, vec!["b".to_string()]);
        assert_eq!(result.conflict_count(), 0);
    }

    #[test]
    fn test_non_mirror_match_is_conflict() {
        let result = reconcile(vec![src("a"), src("b")], &[dst("a", false)]);

        assert_eq!(names(&result.to_migrate), vec!["b"]);
        assert_eq!(result.conflicts, vec!["a".to_string()]);
        assert_eq!(result.already_migrated_count(), 0);
    }

    #[test]
    fn test_destination_only_repos_are_ignored() {
        let result = reconcile(vec![src("a")], &[dst("x", true), dst("y", false)]);
        assert_eq!(names(&result.to_migrate), vec!["a"]);
        assert_eq!(result.total(), 1);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let result = reconcile(vec![src("Repo")], &[dst("repo", false)]);
        assert_eq!(names(&result.to_migrate), vec!["Repo"]);
    }

    #[test]
    fn test_last_duplicate_destination_entry_wins() {
        let result = reconcile(vec![src("a")], &[dst("a", false), dst("a", true)]);
        assert_eq!(result.already_migrated_count(), 1);
        assert_eq!(result.conflict_count(), 0);
    }

    #[test]
    fn test_counts_always_sum_to_source_len() {
        let destination = vec![
            dst("r1", true),
            dst("r4", false),
            dst("r7", true),
            dst("r9", false),
        ];
        for len in 0..12 {
            let source: Vec<GitHubRepo> = (0..len).map(|i| src(&format!("r{i}"))).collect();
            let result = reconcile(source, &destination);
            assert_eq!(result.total(), len, "len = {len}");
        }
    }
}
