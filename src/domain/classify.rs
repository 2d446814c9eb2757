use indexmap::IndexMap;

use crate::domain::commit::{CommitType, ParsedCommit};
use crate::domain::remote::RepoUrl;
use crate::domain::render::render_line;

/// Where a parsed commit ends up in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Breaking,
    /// Commits whose subject has no recognised type prefix
    Uncategorized,
    ScopeGroup(String),
}

/// Route a commit. Breaking markers win over everything else.
pub fn destination(commit: &ParsedCommit) -> Destination {
    if commit.is_breaking {
        Destination::Breaking
    } else if commit.commit_type == CommitType::Other {
        Destination::Uncategorized
    } else {
        Destination::ScopeGroup(commit.scope.clone())
    }
}

/// Rendered lines per destination.
///
/// `groups` keeps scopes in the order they were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub breaking: Vec<String>,
    pub groups: IndexMap<String, Vec<String>>,
    pub uncategorized: Vec<String>,
}

impl Classification {
    /// Total number of lines across all destinations.
    pub fn len(&self) -> usize {
        self.breaking.len()
            + self.uncategorized.len()
            + self.groups.values().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classify commits in input order, rendering each into its destination.
pub fn classify(commits: &[ParsedCommit], base_url: &RepoUrl) -> Classification {
    let mut classification = Classification::default();

    for commit in commits {
        let line = render_line(commit, base_url);
        match destination(commit) {
            Destination::Breaking => classification.breaking.push(line),
            Destination::Uncategorized => classification.uncategorized.push(line),
            Destination::ScopeGroup(scope) => {
                classification.groups.entry(scope).or_default().push(line)
            }
        }
    }

    classification
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commit::{Commit, UNSCOPED};

    fn base() -> RepoUrl {
        RepoUrl::parse("https://github.com/acme/widgets").unwrap()
    }

    fn parsed(hash: &str, subject: &str, body: &str) -> ParsedCommit {
        let message = if body.is_empty() {
            subject.to_string()
        } else {
            format!("{}\n\n{}", subject, body)
        };
        ParsedCommit::parse(Commit::new(hash, subject, message))
    }

    #[test]
    fn test_destination_priority() {
        let breaking = parsed("1", "feat(auth): add login", "BREAKING CHANGE: token format changed");
        assert_eq!(destination(&breaking), Destination::Breaking);

        let other = parsed("2", "improve readme", "");
        assert_eq!(destination(&other), Destination::Uncategorized);

        let unscoped = parsed("3", "fix: fix session bug", "");
        assert_eq!(
            destination(&unscoped),
            Destination::ScopeGroup(UNSCOPED.to_string())
        );
    }

    #[test]
    fn test_classification_is_a_partition() {
        let commits = vec![
            parsed("a1", "feat(auth): add OAuth login", ""),
            parsed("a2", "fix: fix session bug", ""),
            parsed("a3", "improve readme", ""),
            parsed("a4", "refactor(egress)!: rework client", "BREAKING CHANGE: removed"),
            parsed("a5", "docs(auth): explain flow", ""),
            parsed("a6", "wip", "BREAKING CHANGE: oops"),
        ];

        let result = classify(&commits, &base());
        assert_eq!(result.len(), commits.len());

        for commit in &commits {
            let needle = format!("/commit/{})", commit.commit.hash);
            let hits = result
                .breaking
                .iter()
                .chain(result.uncategorized.iter())
                .chain(result.groups.values().flatten())
                .filter(|line| line.ends_with(&needle))
                .count();
            assert_eq!(hits, 1, "commit {} placed {} times", commit.commit.hash, hits);
        }
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let commits = vec![
            parsed("1", "feat(zeta): one", ""),
            parsed("2", "fix(alpha): two", ""),
            parsed("3", "chore(zeta): three", ""),
            parsed("4", "test: four", ""),
        ];

        let result = classify(&commits, &base());
        let scopes: Vec<&str> = result.groups.keys().map(String::as_str).collect();
        assert_eq!(scopes, vec!["zeta", "alpha", UNSCOPED]);
        assert_eq!(result.groups["zeta"].len(), 2);
        assert!(result.groups["zeta"][0].contains("[one]"));
        assert!(result.groups["zeta"][1].contains("[three]"));
    }

    #[test]
    fn test_breaking_commit_appears_only_in_breaking() {
        let commits = vec![parsed(
            "fff000",
            "feat(auth): add login",
            "BREAKING CHANGE: token format changed",
        )];
        let result = classify(&commits, &base());
        assert_eq!(result.breaking.len(), 1);
        assert!(result.groups.is_empty());
        assert!(result.uncategorized.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let result = classify(&[], &base());
        assert!(result.is_empty());
    }
}
