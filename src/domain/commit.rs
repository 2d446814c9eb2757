use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::config::ConventionalCommitsConfig;

/// Scope assigned to typed commits that carry no parenthesised scope.
pub const UNSCOPED: &str = "Uncategorized";

/// Icon used for commits routed to the breaking-changes section.
pub const BREAKING_ICON: &str = "⚠️";

/// Icon used for commits that do not follow the conventional format.
pub const UNCATEGORIZED_ICON: &str = "📝";

/// A commit as supplied by the version-control collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Short commit hash
    pub hash: String,
    /// First line of the message
    pub subject: String,
    /// Subject plus body
    pub message: String,
}

impl Commit {
    pub fn new(
        hash: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Commit {
            hash: hash.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }
}

/// Conventional commit types, plus `Other` for anything that does not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Build,
    Ci,
    Chore,
    Revert,
    Other,
}

/// Display label for a commit type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub text: &'static str,
    pub icon: &'static str,
}

impl CommitType {
    /// Every type recognised in a subject prefix, in table order.
    pub const RECOGNIZED: [CommitType; 11] = [
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Docs,
        CommitType::Style,
        CommitType::Refactor,
        CommitType::Perf,
        CommitType::Test,
        CommitType::Build,
        CommitType::Ci,
        CommitType::Chore,
        CommitType::Revert,
    ];

    /// The tag as written in a commit subject (`"feat"`, `"fix"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Perf => "perf",
            CommitType::Test => "test",
            CommitType::Build => "build",
            CommitType::Ci => "ci",
            CommitType::Chore => "chore",
            CommitType::Revert => "revert",
            CommitType::Other => "other",
        }
    }

    pub fn label(self) -> Label {
        let (text, icon) = match self {
            CommitType::Feat => ("Features", "✨"),
            CommitType::Fix => ("Bug Fixes", "🐛"),
            CommitType::Docs => ("Documentation", "📚"),
            CommitType::Style => ("Styles", "💄"),
            CommitType::Refactor => ("Code Refactoring", "♻️"),
            CommitType::Perf => ("Performance Improvements", "⚡"),
            CommitType::Test => ("Tests", "✅"),
            CommitType::Build => ("Builds", "📦"),
            CommitType::Ci => ("Continuous Integration", "👷"),
            CommitType::Chore => ("Chores", "🔧"),
            CommitType::Revert => ("Reverts", "⏪"),
            CommitType::Other => ("Other Changes", UNCATEGORIZED_ICON),
        };
        Label { text, icon }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommitType::RECOGNIZED
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown commit type: {}", s))
    }
}

/// Outcome of matching a subject line against the conventional format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectMatch {
    Conventional {
        commit_type: CommitType,
        scope: Option<String>,
        breaking_bang: bool,
        description: String,
    },
    /// The subject did not match; carries it unchanged.
    NonConventional(String),
}

fn subject_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(feat|fix|docs|style|refactor|perf|test|build|ci|chore|revert)(?:\(([^)]*)\))?(!)?: (.*)$",
        )
        .expect("subject pattern is valid")
    })
}

/// Match a subject line against `type(scope)!: description`.
///
/// Never fails: anything outside the closed set of types, or missing the
/// `": "` separator, comes back as [`SubjectMatch::NonConventional`].
pub fn match_subject(subject: &str) -> SubjectMatch {
    let Some(captures) = subject_regex().captures(subject) else {
        return SubjectMatch::NonConventional(subject.to_string());
    };

    let commit_type = captures
        .get(1)
        .and_then(|m| m.as_str().parse::<CommitType>().ok());
    let Some(commit_type) = commit_type else {
        return SubjectMatch::NonConventional(subject.to_string());
    };

    let scope = captures
        .get(2)
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    SubjectMatch::Conventional {
        commit_type,
        scope,
        breaking_bang: captures.get(3).is_some(),
        description: captures
            .get(4)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
    }
}

/// A commit with its conventional-commit classification fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommit {
    pub commit: Commit,
    pub commit_type: CommitType,
    pub scope: String,
    pub clean_subject: String,
    pub is_breaking: bool,
}

impl ParsedCommit {
    /// Parse with the default conventional-commit settings.
    pub fn parse(commit: Commit) -> Self {
        Self::parse_with(commit, &ConventionalCommitsConfig::default())
    }

    /// Parse a commit's subject and scan its full message for breaking markers.
    pub fn parse_with(commit: Commit, config: &ConventionalCommitsConfig) -> Self {
        let marker_found = config
            .breaking_change_markers
            .iter()
            .any(|marker| !marker.is_empty() && commit.message.contains(marker.as_str()));

        let (commit_type, scope, clean_subject, bang) = match match_subject(&commit.subject) {
            SubjectMatch::Conventional {
                commit_type,
                scope,
                breaking_bang,
                description,
            } => (
                commit_type,
                scope.unwrap_or_else(|| UNSCOPED.to_string()),
                description,
                breaking_bang,
            ),
            SubjectMatch::NonConventional(subject) => {
                (CommitType::Other, UNSCOPED.to_string(), subject, false)
            }
        };

        ParsedCommit {
            commit,
            commit_type,
            scope,
            clean_subject,
            is_breaking: marker_found || (config.bang_is_breaking && bang),
        }
    }
}
