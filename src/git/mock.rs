use crate::error::{PrComposeError, Result};
use crate::git::{CommitSummary, Repository};
use std::collections::HashMap;

/// In-memory repository for testing without actual git operations
///
/// Holds one pre-computed range: `list_commits` returns every added commit,
/// newest first, as long as both refs are known.
pub struct MockRepository {
    branch: Option<String>,
    refs: Vec<String>,
    commits: Vec<CommitSummary>,
    messages: HashMap<String, String>,
    remotes: HashMap<String, String>,
}

impl MockRepository {
    /// Create a new empty mock repository on `main`
    pub fn new() -> Self {
        MockRepository {
            branch: Some("main".to_string()),
            refs: vec!["HEAD".to_string()],
            commits: Vec::new(),
            messages: HashMap::new(),
            remotes: HashMap::new(),
        }
    }

    /// Set the checked-out branch, `None` for a detached HEAD
    pub fn set_branch(&mut self, branch: Option<&str>) {
        self.branch = branch.map(str::to_string);
    }

    /// Make a ref resolvable
    pub fn add_ref(&mut self, name: impl Into<String>) {
        self.refs.push(name.into());
    }

    /// Add a commit; commits are listed in insertion order.
    ///
    /// `hash` doubles as the full id.
    pub fn add_commit(&mut self, hash: &str, subject: &str, body: &str) {
        let message = if body.is_empty() {
            subject.to_string()
        } else {
            format!("{}\n\n{}", subject, body)
        };
        self.commits.push(CommitSummary {
            id: hash.to_string(),
            hash: hash.to_string(),
            subject: subject.to_string(),
        });
        self.messages.insert(hash.to_string(), message);
    }

    /// Register a remote URL
    pub fn add_remote(&mut self, name: impl Into<String>, url: impl Into<String>) {
        self.remotes.insert(name.into(), url.into());
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn current_branch(&self) -> Result<Option<String>> {
        Ok(self.branch.clone())
    }

    fn ref_exists(&self, name: &str) -> Result<bool> {
        Ok(self.refs.iter().any(|r| r == name))
    }

    fn list_commits(&self, from_ref: &str, to_ref: &str) -> Result<Vec<CommitSummary>> {
        for name in [from_ref, to_ref] {
            if !self.refs.iter().any(|r| r == name) {
                return Err(PrComposeError::BranchNotFound(name.to_string()));
            }
        }
        Ok(self.commits.clone())
    }

    fn full_message(&self, id: &str) -> Result<String> {
        self.messages
            .get(id)
            .cloned()
            .ok_or_else(|| PrComposeError::Git(git2::Error::from_str(&format!("unknown commit {}", id))))
    }

    fn remote_url(&self, remote: &str) -> Result<String> {
        self.remotes
            .get(remote)
            .cloned()
            .ok_or_else(|| PrComposeError::remote(format!("Cannot find remote '{}'", remote)))
    }
}
