//! Shared test utilities for integration tests.
#![allow(dead_code)]

use std::cell::RefCell;

use git2::{Oid, Repository, RepositoryInitOptions, Signature};

use git_pr_compose::boundary::BoundaryWarning;
use git_pr_compose::cli::Interaction;
use git_pr_compose::domain::{ParsedCommit, PrDocument};
use git_pr_compose::forge::{PullRequest, PullRequestCreator};
use git_pr_compose::{PrComposeError, Result};

/// A test git repository whose first branch is `main`.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let mut opts = RepositoryInitOptions::new();
        opts.initial_head("main");
        let repo = Repository::init_opts(dir.path(), &opts).expect("Failed to init git repo");
        Self { dir, repo }
    }

    fn signature(&self) -> Signature<'_> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Commit on the checked-out branch. Returns the commit OID.
    pub fn commit(&self, message: &str) -> Oid {
        let sig = self.signature();

        let file_path = self.dir.path().join("test.txt");
        let content = format!(
            "{}\n{}",
            message,
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        );
        std::fs::write(&file_path, content).expect("Failed to write test file");

        let mut index = self.repo.index().expect("Failed to get index");
        index
            .add_path(std::path::Path::new("test.txt"))
            .expect("Failed to add file");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Create a branch at HEAD and check it out.
    pub fn checkout_new_branch(&self, name: &str) {
        let head = self
            .repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .expect("Failed to resolve HEAD");
        self.repo
            .branch(name, &head, false)
            .expect("Failed to create branch");
        self.repo
            .set_head(&format!("refs/heads/{}", name))
            .expect("Failed to set HEAD");
    }

    /// Point HEAD directly at a commit.
    pub fn detach_head(&self, oid: Oid) {
        self.repo.set_head_detached(oid).expect("Failed to detach HEAD");
    }

    pub fn add_remote(&self, name: &str, url: &str) {
        self.repo.remote(name, url).expect("Failed to add remote");
    }

    /// Create `refs/remotes/<remote>/<branch>` at the given commit.
    pub fn remote_branch(&self, remote: &str, branch: &str, oid: Oid) {
        self.repo
            .reference(
                &format!("refs/remotes/{}/{}", remote, branch),
                oid,
                true,
                "test remote branch",
            )
            .expect("Failed to create remote branch");
    }
}

/// Records requests and answers with a fixed result.
pub struct RecordingCreator {
    pub requests: RefCell<Vec<PullRequest>>,
    pub fail_with: Option<String>,
}

impl RecordingCreator {
    pub fn succeeding() -> Self {
        RecordingCreator {
            requests: RefCell::new(Vec::new()),
            fail_with: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        RecordingCreator {
            requests: RefCell::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }
}

impl PullRequestCreator for RecordingCreator {
    fn create(&self, request: &PullRequest) -> Result<String> {
        self.requests.borrow_mut().push(request.clone());
        match &self.fail_with {
            Some(message) => Err(PrComposeError::pull_request(message.clone())),
            None => Ok("https://github.com/acme/widgets/pull/1".to_string()),
        }
    }
}

/// Answers prompts from a queue and records what was shown.
pub struct ScriptedInteraction {
    pub answers: RefCell<Vec<String>>,
    pub confirm: bool,
    pub warnings: RefCell<Vec<BoundaryWarning>>,
    pub prompts: RefCell<Vec<String>>,
    pub shown_commits: RefCell<usize>,
}

impl ScriptedInteraction {
    pub fn new(answers: &[&str], confirm: bool) -> Self {
        ScriptedInteraction {
            answers: RefCell::new(answers.iter().rev().map(|s| s.to_string()).collect()),
            confirm,
            warnings: RefCell::new(Vec::new()),
            prompts: RefCell::new(Vec::new()),
            shown_commits: RefCell::new(0),
        }
    }

    pub fn silent() -> Self {
        Self::new(&[], true)
    }
}

impl Interaction for ScriptedInteraction {
    fn warn(&self, warning: &BoundaryWarning) {
        self.warnings.borrow_mut().push(warning.clone());
    }

    fn show_commits(&self, commits: &[ParsedCommit], _compare_ref: &str) {
        *self.shown_commits.borrow_mut() = commits.len();
    }

    fn prompt(&self, label: &str, default: &str) -> anyhow::Result<String> {
        self.prompts.borrow_mut().push(label.to_string());
        let answer = self.answers.borrow_mut().pop().unwrap_or_default();
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    fn confirm_create(&self, _document: &PrDocument, _request: &PullRequest) -> anyhow::Result<bool> {
        Ok(self.confirm)
    }
}
