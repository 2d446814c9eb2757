//! Git operations abstraction layer
//!
//! The primary abstraction is the [Repository] trait, covering the handful of
//! read-only queries git-pr-compose needs:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! ```rust
//! # use git_pr_compose::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> git_pr_compose::Result<()> {
//! for summary in repo.list_commits("origin/main", "HEAD")? {
//!     let message = repo.full_message(&summary.id)?;
//!     println!("{} {} ({} bytes)", summary.hash, summary.subject, message.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Commit as listed by the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    /// Full object id, used for further lookups
    pub id: String,
    /// Shortest unambiguous abbreviation, used in links
    pub hash: String,
    pub subject: String,
}

/// Read-only repository queries
///
/// All methods return [crate::error::Result<T>]; implementations map their
/// underlying errors into [crate::error::PrComposeError].
pub trait Repository {
    /// Name of the checked-out branch, `None` when HEAD is detached.
    fn current_branch(&self) -> Result<Option<String>>;

    /// Whether `name` resolves to a commit (branch, remote branch, tag or hash).
    fn ref_exists(&self, name: &str) -> Result<bool>;

    /// List commits reachable from `to_ref` but not from `from_ref`
    ///
    /// Returned newest first, the order `git log from..to` prints them.
    /// An empty list is not an error.
    ///
    /// # Example
    /// ```rust
    /// # use git_pr_compose::git::Repository;
    /// # fn example<R: Repository>(repo: &R) -> git_pr_compose::Result<()> {
    /// let commits = repo.list_commits("origin/develop", "HEAD")?;
    /// println!("{} commits ahead of develop", commits.len());
    /// # Ok(())
    /// # }
    /// ```
    fn list_commits(&self, from_ref: &str, to_ref: &str) -> Result<Vec<CommitSummary>>;

    /// Full message (subject and body) of the commit with the given full id.
    fn full_message(&self, id: &str) -> Result<String>;

    /// Configured URL of a remote.
    fn remote_url(&self, remote: &str) -> Result<String>;
}
