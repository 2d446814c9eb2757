use crate::error::{PrComposeError, Result};
use crate::git::CommitSummary;
use git2::{Oid, Repository as Git2Repo, Sort};
use std::path::Path;
use tracing::{debug, warn};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    fn find_commit(&self, revspec: &str) -> Result<git2::Commit<'_>> {
        let object = self.repo.revparse_single(revspec)?;
        Ok(object.peel_to_commit()?)
    }
}

/// Abbreviated id that is unique within the repository (at least
/// `core.abbrev` characters, 7 by default).
fn short_hash(commit: &git2::Commit<'_>) -> Result<String> {
    let buf = commit.as_object().short_id()?;
    Ok(buf
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| commit.id().to_string()))
}

impl super::Repository for Git2Repository {
    fn current_branch(&self) -> Result<Option<String>> {
        if self.repo.head_detached()? {
            return Ok(None);
        }

        let head = self.repo.head()?;
        Ok(head.shorthand().map(str::to_string))
    }

    fn ref_exists(&self, name: &str) -> Result<bool> {
        match self.find_commit(name) {
            Ok(_) => Ok(true),
            Err(PrComposeError::Git(e))
                if e.code() == git2::ErrorCode::NotFound
                    || e.code() == git2::ErrorCode::InvalidSpec
                    || e.code() == git2::ErrorCode::Ambiguous =>
            {
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    fn list_commits(&self, from_ref: &str, to_ref: &str) -> Result<Vec<CommitSummary>> {
        let from = self.find_commit(from_ref)?.id();
        let to = self.find_commit(to_ref)?.id();

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(to)?;
        revwalk.hide(from)?;

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;

            commits.push(CommitSummary {
                id: oid.to_string(),
                hash: short_hash(&commit)?,
                subject: commit.summary().unwrap_or_default().to_string(),
            });
        }

        debug!(from_ref, to_ref, count = commits.len(), "listed commits");
        Ok(commits)
    }

    fn full_message(&self, id: &str) -> Result<String> {
        let commit = self.repo.find_commit(Oid::from_str(id)?)?;
        if commit.message().is_none() {
            warn!(id, "commit message is not valid UTF-8, replacing invalid bytes");
        }
        Ok(String::from_utf8_lossy(commit.message_bytes()).into_owned())
    }

    fn remote_url(&self, remote: &str) -> Result<String> {
        let found = self
            .repo
            .find_remote(remote)
            .map_err(|e| PrComposeError::remote(format!("Cannot find remote '{}': {}", remote, e)))?;

        let url = found
            .url()
            .map(str::to_string)
            .ok_or_else(|| PrComposeError::remote(format!("Remote '{}' has no URL", remote)))?;
        Ok(url)
    }
}
