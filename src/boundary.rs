use std::fmt;

/// Non-fatal conditions noticed while preparing a pull request.
/// These are reported to the user but never abort the run.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Some commits do not follow the conventional format and land in 'Other Changes'
    NonConventionalCommits { count: usize, total: usize },
    /// The remote-tracking branch is missing, the local one is used instead
    LocalTargetBranch { remote: String, branch: String },
    /// HEAD is not on a branch
    DetachedHead,
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NonConventionalCommits { count, total } => {
                write!(
                    f,
                    "{} of {} commits are not conventional commits and will be listed under 'Other Changes'",
                    count, total
                )
            }
            BoundaryWarning::LocalTargetBranch { remote, branch } => {
                write!(
                    f,
                    "'{}/{}' not found, comparing against local branch '{}' which may be out of date",
                    remote, branch, branch
                )
            }
            BoundaryWarning::DetachedHead => {
                write!(f, "HEAD is detached; a pull request cannot be created from it")
            }
        }
    }
}
