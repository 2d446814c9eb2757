use thiserror::Error;

/// Unified error type for git-pr-compose operations
#[derive(Error, Debug)]
pub enum PrComposeError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Required tool not found: {0}")]
    ToolMissing(String),

    #[error("Branch not found: {0}")]
    BranchNotFound(String),

    #[error("No commits between '{from}' and '{to}'")]
    EmptyRange { from: String, to: String },

    #[error("HEAD is detached; check out a branch before creating a pull request")]
    DetachedHead,

    #[error("Remote error: {0}")]
    Remote(String),

    #[error("Pull request creation failed: {0}")]
    PullRequest(String),
}

/// Convenience type alias for Results in git-pr-compose
pub type Result<T> = std::result::Result<T, PrComposeError>;

impl PrComposeError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        PrComposeError::Config(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        PrComposeError::Remote(msg.into())
    }

    /// Create a pull request creation error with context
    pub fn pull_request(msg: impl Into<String>) -> Self {
        PrComposeError::PullRequest(msg.into())
    }

    /// True for failures detected before any commit is processed.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            PrComposeError::ToolMissing(_)
                | PrComposeError::BranchNotFound(_)
                | PrComposeError::EmptyRange { .. }
                | PrComposeError::DetachedHead
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PrComposeError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_git() {
        let err: PrComposeError = git2::Error::from_str("object not found").into();
        assert!(err.to_string().starts_with("Git operation failed"));
    }

    #[test]
    fn test_empty_range_names_both_refs() {
        let err = PrComposeError::EmptyRange {
            from: "origin/main".to_string(),
            to: "HEAD".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("origin/main"));
        assert!(msg.contains("HEAD"));
    }

    #[test]
    fn test_precondition_classification() {
        let preconditions = vec![
            PrComposeError::ToolMissing("gh".to_string()),
            PrComposeError::BranchNotFound("develop".to_string()),
            PrComposeError::EmptyRange {
                from: "main".to_string(),
                to: "HEAD".to_string(),
            },
            PrComposeError::DetachedHead,
        ];
        for err in preconditions {
            assert!(err.is_precondition(), "{} should be a precondition", err);
        }

        let others = vec![
            PrComposeError::config("x"),
            PrComposeError::remote("x"),
            PrComposeError::pull_request("x"),
        ];
        for err in others {
            assert!(!err.is_precondition(), "{} should not be a precondition", err);
        }
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (PrComposeError::config("x"), "Configuration error"),
            (PrComposeError::remote("x"), "Remote error"),
            (PrComposeError::pull_request("x"), "Pull request creation failed"),
            (
                PrComposeError::ToolMissing("gh".to_string()),
                "Required tool not found",
            ),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
