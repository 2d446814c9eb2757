//! Pull request creation through an external command-line tool

use std::process::Command;

use crate::error::{PrComposeError, Result};

/// Command used to create pull requests
pub const GH_TOOL: &str = "gh";

/// Everything the forge needs to open a pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub base: String,
    pub head: String,
    pub title: String,
    pub body: String,
    pub draft: bool,
}

/// Creates pull requests on the hosting service
pub trait PullRequestCreator {
    /// Open the pull request, returning what the service reports (usually its URL).
    fn create(&self, request: &PullRequest) -> Result<String>;
}

/// Fail with [PrComposeError::ToolMissing] unless `tool` is on `PATH`.
pub fn ensure_tool(tool: &str) -> Result<()> {
    let path = which::which(tool).map_err(|_| PrComposeError::ToolMissing(tool.to_string()))?;
    tracing::debug!(tool, path = %path.display(), "found tool");
    Ok(())
}

/// Creates pull requests with the GitHub CLI (`gh pr create`)
#[derive(Debug, Clone)]
pub struct GhCli {
    program: String,
}

impl GhCli {
    pub fn new() -> Self {
        GhCli {
            program: GH_TOOL.to_string(),
        }
    }

    /// Use another executable with the same interface
    pub fn with_program(program: impl Into<String>) -> Self {
        GhCli {
            program: program.into(),
        }
    }

    /// Arguments passed after the program name
    pub fn args(request: &PullRequest) -> Vec<String> {
        let mut args = vec![
            "pr".to_string(),
            "create".to_string(),
            "--base".to_string(),
            request.base.clone(),
            "--head".to_string(),
            request.head.clone(),
            "--title".to_string(),
            request.title.clone(),
            "--body".to_string(),
            request.body.clone(),
        ];
        if request.draft {
            args.push("--draft".to_string());
        }
        args
    }
}

impl Default for GhCli {
    fn default() -> Self {
        Self::new()
    }
}

impl PullRequestCreator for GhCli {
    fn create(&self, request: &PullRequest) -> Result<String> {
        tracing::debug!(
            program = %self.program,
            base = %request.base,
            head = %request.head,
            draft = request.draft,
            "creating pull request"
        );

        let output = Command::new(&self.program)
            .args(Self::args(request))
            .output()
            .map_err(|e| {
                PrComposeError::pull_request(format!("Failed to run {}: {}", self.program, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PrComposeError::pull_request(format!(
                "{} exited with code {}: {}",
                self.program,
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
