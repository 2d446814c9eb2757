//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::boundary::BoundaryWarning;
use crate::cli::orchestration::Interaction;
use crate::domain::{ParsedCommit, PrDocument};
use crate::forge::PullRequest;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_commit_summary, display_document, display_error,
    display_status, display_success,
};

/// Read one line and fall back to `default` on empty input.
pub fn read_with_default<R: BufRead>(input: &mut R, default: &str) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    let line = line.trim();

    if line.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(line.to_string())
    }
}

/// Interpret a yes/no answer; anything but "y"/"yes" is a no.
pub fn is_yes(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer == "y" || answer == "yes"
}

/// Prompts for a value, showing the default in brackets.
///
/// # Returns
/// * `Ok(String)` - The entered value, or `default` if the user pressed Enter
/// * `Err` - If input error occurs
pub fn prompt_with_default(label: &str, default: &str) -> Result<String> {
    print!("{} [{}]: ", label, default);
    io::stdout().flush()?;

    read_with_default(&mut io::stdin().lock(), default)
}

/// Prompts user to confirm an action with a yes/no prompt.
///
/// Default is "no" if user presses Enter.
pub fn confirm_action(prompt: &str) -> Result<bool> {
    print!("\n{} (y/N): ", prompt);
    io::stdout().flush()?;

    let answer = read_with_default(&mut io::stdin().lock(), "n")?;
    Ok(is_yes(&answer))
}

/// Terminal implementation of the workflow's user interaction
#[derive(Debug, Default)]
pub struct TerminalInteraction;

impl Interaction for TerminalInteraction {
    fn warn(&self, warning: &BoundaryWarning) {
        display_boundary_warning(warning);
    }

    fn show_commits(&self, commits: &[ParsedCommit], compare_ref: &str) {
        display_commit_summary(commits, compare_ref);
    }

    fn prompt(&self, label: &str, default: &str) -> Result<String> {
        prompt_with_default(label, default)
    }

    fn confirm_create(&self, document: &PrDocument, request: &PullRequest) -> Result<bool> {
        display_document(document);
        let kind = if request.draft { "draft pull request" } else { "pull request" };
        confirm_action(&format!(
            "Create {} from '{}' into '{}'?",
            kind, request.head, request.base
        ))
    }
}
