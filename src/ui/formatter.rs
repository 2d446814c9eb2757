//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user interaction.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::{destination, Destination, ParsedCommit, PrDocument};

/// Number of commits listed before the summary is cut short
const COMMIT_PREVIEW_LIMIT: usize = 10;

/// Subjects longer than this are truncated in the commit summary
const SUBJECT_PREVIEW_WIDTH: usize = 60;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

fn truncate(subject: &str, width: usize) -> String {
    if subject.chars().count() > width {
        let cut: String = subject.chars().take(width).collect();
        format!("{}…", cut)
    } else {
        subject.to_string()
    }
}

/// Short tag describing where a commit will be listed.
pub fn destination_tag(commit: &ParsedCommit) -> String {
    match destination(commit) {
        Destination::Breaking => "breaking".to_string(),
        Destination::Uncategorized => "other".to_string(),
        Destination::ScopeGroup(scope) => format!("{}/{}", commit.commit_type, scope),
    }
}

/// Display the commits that will be described.
///
/// Shows up to 10 commits; the remainder is summarised as a count.
pub fn display_commit_summary(commits: &[ParsedCommit], compare_ref: &str) {
    println!(
        "\n{}",
        style(format!("{} commits ahead of '{}'", commits.len(), compare_ref)).bold()
    );

    for (i, commit) in commits.iter().take(COMMIT_PREVIEW_LIMIT).enumerate() {
        println!(
            "  {}. {} {} {}",
            i + 1,
            style(&commit.commit.hash).cyan(),
            truncate(&commit.commit.subject, SUBJECT_PREVIEW_WIDTH),
            style(format!("[{}]", destination_tag(commit))).dim()
        );
    }

    if commits.len() > COMMIT_PREVIEW_LIMIT {
        println!(
            "  ... and {} more commits",
            commits.len() - COMMIT_PREVIEW_LIMIT
        );
    }
}

/// Print the rendered pull request, title first.
pub fn display_document(document: &PrDocument) {
    println!("\n{} {}\n", style("Title:").bold(), document.title);
    println!("{}", document.body);
}
