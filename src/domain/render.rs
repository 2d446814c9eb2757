use crate::domain::commit::{CommitType, ParsedCommit, BREAKING_ICON, UNCATEGORIZED_ICON};
use crate::domain::remote::RepoUrl;

/// Icon shown in front of a commit line.
pub fn icon_for(commit: &ParsedCommit) -> &'static str {
    if commit.is_breaking {
        BREAKING_ICON
    } else if commit.commit_type == CommitType::Other {
        UNCATEGORIZED_ICON
    } else {
        commit.commit_type.label().icon
    }
}

/// Render one Markdown list entry: `- <icon> [<subject>](<base>/commit/<hash>)`
pub fn render_line(commit: &ParsedCommit, base_url: &RepoUrl) -> String {
    format!(
        "- {} [{}]({})",
        icon_for(commit),
        commit.clean_subject,
        base_url.commit_url(&commit.commit.hash)
    )
}
