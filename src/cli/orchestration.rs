//! Main workflow orchestration logic
//!
//! Runs the whole pipeline, from resolving the commit range to handing the
//! rendered document to the pull request creator. User interaction goes
//! through the [Interaction] trait so the workflow can run without a
//! terminal.

use anyhow::Result;

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{
    assemble, classify, destination, Commit, Destination, ParsedCommit, PrDocument, RepoUrl,
    TaskInfo,
};
use crate::error::PrComposeError;
use crate::forge::{PullRequest, PullRequestCreator};
use crate::git::Repository;

/// Arguments for the compose workflow
///
/// Mirrors the CLI arguments without depending on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComposeArgs {
    /// Branch the pull request targets, overrides the configured one
    pub target: Option<String>,

    /// Remote used for the target branch and commit links
    pub remote: Option<String>,

    pub title: Option<String>,

    pub task: Option<String>,

    /// Render and return the document without creating anything
    pub dry_run: bool,

    pub draft: bool,

    /// Skip prompts and confirmations
    pub assume_yes: bool,
}

/// What happened at the end of the workflow
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Dry run: the document was only rendered
    Previewed,
    /// The pull request was created; carries the creator's output
    Created(String),
    /// The user declined at the confirmation prompt
    Declined,
    /// The creator failed; the document is still available
    Failed(String),
}

/// Result of a completed workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub document: PrDocument,

    /// Branch the pull request targets
    pub base: String,

    /// Branch the commits come from, `None` on a detached HEAD
    pub head: Option<String>,

    pub commit_count: usize,

    pub outcome: Outcome,
}

/// Commits and context gathered before rendering
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRange {
    pub base: String,
    /// Ref the commits are compared against (`origin/main` or `main`)
    pub compare_ref: String,
    pub head: Option<String>,
    pub base_url: RepoUrl,
    pub commits: Vec<ParsedCommit>,
    pub warnings: Vec<BoundaryWarning>,
}

/// User-facing side of the workflow
pub trait Interaction {
    /// Report a non-fatal warning.
    fn warn(&self, warning: &BoundaryWarning);

    /// Show the commits about to be described.
    fn show_commits(&self, commits: &[ParsedCommit], compare_ref: &str);

    /// Ask for a value, returning `default` when the user enters nothing.
    fn prompt(&self, label: &str, default: &str) -> Result<String>;

    /// Show the rendered document and ask whether to create the pull request.
    fn confirm_create(&self, document: &PrDocument, request: &PullRequest) -> Result<bool>;
}

/// Resolve the range, read every commit and parse it.
///
/// Fails fast on every precondition: unknown target branch, empty range,
/// unreadable remote, or a detached HEAD outside dry-run mode.
pub fn prepare_range<R: Repository>(
    repo: &R,
    args: &ComposeArgs,
    config: &Config,
) -> std::result::Result<PreparedRange, PrComposeError> {
    let base = args
        .target
        .clone()
        .unwrap_or_else(|| config.pull_request.target_branch.clone());
    let remote = args
        .remote
        .clone()
        .unwrap_or_else(|| config.repository.remote.clone());

    let mut warnings = Vec::new();

    let remote_ref = format!("{}/{}", remote, base);
    let compare_ref = if repo.ref_exists(&remote_ref)? {
        remote_ref
    } else if repo.ref_exists(&base)? {
        warnings.push(BoundaryWarning::LocalTargetBranch {
            remote: remote.clone(),
            branch: base.clone(),
        });
        base.clone()
    } else {
        return Err(PrComposeError::BranchNotFound(base));
    };

    let head = repo.current_branch()?;
    if head.is_none() {
        warnings.push(BoundaryWarning::DetachedHead);
        if !args.dry_run {
            return Err(PrComposeError::DetachedHead);
        }
    }

    let summaries = repo.list_commits(&compare_ref, "HEAD")?;
    if summaries.is_empty() {
        return Err(PrComposeError::EmptyRange {
            from: compare_ref,
            to: head.unwrap_or_else(|| "HEAD".to_string()),
        });
    }

    let base_url = match &config.repository.base_url {
        Some(url) => RepoUrl::parse(url)?,
        None => RepoUrl::parse(&repo.remote_url(&remote)?)?,
    };

    let commits = summaries
        .into_iter()
        .map(|summary| -> std::result::Result<ParsedCommit, PrComposeError> {
            let message = repo.full_message(&summary.id)?;
            Ok(ParsedCommit::parse_with(
                Commit::new(summary.hash, summary.subject, message),
                &config.conventional_commits,
            ))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    // non-conventional commits marked breaking are listed as breaking instead
    let non_conventional = commits
        .iter()
        .filter(|c| destination(c) == Destination::Uncategorized)
        .count();
    if non_conventional > 0 {
        warnings.push(BoundaryWarning::NonConventionalCommits {
            count: non_conventional,
            total: commits.len(),
        });
    }

    tracing::debug!(
        base = %base,
        compare_ref = %compare_ref,
        base_url = %base_url,
        commits = commits.len(),
        "prepared commit range"
    );

    Ok(PreparedRange {
        base,
        compare_ref,
        head,
        base_url,
        commits,
        warnings,
    })
}

/// Classify the prepared commits and assemble the document.
pub fn compose_document(prepared: &PreparedRange, task: &TaskInfo, config: &Config) -> PrDocument {
    let classification = classify(&prepared.commits, &prepared.base_url);
    let branch = prepared.head.as_deref().unwrap_or("HEAD");
    let testing = config.template.testing_instructions_for(branch);
    assemble(&classification, task, &testing)
}

fn resolve_task_info<I: Interaction>(
    interaction: &I,
    args: &ComposeArgs,
    prepared: &PreparedRange,
    config: &Config,
) -> Result<TaskInfo> {
    let default_title = match &prepared.head {
        Some(branch) => branch.clone(),
        None => prepared
            .commits
            .first()
            .map(|c| c.clean_subject.clone())
            .unwrap_or_default(),
    };
    let interactive = !args.assume_yes && !args.dry_run;

    let title = match &args.title {
        Some(title) => title.clone(),
        None if interactive => interaction.prompt("Pull request title", &default_title)?,
        None => default_title,
    };

    let placeholder = &config.template.task_placeholder;
    let task_link = match &args.task {
        Some(task) => task.clone(),
        None if interactive => interaction.prompt("Task link", placeholder)?,
        None => placeholder.clone(),
    };

    Ok(TaskInfo { title, task_link })
}

/// Main compose workflow
///
/// 1. Resolve the commit range and parse the commits
/// 2. Report warnings and show the commits
/// 3. Collect title and task link
/// 4. Render the document
/// 5. Preview it (dry run) or confirm and create the pull request
pub fn run_compose_workflow<R, C, I>(
    args: &ComposeArgs,
    config: &Config,
    repo: &R,
    creator: &C,
    interaction: &I,
) -> Result<WorkflowResult>
where
    R: Repository,
    C: PullRequestCreator,
    I: Interaction,
{
    let prepared = prepare_range(repo, args, config)?;

    for warning in &prepared.warnings {
        tracing::debug!(%warning, "boundary warning");
        interaction.warn(warning);
    }
    interaction.show_commits(&prepared.commits, &prepared.compare_ref);

    let task = resolve_task_info(interaction, args, &prepared, config)?;
    let document = compose_document(&prepared, &task, config);

    let finish = |outcome: Outcome| WorkflowResult {
        document: document.clone(),
        base: prepared.base.clone(),
        head: prepared.head.clone(),
        commit_count: prepared.commits.len(),
        outcome,
    };

    if args.dry_run {
        return Ok(finish(Outcome::Previewed));
    }

    // prepare_range refuses a detached HEAD outside dry-run mode
    let head = prepared.head.clone().ok_or(PrComposeError::DetachedHead)?;
    let request = PullRequest {
        base: prepared.base.clone(),
        head,
        title: document.title.clone(),
        body: document.body.clone(),
        draft: args.draft || config.pull_request.draft,
    };

    if !args.assume_yes && !interaction.confirm_create(&document, &request)? {
        return Ok(finish(Outcome::Declined));
    }

    let outcome = match creator.create(&request) {
        Ok(output) => Outcome::Created(output),
        Err(e) => {
            tracing::debug!(error = %e, "pull request creation failed");
            Outcome::Failed(e.to_string())
        }
    };

    Ok(finish(outcome))
}
