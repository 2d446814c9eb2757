use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use git_pr_compose::cli::{run_compose_workflow, ComposeArgs, Outcome};
use git_pr_compose::config;
use git_pr_compose::forge::{ensure_tool, GhCli, GH_TOOL};
use git_pr_compose::git::Git2Repository;
use git_pr_compose::ui::{self, TerminalInteraction};

#[derive(clap::Parser)]
#[command(
    name = "git-pr-compose",
    version,
    about = "Compose a pull request description from conventional commits"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Branch the pull request targets")]
    target: Option<String>,

    #[arg(short, long, help = "Remote holding the target branch")]
    remote: Option<String>,

    #[arg(long, help = "Pull request title")]
    title: Option<String>,

    #[arg(long, help = "Task link or identifier for the task section")]
    task: Option<String>,

    #[arg(long, help = "Print the description instead of creating a pull request")]
    dry_run: bool,

    #[arg(long, help = "Create the pull request as a draft")]
    draft: bool,

    #[arg(short = 'y', long = "yes", help = "Skip prompts and confirmation")]
    assume_yes: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    if !args.dry_run {
        if let Err(e) = ensure_tool(GH_TOOL) {
            ui::display_error(&format!("{}. Install the GitHub CLI or use --dry-run", e));
            std::process::exit(1);
        }
    }

    let repo = match Git2Repository::open(".") {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let compose_args = ComposeArgs {
        target: args.target,
        remote: args.remote,
        title: args.title,
        task: args.task,
        dry_run: args.dry_run,
        draft: args.draft,
        assume_yes: args.assume_yes,
    };

    let result = match run_compose_workflow(
        &compose_args,
        &config,
        &repo,
        &GhCli::new(),
        &TerminalInteraction,
    ) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    match result.outcome {
        Outcome::Previewed => {
            ui::display_status("Dry run: no pull request created");
            ui::display_document(&result.document);
        }
        Outcome::Created(output) => {
            ui::display_success(&format!(
                "Pull request created for {} commits: {}",
                result.commit_count, output
            ));
        }
        Outcome::Declined => {
            println!("Pull request creation cancelled by user.");
        }
        Outcome::Failed(message) => {
            ui::display_error(&format!("Failed to create pull request: {}", message));
            ui::display_status("Generated description:");
            ui::display_document(&result.document);
            std::process::exit(1);
        }
    }

    Ok(())
}
