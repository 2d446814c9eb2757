use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{PrComposeError, Result};

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "prcompose.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE: &str = ".prcompose.toml";

/// Represents the complete configuration for git-pr-compose.
///
/// Contains repository settings, pull request defaults, conventional commit
/// settings and the document template.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub repository: RepositoryConfig,

    #[serde(default)]
    pub pull_request: PullRequestConfig,

    #[serde(default)]
    pub conventional_commits: ConventionalCommitsConfig,

    #[serde(default)]
    pub template: TemplateConfig,
}

fn default_remote() -> String {
    "origin".to_string()
}

/// Where commit links point.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RepositoryConfig {
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Overrides the URL derived from the remote
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        RepositoryConfig {
            remote: default_remote(),
            base_url: None,
        }
    }
}

fn default_target_branch() -> String {
    "main".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PullRequestConfig {
    #[serde(default = "default_target_branch")]
    pub target_branch: String,

    #[serde(default)]
    pub draft: bool,
}

impl Default for PullRequestConfig {
    fn default() -> Self {
        PullRequestConfig {
            target_branch: default_target_branch(),
            draft: false,
        }
    }
}

/// Returns the default list of breaking change markers.
fn default_breaking_change_markers() -> Vec<String> {
    vec!["BREAKING CHANGE:".to_string()]
}

/// Configuration for conventional commit analysis.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ConventionalCommitsConfig {
    /// Literal markers searched for in the full commit message
    #[serde(default = "default_breaking_change_markers")]
    pub breaking_change_markers: Vec<String>,

    /// Treat `type!:` subjects as breaking even without a marker
    #[serde(default)]
    pub bang_is_breaking: bool,
}

impl Default for ConventionalCommitsConfig {
    fn default() -> Self {
        ConventionalCommitsConfig {
            breaking_change_markers: default_breaking_change_markers(),
            bang_is_breaking: false,
        }
    }
}

fn default_task_placeholder() -> String {
    "N/A".to_string()
}

fn default_testing_instructions() -> String {
    "git fetch origin\ngit checkout {branch}".to_string()
}

/// Text blocks used when assembling the document.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TemplateConfig {
    /// Used as the task reference when none is given
    #[serde(default = "default_task_placeholder")]
    pub task_placeholder: String,

    /// Body of the testing code block, `{branch}` is replaced with the source branch
    #[serde(default = "default_testing_instructions")]
    pub testing_instructions: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        TemplateConfig {
            task_placeholder: default_task_placeholder(),
            testing_instructions: default_testing_instructions(),
        }
    }
}

impl TemplateConfig {
    /// Testing snippet with the source branch filled in.
    pub fn testing_instructions_for(&self, branch: &str) -> String {
        self.testing_instructions.replace("{branch}", branch)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `prcompose.toml` in current directory
/// 3. `.prcompose.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        Path::new(path).to_path_buf()
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        Path::new(LOCAL_CONFIG_FILE).to_path_buf()
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(USER_CONFIG_FILE);
        if user_path.exists() {
            user_path
        } else {
            tracing::debug!("no configuration file found, using defaults");
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path).map_err(|e| {
        PrComposeError::config(format!("cannot read {}: {}", path.display(), e))
    })?;

    parse_config(&config_str)
}

/// Parse configuration from TOML text.
pub fn parse_config(text: &str) -> Result<Config> {
    toml::from_str(text).map_err(|e| PrComposeError::config(e.to_string()))
}
