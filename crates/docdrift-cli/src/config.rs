//! Configuration for the docdrift CLI
//!
//! Every constant of the pipeline (repository root, CRD subdirectory, docs
//! repository, model parameters, token ceilings) is a flag with a default;
//! the credential and CI context come from environment variables.

use std::path::PathBuf;

use clap::Parser;

const DEFAULT_CRD_DIR: &str = "config/crd/bases/";
const DEFAULT_DOCS_REPO: &str = "https://github.com/openshift/openshift-docs.git";
const DEFAULT_DOCS_BRANCH: &str = "enterprise-4.19";
const DEFAULT_DOCS_BASE_URL: &str =
    "https://github.com/openshift/openshift-docs/blob/enterprise-4.19";
const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 2000;
const DEFAULT_PROMPT_TOKEN_CEILING: usize = 180_000;

/// docdrift - recommend documentation updates for CRD schema changes
#[derive(Parser, Debug, Clone)]
#[command(name = "docdrift")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Root of the git repository to analyze
    #[arg(short, long, default_value = ".")]
    pub repo_root: PathBuf,

    /// Subdirectory containing CRD schema files; only diff hunks under this
    /// prefix are analyzed
    #[arg(long, default_value = DEFAULT_CRD_DIR)]
    pub crd_dir: String,

    /// Documentation repository to clone and search
    #[arg(long, default_value = DEFAULT_DOCS_REPO)]
    pub docs_repo: String,

    /// Branch of the documentation repository
    #[arg(long, default_value = DEFAULT_DOCS_BRANCH)]
    pub docs_branch: String,

    /// Base URL prepended to matched file paths when constructing links
    #[arg(long, default_value = DEFAULT_DOCS_BASE_URL)]
    pub docs_base_url: String,

    /// Model identifier for the Anthropic messages API
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Maximum output tokens requested from the model
    #[arg(long, default_value_t = DEFAULT_MAX_OUTPUT_TOKENS)]
    pub max_output_tokens: u32,

    /// Estimated-prompt-token ceiling; the run aborts before the network call
    /// when the prompt estimate (chars / 4) exceeds this
    #[arg(long, default_value_t = DEFAULT_PROMPT_TOKEN_CEILING)]
    pub prompt_token_ceiling: usize,

    /// Anthropic API key (required)
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Running under CI: diff HEAD against the fetched base branch instead
    /// of the local fallback chain
    #[arg(long, env = "CI", default_value = "false")]
    pub ci: bool,

    /// Base branch declared by the CI environment
    #[arg(long, env = "GITHUB_BASE_REF")]
    pub base_branch: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Default for Config {
    /// Mirrors the clap defaults, so programmatic construction (tests, and
    /// embedding the pipeline as a library) behaves like an argument-less
    /// invocation.
    fn default() -> Self {
        Self {
            repo_root: PathBuf::from("."),
            crd_dir: DEFAULT_CRD_DIR.to_string(),
            docs_repo: DEFAULT_DOCS_REPO.to_string(),
            docs_branch: DEFAULT_DOCS_BRANCH.to_string(),
            docs_base_url: DEFAULT_DOCS_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            prompt_token_ceiling: DEFAULT_PROMPT_TOKEN_CEILING,
            api_key: None,
            ci: false,
            base_branch: None,
            verbose: false,
            quiet: false,
        }
    }
}

impl Config {
    /// Base branch to compare against in CI, defaulting to trunk
    #[must_use]
    pub fn base_branch(&self) -> &str {
        self.base_branch.as_deref().unwrap_or("main")
    }

    /// The API credential.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingApiKey` when neither the flag nor the
    /// `ANTHROPIC_API_KEY` environment variable supplied one.
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the credential is absent or the repository root
    /// does not exist.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api_key()?;
        if !self.repo_root.is_dir() {
            return Err(ConfigError::RepoRootNotFound(self.repo_root.clone()));
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No API credential supplied
    #[error("ANTHROPIC_API_KEY environment variable is required")]
    MissingApiKey,

    /// Repository root path not found
    #[error("Repository root not found: {0}")]
    RepoRootNotFound(PathBuf),
}
