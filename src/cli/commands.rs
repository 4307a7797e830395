use crate::config::{DEFAULT_METADATA_PATH, DEFAULT_OUT_FILE};
use crate::report::BadgeProfile;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "audit-report")]
#[command(
    author,
    version,
    about = "Turn labeled tracker issues into a severity-ranked markdown audit report"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

/// Where issues come from and which ones to keep.
#[derive(Args, Clone)]
pub struct IssueSource {
    /// The target repository in the form 'owner/repo'
    pub repository: String,

    /// Only parse issues with these labels
    #[arg(required = true)]
    pub labels: Vec<String>,

    /// Read issues from a local JSON file instead of the GitHub API
    #[arg(long)]
    pub issues: Option<PathBuf>,

    /// GitHub token used for API requests
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub API base URL (for GitHub Enterprise)
    #[arg(long, env = "GITHUB_API_URL", default_value = crate::github::DEFAULT_API_URL)]
    pub api_url: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Get all issues from a repository and create a markdown report
    #[command(visible_alias = "gen")]
    Generate {
        #[command(flatten)]
        source: IssueSource,

        /// Path to the metadata file
        #[arg(short, long, default_value = DEFAULT_METADATA_PATH)]
        metadata: PathBuf,

        /// Path to the generated markdown report
        #[arg(short, long, default_value = DEFAULT_OUT_FILE)]
        out_file: PathBuf,

        /// Print the report instead of writing it
        #[arg(long)]
        stdout: bool,

        /// Badge color scheme
        #[arg(long, value_enum, default_value = "standard")]
        badge_profile: BadgeProfileArg,
    },

    /// Show how issues are classified without rendering a report
    Classify {
        #[command(flatten)]
        source: IssueSource,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum BadgeProfileArg {
    Standard,
    Muted,
}

impl From<BadgeProfileArg> for BadgeProfile {
    fn from(arg: BadgeProfileArg) -> Self {
        match arg {
            BadgeProfileArg::Standard => BadgeProfile::Standard,
            BadgeProfileArg::Muted => BadgeProfile::Muted,
        }
    }
}
