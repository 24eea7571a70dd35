use clap::{Parser, Subcommand};
use gitlab_mr_deps::application::dto::OutputFormat;
use gitlab_mr_deps::config::Overrides;
use gitlab_mr_deps::merge_requests::domain::ProjectId;

/// Manage GitLab merge request dependencies (blocking merge requests)
#[derive(Parser, Debug)]
#[command(name = "mr-deps")]
#[command(version)]
#[command(about = "Manage GitLab merge request dependencies", long_about = None)]
pub struct Args {
    /// Path to a config file (defaults to ./mr-deps.config.yml when present)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// GitLab instance URL, e.g. https://gitlab.example.com
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Personal access token sent as PRIVATE-TOKEN
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Perform requests as another user (admin tokens only)
    #[arg(long, global = true)]
    pub sudo: Option<String>,

    /// Log requests and responses to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the merge requests blocking one or more merge requests
    List {
        /// Project ID or full path (group/project)
        #[arg(short, long)]
        project: ProjectId,

        /// Merge request IID; can be specified multiple times: -m 3 -m 5
        #[arg(short = 'm', long = "mr", value_name = "IID", required = true)]
        merge_requests: Vec<u64>,

        /// Output format: table or json
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Make a merge request depend on another one
    Create {
        /// Project ID or full path (group/project)
        #[arg(short, long)]
        project: ProjectId,

        /// IID of the merge request that gets blocked
        #[arg(short = 'm', long = "mr", value_name = "IID")]
        merge_request: u64,

        /// Global ID (not IID) of the blocking merge request
        #[arg(short, long = "blocking-id", value_name = "ID")]
        blocking_id: u64,
    },

    /// Remove a dependency between two merge requests
    Delete {
        /// Project ID or full path (group/project)
        #[arg(short, long)]
        project: ProjectId,

        /// IID of the blocked merge request
        #[arg(short = 'm', long = "mr", value_name = "IID")]
        merge_request: u64,

        /// IID of the blocking merge request
        #[arg(short, long = "blocking-mr", value_name = "IID")]
        blocking_merge_request: u64,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            base_url: self.url.clone(),
            token: self.token.clone(),
            sudo: self.sudo.clone(),
        }
    }
}
