use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Submit a browser-use task.
    Submit(SubmitArgs),
    /// Fetch the current state of a task.
    Fetch {
        /// Task ID returned by `submit`.
        id: String,
    },
    /// Poll a task until it completes, fails or is cancelled.
    Watch(WatchArgs),
    /// Print the JSON schema of the task record.
    Schema,
}

#[derive(Clone, Debug, Args)]
pub struct SubmitArgs {
    /// Instruction for the agent.
    #[arg(long)]
    pub prompt: String,
    /// Agent name.
    #[arg(long)]
    pub agent: Option<String>,
    /// Expected shape of a structured result (JSON schema text).
    #[arg(long)]
    pub output_schema: Option<String>,
    /// Seconds the service may block before answering.
    #[arg(long)]
    pub wait: Option<i64>,
}

#[derive(Clone, Debug, Args)]
pub struct WatchArgs {
    /// Task ID returned by `submit`.
    pub id: String,
    /// Seconds between polls (defaults to `general.poll_interval_secs`).
    #[arg(long)]
    pub interval: Option<u64>,
    /// Maximum number of polls (defaults to `general.max_polls`).
    #[arg(long)]
    pub max_polls: Option<u32>,
}
