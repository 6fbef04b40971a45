use clap::Parser;

pub mod commands;
pub mod global;

pub use commands::Commands;
pub use global::{GlobalFlags, OutputFormat};

/// Top-level CLI parser for the `gobii` binary.
#[derive(Debug, Parser)]
#[command(name = "gobii", version, about = "Gobii browser-use task client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log every API request and response
    #[arg(long, global = true)]
    pub debug: bool,

    /// API key (overrides config and GOBII_API__KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// API root URL (overrides config)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Extra config file layered above .gobii/config.toml
    #[arg(long, global = true)]
    pub config: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            debug: self.debug,
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            config: self.config.clone(),
        }
    }
}
