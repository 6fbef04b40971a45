use clap::Parser;
use gobii_client::TaskServiceClient;
use gobii_config::GobiiConfig;

mod bootstrap;
mod cli;
mod commands;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("gobii error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let mut flags = cli.global_flags();

    match &cli.command {
        cli::Commands::Schema => {
            init_tracing(&flags)?;
            commands::schema::handle(&flags)
        }
        cli::Commands::Submit(args) => {
            let (_, client) = connect(&mut flags).await?;
            commands::submit::handle(args, &client, &flags).await
        }
        cli::Commands::Fetch { id } => {
            let (_, client) = connect(&mut flags).await?;
            commands::fetch::handle(id, &client, &flags).await
        }
        cli::Commands::Watch(args) => {
            let (config, client) = connect(&mut flags).await?;
            commands::watch::handle(args, &client, &config, &flags).await
        }
    }
}

/// Load config, start logging, and build the API client.
async fn connect(
    flags: &mut cli::GlobalFlags,
) -> anyhow::Result<(GobiiConfig, TaskServiceClient)> {
    let config = bootstrap::load_config(flags)?;
    flags.debug |= config.general.debug;
    init_tracing(flags)?;

    let client = bootstrap::build_client(&config, flags).await?;
    Ok((config, client))
}

fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let level = if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        "warn"
    };
    let directives = if flags.debug {
        format!("{level},gobii::http=debug")
    } else {
        level.to_string()
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("GOBII_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
