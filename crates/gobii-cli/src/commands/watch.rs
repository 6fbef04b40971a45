use std::time::Duration;

use anyhow::{Context, bail};
use gobii_client::TaskServiceClient;
use gobii_config::GobiiConfig;
use gobii_core::{TaskRecord, TaskStatus};

use crate::cli::GlobalFlags;
use crate::cli::commands::WatchArgs;
use crate::output::output;

/// Handle `gobii watch`.
pub async fn handle(
    args: &WatchArgs,
    client: &TaskServiceClient,
    config: &GobiiConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let interval = Duration::from_secs(
        args.interval
            .unwrap_or(config.general.poll_interval_secs)
            .max(1),
    );
    let max_polls = args.max_polls.unwrap_or(config.general.max_polls);

    let task = poll_until_terminal(client, &args.id, interval, max_polls, |task| {
        if !flags.quiet {
            let status = task.status.map_or("unknown", TaskStatus::as_str);
            eprintln!("{}: {status}", args.id);
        }
    })
    .await?;

    output(&task, flags.format)?;
    if task.status == Some(TaskStatus::Failed) {
        bail!(
            "task {} failed: {}",
            args.id,
            task.error_message.as_deref().unwrap_or("no error message")
        );
    }
    Ok(())
}

/// Re-fetch `id` every `interval` until its status is terminal.
///
/// `on_change` runs whenever the reported status differs from the previous
/// poll. A failed fetch ends the loop immediately.
pub async fn poll_until_terminal(
    client: &TaskServiceClient,
    id: &str,
    interval: Duration,
    max_polls: u32,
    mut on_change: impl FnMut(&TaskRecord),
) -> anyhow::Result<TaskRecord> {
    let mut last_status = None;
    for attempt in 1..=max_polls {
        let task = client
            .fetch(id)
            .await
            .with_context(|| format!("poll {attempt} of task {id} failed"))?;

        if attempt == 1 || task.status != last_status {
            on_change(&task);
            last_status = task.status;
        }
        if task.is_terminal() {
            return Ok(task);
        }
        if attempt < max_polls {
            tokio::time::sleep(interval).await;
        }
    }
    bail!("task {id} did not reach a final status after {max_polls} polls")
}
