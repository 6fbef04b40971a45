use gobii_client::TaskServiceClient;
use gobii_core::TaskRecord;

use crate::cli::GlobalFlags;
use crate::cli::commands::SubmitArgs;
use crate::output::output;

/// Handle `gobii submit`.
pub async fn handle(
    args: &SubmitArgs,
    client: &TaskServiceClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let task = build_task(args);
    let created = client.submit(&task).await?;
    output(&created, flags.format)
}

fn build_task(args: &SubmitArgs) -> TaskRecord {
    let mut task = TaskRecord::new(args.prompt.clone());
    if let Some(agent) = &args.agent {
        task = task.with_agent(agent.clone());
    }
    if let Some(schema) = &args.output_schema {
        task = task.with_output_schema(schema.clone());
    }
    if let Some(wait) = args.wait {
        task = task.with_wait(wait);
    }
    task
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_task_copies_only_given_fields() {
        let args = SubmitArgs {
            prompt: "find the pricing page".into(),
            agent: None,
            output_schema: Some("{\"type\":\"string\"}".into()),
            wait: Some(10),
        };
        let task = build_task(&args);

        assert!(task.id.is_none());
        assert_eq!(task.prompt.as_deref(), Some("find the pricing page"));
        assert!(task.agent.is_none());
        assert_eq!(task.output_schema.as_deref(), Some("{\"type\":\"string\"}"));
        assert_eq!(task.wait, Some(10));
    }
}
