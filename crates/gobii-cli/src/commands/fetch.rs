use gobii_client::TaskServiceClient;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `gobii fetch`.
pub async fn handle(id: &str, client: &TaskServiceClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    let task = client.fetch(id).await?;
    output(&task, flags.format)
}
