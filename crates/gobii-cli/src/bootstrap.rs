use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use gobii_client::{TaskServiceClient, TracingSink};
use gobii_config::GobiiConfig;

use crate::cli::GlobalFlags;

pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<GobiiConfig> {
    match &flags.config {
        Some(path) => GobiiConfig::load_with_file(Path::new(path))
            .with_context(|| format!("failed to load config file {path}")),
        None => GobiiConfig::load_with_dotenv().context("failed to load configuration"),
    }
}

/// Build a task client from config, with command-line flags taking precedence.
pub async fn build_client(
    config: &GobiiConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<TaskServiceClient> {
    let mut http = reqwest::Client::builder()
        .user_agent(concat!("gobii-cli/", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = config.api.timeout() {
        http = http.timeout(timeout);
    }
    let http = http.build().context("failed to build HTTP client")?;

    let base_url = flags
        .base_url
        .clone()
        .unwrap_or_else(|| config.api.base_url.clone());

    let mut client = TaskServiceClient::with_transport(Arc::new(http)).base_url(base_url);
    if flags.debug {
        client = client.debug_sink(Arc::new(TracingSink));
    }

    match flags.api_key.as_deref() {
        Some(key) => client.set_api_key(key).await,
        None => match config.api.require_key() {
            Ok(key) => client.set_api_key(key).await,
            Err(error) => tracing::warn!(%error, "no API key configured"),
        },
    }

    Ok(client)
}
