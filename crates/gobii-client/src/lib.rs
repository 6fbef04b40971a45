//! # gobii-client
//!
//! Async client for the Gobii browser-use task API.
//!
//! Two operations are exposed by [`TaskServiceClient`]:
//! - [`submit`](TaskServiceClient::submit): `POST {base}/tasks/browser-use/`
//! - [`fetch`](TaskServiceClient::fetch): `GET {base}/tasks/browser-use/{id}/result/`
//!
//! Every failure surfaces as an [`ApiError`]. The client never retries, never
//! caches and defines no timeout of its own; deadlines and connection pooling
//! belong to the [`Transport`] it is built with.
//!
//! ```no_run
//! use gobii_client::TaskServiceClient;
//! use gobii_core::TaskRecord;
//!
//! # async fn example() -> Result<(), gobii_client::ApiError> {
//! let client = TaskServiceClient::new();
//! client.set_api_key("gobii-key").await;
//!
//! let submitted = client
//!     .submit(&TaskRecord::new("summarize this page").with_agent("research-bot"))
//!     .await?;
//! if let Some(id) = submitted.id.as_deref() {
//!     let latest = client.fetch(id).await?;
//!     println!("{id}: {:?}", latest.status);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod credentials;
mod debug;
mod error;
mod http;
mod transport;

pub use client::{API_KEY_HEADER, DEFAULT_BASE_URL, TaskServiceClient};
pub use credentials::CredentialStore;
pub use debug::{DebugSink, RequestEvent, ResponseEvent, TracingSink};
pub use error::{ApiError, BoxError};
pub use transport::Transport;
