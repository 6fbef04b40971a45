//! HTTP transport seam.

use async_trait::async_trait;

use crate::error::BoxError;

/// Sends a fully built request and returns the raw response.
///
/// An `Err` means no response was obtained at all. HTTP error statuses are
/// returned as `Ok` and classified by the client. Timeouts, pooling and
/// cancellation are the implementation's concern.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: reqwest::Request) -> Result<reqwest::Response, BoxError>;
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn send(&self, request: reqwest::Request) -> Result<reqwest::Response, BoxError> {
        self.execute(request).await.map_err(BoxError::from)
    }
}
