//! Task service client.

use std::sync::Arc;

use gobii_core::TaskRecord;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Url};

use crate::credentials::CredentialStore;
use crate::debug::{DebugSink, RequestEvent, ResponseEvent};
use crate::error::ApiError;
use crate::http::{check_status, decode_task, read_response};
use crate::transport::Transport;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://gobii.ai/api/v1";

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-Api-Key";

const TASKS_PATH: &str = "tasks/browser-use";

/// Client for submitting browser-use tasks and polling their results.
///
/// Cheap to share: wrap it in an `Arc` and call it from as many tasks as
/// needed. The API key is the only mutable state and lives in a
/// [`CredentialStore`].
pub struct TaskServiceClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    credentials: CredentialStore,
    debug_sink: Option<Arc<dyn DebugSink>>,
}

impl Default for TaskServiceClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskServiceClient {
    /// Create a client against [`DEFAULT_BASE_URL`] using a default
    /// `reqwest::Client` (no timeout).
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("gobii-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client should build");
        Self::with_transport(Arc::new(http))
    }

    /// Create a client that sends requests through `transport`.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: CredentialStore::new(),
            debug_sink: None,
        }
    }

    /// Point the client at a different API root (e.g. a staging server).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Report every request and response to `sink`.
    #[must_use]
    pub fn debug_sink(mut self, sink: Arc<dyn DebugSink>) -> Self {
        self.debug_sink = Some(sink);
        self
    }

    pub async fn set_api_key(&self, key: impl Into<String>) {
        self.credentials.set(key).await;
    }

    pub async fn api_key(&self) -> Option<String> {
        self.credentials.get().await
    }

    /// Submit a new task. Returns the record as stored by the service,
    /// normally with `id` and `status` filled in.
    ///
    /// # Errors
    ///
    /// - [`ApiError::MissingApiKey`] if no non-empty key is set; nothing is sent.
    /// - [`ApiError::InvalidResponse`] if the request cannot be built.
    /// - [`ApiError::Decoding`] if `task` cannot be encoded or the response is not a task.
    /// - [`ApiError::Network`] if no response arrives.
    /// - [`ApiError::Server`] for a status outside 200–299.
    pub async fn submit(&self, task: &TaskRecord) -> Result<TaskRecord, ApiError> {
        let api_key = self.require_api_key().await?;
        let url = self.endpoint(&[])?;
        let body = serde_json::to_vec(task).map_err(ApiError::Decoding)?;

        tracing::debug!(prompt_len = task.prompt.as_ref().map_or(0, String::len), "submitting task");
        let record = self.execute(Method::POST, url, &api_key, Some(body)).await?;
        tracing::debug!(id = record.id.as_deref(), status = ?record.status, "task submitted");
        Ok(record)
    }

    /// Fetch the current state of task `id`.
    ///
    /// Each call returns a fresh record; earlier records are never updated.
    ///
    /// # Errors
    ///
    /// Same as [`submit`](Self::submit), minus request encoding.
    pub async fn fetch(&self, id: &str) -> Result<TaskRecord, ApiError> {
        let api_key = self.require_api_key().await?;
        let url = self.endpoint(&[id, "result"])?;

        let record = self.execute(Method::GET, url, &api_key, None).await?;
        tracing::debug!(id, status = ?record.status, "task fetched");
        Ok(record)
    }

    async fn require_api_key(&self) -> Result<String, ApiError> {
        match self.credentials.get().await {
            Some(key) if !key.is_empty() => Ok(key),
            _ => {
                tracing::warn!("task API called without an API key");
                Err(ApiError::MissingApiKey)
            }
        }
    }

    /// `{base}/tasks/browser-use/{segments...}/`, each segment percent-encoded.
    ///
    /// Empty, `.` and `..` segments are rejected: URL parsing would collapse
    /// them (even percent-encoded) and move the request off the task endpoint.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut raw = format!("{}/{TASKS_PATH}/", self.base_url.trim_end_matches('/'));
        for segment in segments {
            if matches!(*segment, "" | "." | "..") {
                tracing::warn!(segment, "refusing task API path segment");
                return Err(ApiError::InvalidResponse);
            }
            raw.push_str(&urlencoding::encode(segment));
            raw.push('/');
        }
        Url::parse(&raw).map_err(|error| {
            tracing::warn!(%error, url = %raw, "failed to build task API url");
            ApiError::InvalidResponse
        })
    }

    fn headers(api_key: &str) -> Result<HeaderMap, ApiError> {
        let mut key = HeaderValue::from_str(api_key).map_err(|error| {
            tracing::warn!(%error, "API key is not a valid header value");
            ApiError::InvalidResponse
        })?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(HeaderName::from_static("x-api-key"), key);
        Ok(headers)
    }

    async fn execute(
        &self,
        method: Method,
        url: Url,
        api_key: &str,
        body: Option<Vec<u8>>,
    ) -> Result<TaskRecord, ApiError> {
        let mut request = reqwest::Request::new(method.clone(), url.clone());
        *request.headers_mut() = Self::headers(api_key)?;

        if let Some(sink) = &self.debug_sink {
            sink.on_request(&RequestEvent {
                method: &method,
                url: &url,
                headers: request.headers(),
                body: body.as_deref(),
            });
        }
        if let Some(body) = body {
            *request.body_mut() = Some(body.into());
        }

        let response = self.transport.send(request).await.map_err(|error| {
            tracing::warn!(%error, %method, %url, "task API request failed");
            ApiError::Network(error)
        })?;
        let (status, body) = read_response(response).await?;

        if let Some(sink) = &self.debug_sink {
            sink.on_response(&ResponseEvent {
                method: &method,
                url: &url,
                status,
                body: &body,
            });
        }

        check_status(status)?;
        decode_task(&body)
    }
}
