//! Request/response diagnostics hooks.
//!
//! A [`DebugSink`] sees every outgoing request and every received response.
//! Sinks are observers only: nothing they do changes the outcome of a call.

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode, Url};

use crate::client::API_KEY_HEADER;

/// Outgoing request, captured right before it is handed to the transport.
#[derive(Debug)]
pub struct RequestEvent<'a> {
    pub method: &'a Method,
    pub url: &'a Url,
    pub headers: &'a HeaderMap,
    /// `None` for requests without a body.
    pub body: Option<&'a [u8]>,
}

/// Response as received, before status validation and decoding.
#[derive(Debug)]
pub struct ResponseEvent<'a> {
    pub method: &'a Method,
    pub url: &'a Url,
    pub status: StatusCode,
    pub body: &'a [u8],
}

/// Receiver for request/response diagnostics.
pub trait DebugSink: Send + Sync {
    fn on_request(&self, event: &RequestEvent<'_>);

    fn on_response(&self, event: &ResponseEvent<'_>);
}

/// Emits each event as a `tracing` debug record under the `gobii::http`
/// target. The API key header is redacted.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DebugSink for TracingSink {
    fn on_request(&self, event: &RequestEvent<'_>) {
        let headers = redacted_headers(event.headers);
        let body = event.body.map(String::from_utf8_lossy);
        tracing::debug!(
            target: "gobii::http",
            method = %event.method,
            url = %event.url,
            headers = ?headers,
            body = body.as_deref().unwrap_or("<none>"),
            "api request"
        );
    }

    fn on_response(&self, event: &ResponseEvent<'_>) {
        tracing::debug!(
            target: "gobii::http",
            method = %event.method,
            url = %event.url,
            status = event.status.as_u16(),
            body = %String::from_utf8_lossy(event.body),
            "api response"
        );
    }
}

/// Header name/value pairs with the API key masked.
pub(crate) fn redacted_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let shown = if name.as_str().eq_ignore_ascii_case(API_KEY_HEADER) {
                String::from("<redacted>")
            } else {
                value.to_str().unwrap_or("<binary>").to_string()
            };
            (name.as_str().to_string(), shown)
        })
        .collect()
}
