//! Client error types.

use thiserror::Error;

/// Boxed transport-level failure cause.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Every way a [`submit`](crate::TaskServiceClient::submit) or
/// [`fetch`](crate::TaskServiceClient::fetch) call can fail.
///
/// Each variant is terminal for the call that produced it. Retrying means
/// calling the operation again.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No API key configured, or the configured key is empty.
    #[error("API key is missing; configure an API key before calling the task API")]
    MissingApiKey,

    /// The request could not be constructed (bad base URL or header value),
    /// or the response was not a usable HTTP response.
    #[error("received an invalid response from the server")]
    InvalidResponse,

    /// The service answered with a status outside 200–299.
    #[error("server returned status {status}")]
    Server {
        /// HTTP status code returned by the service.
        status: u16,
    },

    /// The request payload could not be encoded, or the response body is not
    /// a valid task record.
    #[error("failed to decode response: {0}")]
    Decoding(#[source] serde_json::Error),

    /// No response was received at all (DNS, connect, TLS, timeout, body read).
    #[error("network error: {0}")]
    Network(#[source] BoxError),
}

impl ApiError {
    /// HTTP status carried by [`ApiError::Server`].
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status } => Some(*status),
            _ => None,
        }
    }

    /// Configuration problem the caller must fix before retrying.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingApiKey)
    }

    /// Failure that may go away on a fresh attempt.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Server { status } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

/// Variants compare by kind; `Server` also compares the status code.
/// Underlying causes are never compared.
impl PartialEq for ApiError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::MissingApiKey, Self::MissingApiKey)
            | (Self::InvalidResponse, Self::InvalidResponse)
            | (Self::Decoding(_), Self::Decoding(_))
            | (Self::Network(_), Self::Network(_)) => true,
            (Self::Server { status: lhs }, Self::Server { status: rhs }) => lhs == rhs,
            _ => false,
        }
    }
}
