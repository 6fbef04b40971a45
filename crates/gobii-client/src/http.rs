//! Shared HTTP response helpers.
//!
//! Splits response handling into the same three checkpoints for every
//! operation: read the body (transport failure → [`ApiError::Network`]),
//! validate the status (non-2xx → [`ApiError::Server`]), and decode the task
//! record (bad JSON → [`ApiError::Decoding`]).

use gobii_core::TaskRecord;
use reqwest::StatusCode;

use crate::error::ApiError;

/// Drain a response into its status and full body.
pub async fn read_response(resp: reqwest::Response) -> Result<(StatusCode, Vec<u8>), ApiError> {
    let status = resp.status();
    let body = resp
        .bytes()
        .await
        .map_err(|e| ApiError::Network(e.into()))?;
    Ok((status, body.to_vec()))
}

/// Accept 200–299, reject everything else with the exact status code.
pub fn check_status(status: StatusCode) -> Result<(), ApiError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Server {
            status: status.as_u16(),
        })
    }
}

/// Parse a response body as a task record.
pub fn decode_task(body: &[u8]) -> Result<TaskRecord, ApiError> {
    serde_json::from_slice(body).map_err(ApiError::Decoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[rstest]
    #[case(200)]
    #[case(201)]
    #[case(204)]
    #[case(299)]
    fn success_range_is_accepted(#[case] code: u16) {
        let status = StatusCode::from_u16(code).unwrap();
        assert!(check_status(status).is_ok());
    }

    #[rstest]
    #[case(199)]
    #[case(300)]
    #[case(304)]
    #[case(401)]
    #[case(404)]
    #[case(429)]
    #[case(500)]
    fn other_statuses_are_server_errors(#[case] code: u16) {
        let status = StatusCode::from_u16(code).unwrap();
        assert_eq!(
            check_status(status).unwrap_err(),
            ApiError::Server { status: code }
        );
    }

    #[tokio::test]
    async fn read_response_keeps_status_and_body() {
        let resp = mock_response(404, r#"{"detail":"not found"}"#);
        let (status, body) = read_response(resp).await.unwrap();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, br#"{"detail":"not found"}"#);
    }

    #[test]
    fn decode_task_accepts_record() {
        let task = decode_task(br#"{"id":"abc123","status":"pending"}"#).unwrap();
        assert_eq!(task.id.as_deref(), Some("abc123"));
    }

    #[rstest]
    #[case(&b"not json"[..])]
    #[case(&b""[..])]
    #[case(&b"[1,2,3]"[..])]
    #[case(&br#"{"id": 42}"#[..])]
    #[case(&br#"{"status": "exploded"}"#[..])]
    fn decode_task_rejects_malformed_bodies(#[case] body: &[u8]) {
        assert!(matches!(decode_task(body), Err(ApiError::Decoding(_))));
    }
}
