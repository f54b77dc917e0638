//! Request execution and engine fault decoding.
//!
//! Requests are sent exactly once; a non-success status is turned into
//! `ClientError::ApiError` carrying the engine's fault text when present.

use reqwest::{RequestBuilder, Response};
use serde::Deserialize;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Fault body returned by the engine on errors.
#[derive(Debug, Deserialize)]
struct Fault {
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    detail: Option<String>,
}

impl Fault {
    fn message(&self) -> Option<String> {
        match (&self.reason, &self.detail) {
            (Some(reason), Some(detail)) => Some(format!("{reason}: {detail}")),
            (Some(text), None) | (None, Some(text)) => Some(text.clone()),
            (None, None) => None,
        }
    }
}

/// Send a request and map non-success statuses to `ClientError::ApiError`.
///
/// `path` and `method` are only used for logging.
pub async fn send_request(builder: RequestBuilder, path: &str, method: &str) -> Result<Response> {
    debug!(method, path, "Sending engine request");

    let response = builder.send().await?;
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = serde_json::from_str::<Fault>(&body)
        .ok()
        .and_then(|fault| fault.message())
        .unwrap_or(body);

    debug!(status = status.as_u16(), path, "Engine request failed");

    Err(ClientError::ApiError {
        status: status.as_u16(),
        url,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_message_combines_reason_and_detail() {
        let fault: Fault = serde_json::from_str(
            r#"{"reason": "Operation Failed", "detail": "Entity not found: 42"}"#,
        )
        .unwrap();
        assert_eq!(
            fault.message().as_deref(),
            Some("Operation Failed: Entity not found: 42")
        );
    }

    #[test]
    fn test_fault_message_with_detail_only() {
        let fault: Fault = serde_json::from_str(r#"{"detail": "boom"}"#).unwrap();
        assert_eq!(fault.message().as_deref(), Some("boom"));
    }

    #[test]
    fn test_fault_message_empty() {
        let fault: Fault = serde_json::from_str("{}").unwrap();
        assert!(fault.message().is_none());
    }
}
