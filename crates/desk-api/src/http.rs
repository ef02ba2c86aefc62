//! Shared HTTP response helpers.
//!
//! Maps non-success statuses onto [`ApiError`] so the endpoint modules only
//! build requests and decode bodies.

use crate::error::ApiError;

/// Check an HTTP response for error statuses.
///
/// Returns the response unchanged on success. Otherwise:
/// - **401** → [`ApiError::Unauthorized`]
/// - **404** → [`ApiError::NotFound`]
/// - anything else → [`ApiError::Api`] with status code and message.
///
/// The message is the FastAPI `detail` field when the body carries one.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = error_message(&body);
    tracing::debug!(status = status.as_u16(), %message, "backend returned an error");
    Err(match status.as_u16() {
        401 => ApiError::Unauthorized(message),
        404 => ApiError::NotFound(message),
        code => ApiError::Api {
            status: code,
            message,
        },
    })
}

/// Decode a JSON body, reporting failures as [`ApiError::Parse`].
pub async fn json<T: serde::de::DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Pull the human-readable message out of an error body.
///
/// FastAPI sends `{"detail": "..."}` for handled errors and
/// `{"detail": [{"msg": "...", ...}]}` for validation failures.
pub(crate) fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.trim().to_string();
    };
    match value.get("detail") {
        Some(serde_json::Value::String(detail)) => detail.clone(),
        Some(serde_json::Value::Array(items)) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .collect();
            if messages.is_empty() {
                body.trim().to_string()
            } else {
                messages.join("; ")
            }
        }
        _ => body.trim().to_string(),
    }
}
