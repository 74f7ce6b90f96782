use account_console_api::{GatewayError, GatewayResult};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// Maps a request that never produced a response (connection refused,
/// DNS failure, broken body stream) to a transport failure.
pub fn transport_error(context: &str, error: reqwest::Error) -> GatewayError {
    GatewayError::TransportError(format!("{context}: {error}"))
}

/// Passes 2xx responses through; turns anything else into the error chosen
/// by `classify`, with the service's detail message when it sent one.
pub async fn ensure_success(
    context: &str,
    response: Response,
    classify: impl FnOnce(StatusCode, String) -> GatewayError,
) -> GatewayResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = match error_detail(&body) {
        Some(detail) => format!("{context}: {detail} ({status})"),
        None => format!("{context} ({status})"),
    };
    warn!(%status, "{message}");
    Err(classify(status, message))
}

/// Decodes a JSON body; an undecodable body is a transport failure.
pub async fn decode<T: DeserializeOwned>(context: &str, response: Response) -> GatewayResult<T> {
    response.json::<T>().await.map_err(|e| {
        GatewayError::TransportError(format!("{context}: unexpected response body: {e}"))
    })
}

/// Extracts the human-readable part of an error body.
///
/// Understands `{"detail": "..."}` and the validation form
/// `{"detail": [{"loc": [..., "field"], "msg": "..."}]}`.
pub fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(detail) if !detail.trim().is_empty() => Some(detail.clone()),
        Value::Array(items) => {
            let messages: Vec<String> = items
                .iter()
                .filter_map(|item| {
                    let msg = item.get("msg")?.as_str()?;
                    let field = item
                        .get("loc")
                        .and_then(Value::as_array)
                        .and_then(|loc| loc.last())
                        .and_then(Value::as_str);
                    Some(match field {
                        Some(field) => format!("{field}: {msg}"),
                        None => msg.to_string(),
                    })
                })
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
