//! REST API helpers for communicating with the host.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so a failed
//! load or save degrades to a status line without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::{MessageRecord, Role};

#[cfg(any(test, feature = "hydrate"))]
const MESSAGES_ENDPOINT: &str = "/api/messages";

/// Error body returned by the host API.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[cfg(any(test, feature = "hydrate"))]
fn failure_message(action: &str, status: u16, body: Option<&str>) -> String {
    let detail = body
        .and_then(|raw| serde_json::from_str::<ApiErrorBody>(raw).ok())
        .map(|b| b.message);
    match detail {
        Some(detail) => format!("{action} failed: {status} ({detail})"),
        None => format!("{action} failed: {status}"),
    }
}

/// Fetch every stored message from `GET /api/messages`.
///
/// # Errors
///
/// Returns an error string if the request fails or the host responds with a
/// non-OK status.
pub async fn fetch_messages() -> Result<Vec<MessageRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(MESSAGES_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.ok();
            return Err(failure_message("fetch", resp.status(), body.as_deref()));
        }
        resp.json::<Vec<MessageRecord>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Append a message via `POST /api/messages` and return the stored row.
///
/// # Errors
///
/// Returns an error string if the request fails or the host responds with a
/// non-OK status.
pub async fn save_message(content: &str, role: Role) -> Result<MessageRecord, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "content": content, "role": role });
        let resp = gloo_net::http::Request::post(MESSAGES_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.ok();
            return Err(failure_message("save", resp.status(), body.as_deref()));
        }
        resp.json::<MessageRecord>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (content, role);
        Err("not available on server".to_owned())
    }
}
