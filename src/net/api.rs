//! Authentication HTTP client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Each call issues exactly one request and resolves or rejects exactly
//! once, mirroring the transport outcome: a success body comes back as
//! untyped JSON, anything else surfaces as `ApiError` with the server
//! payload untransformed. No retries, no timeouts, no status-code
//! branching, no caching.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;

use serde_json::Value;

use super::types::{LoginRequest, RegisterUser};

/// Fixed authentication service address. Known gap: a real deployment would
/// externalize this.
#[cfg(any(test, feature = "hydrate"))]
const BASE_URL: &str = "http://localhost:8080";

#[cfg(any(test, feature = "hydrate"))]
fn users_endpoint() -> String {
    format!("{BASE_URL}/users")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint() -> String {
    format!("{BASE_URL}/login")
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_endpoint() -> String {
    format!("{BASE_URL}/logout")
}

/// Failure surfaced by an authentication request.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    Transport(String),
    /// The server answered with a non-success status; `body` carries the
    /// response payload unmodified.
    Status { status: u16, body: Value },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(message) => write!(f, "request failed: {message}"),
            ApiError::Status { status, .. } => write!(f, "server responded with status {status}"),
        }
    }
}

#[cfg(any(test, not(feature = "hydrate")))]
fn server_stub_error() -> ApiError {
    ApiError::Transport("not available on server".to_owned())
}

/// Read a response body as JSON, falling back to a string payload for
/// non-JSON bodies and `Null` for empty ones.
#[cfg(feature = "hydrate")]
async fn response_body(resp: gloo_net::http::Response) -> Value {
    let Ok(text) = resp.text().await else {
        return Value::Null;
    };
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

#[cfg(feature = "hydrate")]
async fn post_json(url: &str, body: &impl serde::Serialize) -> Result<Value, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = resp.status();
    let ok = resp.ok();
    let body = response_body(resp).await;
    if ok { Ok(body) } else { Err(ApiError::Status { status, body }) }
}

/// Register a new account via `POST /users`, returning the server response
/// verbatim.
///
/// # Errors
///
/// Returns `ApiError` mirroring the transport or HTTP failure.
pub async fn register_user(details: &RegisterUser) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&users_endpoint(), details).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = details;
        Err(server_stub_error())
    }
}

/// Authenticate via `POST /login`, returning the server response verbatim.
///
/// # Errors
///
/// Returns `ApiError` mirroring the transport or HTTP failure.
pub async fn login(credentials: &LoginRequest) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&login_endpoint(), credentials).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(server_stub_error())
    }
}

/// Ask the server to invalidate the current session via `POST /logout`.
///
/// Exposed as a capability; the header's logout flow clears local state only
/// and does not call this by default.
///
/// # Errors
///
/// Returns `ApiError` mirroring the transport or HTTP failure.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&logout_endpoint())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if resp.ok() {
            return Ok(());
        }
        let status = resp.status();
        let body = response_body(resp).await;
        Err(ApiError::Status { status, body })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(server_stub_error())
    }
}
