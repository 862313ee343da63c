// ── API error taxonomy ──

use thiserror::Error;

/// Errors surfaced by the orchestrator HTTP client.
#[derive(Debug, Error)]
pub enum Error {
    /// Connection-level failure (DNS, TLS, refused, timed out).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// 401 / 403 from the orchestrator.
    #[error("authentication failed: {message}")]
    Authentication { message: String },

    /// 404 — the addressed resource does not exist.
    #[error("not found: {path}")]
    NotFound { path: String },

    /// Any other non-2xx response, with the decoded orchestrator message.
    #[error("orchestrator error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// A URL could not be constructed from the configured base.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}
