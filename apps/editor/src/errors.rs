#![allow(dead_code)]

use thiserror::Error;

/// Application-level error type.
///
/// Nothing in this layer is fatal: every failure degrades to a typed error
/// the caller can surface as a user-visible message while transient UI
/// state is restored.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Required input missing or empty; no request is issued.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Transport-level failure talking to the backend.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-OK backend reply, with best-effort message extraction from the
    /// error body.
    #[error("Backend error (status {status}): {message}")]
    Backend { status: u16, message: String },

    /// The save endpoint answered 200 but rejected the upsert.
    #[error("Save rejected: {0}")]
    SaveRejected(String),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Cache error: {0}")]
    Cache(#[from] std::io::Error),

    /// A bound region named a parent key that is not one of the nine
    /// top-level Record keys.
    #[error("Unknown section key: '{0}'")]
    UnknownSection(String),
}
