//! Error types for gateway calls.
//!
//! These never leave the gateway: the `ContentGateway` surface logs them
//! and degrades to an empty result.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// No API key in config or environment.
    #[error("Gateway is not configured: missing API key")]
    NotConfigured,

    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the service.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Response body was not the JSON we asked for.
    #[error("Parse error: {0}")]
    Parse(String),

    /// No candidate text or audio in the response.
    #[error("Empty response from API")]
    EmptyResponse,

    /// Parsed, but the content breaks the declared shape.
    #[error("Invalid response shape: {0}")]
    InvalidShape(String),
}
