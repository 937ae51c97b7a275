//! Error types and handling for the MCP server.
//!
//! Startup failures flow through [`Error`]. Each domain keeps its own error
//! type for request-time failures, and an individual tool call never fails
//! at all: tools turn failures into ordinary result payloads.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport startup or serving failure.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure to build an outbound HTTP client.
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = Error::config("API_TOKEN is not a valid header value");
        assert_eq!(
            err.to_string(),
            "Configuration error: API_TOKEN is not a valid header value"
        );
    }

    #[test]
    fn test_transport_error_converts() {
        let err: Error = crate::core::transport::TransportError::http("closed").into();
        assert!(matches!(err, Error::Transport(_)));
    }
}
