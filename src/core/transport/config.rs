//! Transport configuration types.

use serde::{Deserialize, Serialize};

use super::{TransportError, TransportResult};

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (default for MCP).
    #[cfg(feature = "stdio")]
    Stdio,

    /// HTTP transport with JSON-RPC over POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// HTTP transport configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Path for JSON-RPC endpoint.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(feature = "http")]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[cfg(feature = "http")]
fn default_rpc_path() -> String {
    "/mcp".to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            return Self::Stdio;
        }

        #[cfg(all(not(feature = "stdio"), feature = "http"))]
        {
            return Self::Http(HttpConfig::default());
        }

        #[cfg(not(any(feature = "stdio", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio or http");
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: default_host(),
            rpc_path: default_rpc_path(),
            enable_cors: default_cors(),
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    /// Build from `MCP_HTTP_*` variables, falling back to defaults.
    pub fn from_env() -> Self {
        let port = std::env::var("MCP_HTTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let host = std::env::var("MCP_HTTP_HOST").unwrap_or_else(|_| default_host());
        let rpc_path = std::env::var("MCP_HTTP_PATH").unwrap_or_else(|_| default_rpc_path());
        let enable_cors = std::env::var("MCP_HTTP_CORS")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true);
        Self {
            port,
            host,
            rpc_path,
            enable_cors,
        }
    }
}

impl TransportConfig {
    /// Resolve a transport by name (`stdio`, `http`, or `sse` as an alias
    /// for the network transport).
    ///
    /// Fails when the name is unknown or its feature is not compiled in.
    pub fn from_kind(kind: &str) -> TransportResult<Self> {
        match kind.to_lowercase().as_str() {
            #[cfg(feature = "stdio")]
            "stdio" | "io" => Ok(Self::Stdio),
            #[cfg(feature = "http")]
            "http" | "sse" => Ok(Self::Http(HttpConfig::from_env())),
            other => Err(TransportError::Unsupported(other.to_string())),
        }
    }

    /// Load transport config from `MCP_TRANSPORT`; unknown values fall back
    /// to the default transport.
    pub fn from_env() -> Self {
        match std::env::var("MCP_TRANSPORT") {
            Ok(kind) if !kind.is_empty() => Self::from_kind(&kind).unwrap_or_else(|e| {
                tracing::warn!("{}; using default transport", e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}:{}{}", cfg.host, cfg.port, cfg.rpc_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result = TransportConfig::from_kind("carrier-pigeon");
        assert!(matches!(result, Err(TransportError::Unsupported(_))));
    }

    #[cfg(feature = "stdio")]
    #[test]
    fn test_stdio_kind_aliases() {
        assert!(matches!(
            TransportConfig::from_kind("STDIO"),
            Ok(TransportConfig::Stdio)
        ));
        assert!(matches!(
            TransportConfig::from_kind("io"),
            Ok(TransportConfig::Stdio)
        ));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_sse_maps_to_http() {
        let config = TransportConfig::from_kind("sse").unwrap();
        assert!(config.description().starts_with("HTTP on"));
    }
}
