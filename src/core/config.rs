//! Configuration management for the MCP server.
//!
//! Configuration is read once at startup (from `.env`, the process
//! environment and command-line overrides) and then shared read-only as an
//! `Arc<Config>` with every component that issues outbound calls.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

/// Default endpoint of the random joke service.
pub const DEFAULT_JOKE_API_URL: &str = "https://official-joke-api.appspot.com/random_joke";

/// Default timeout applied to every outbound HTTP call.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Payrix API endpoint and credentials.
    pub payrix: PayrixConfig,

    /// Other outbound services used by collaborator tools.
    pub services: ServicesConfig,

    /// Tool groups exposed by this process.
    pub toolsets: Vec<Toolset>,

    /// Resources domain configuration.
    pub resources: ResourcesConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Connection settings for the Payrix REST API.
///
/// Missing values default to empty strings; a misconfigured endpoint only
/// shows up later as an `Error: ...` tool result.
#[derive(Clone, Serialize, Deserialize)]
pub struct PayrixConfig {
    /// Base URL every resource path is appended to.
    pub api_url: String,

    /// Value sent in the `APIKey` header.
    pub api_token: String,

    /// Timeout for a single outbound request, in seconds.
    pub timeout_secs: u64,
}

impl fmt::Debug for PayrixConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.api_token.is_empty() {
            "[EMPTY]"
        } else {
            "[REDACTED]"
        };
        f.debug_struct("PayrixConfig")
            .field("api_url", &self.api_url)
            .field("api_token", &token)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for PayrixConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            api_token: String::new(),
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

/// Endpoints of the non-Payrix collaborator services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    /// URL returning a random joke as `{"setup": .., "punchline": ..}`.
    pub joke_api_url: String,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            joke_api_url: DEFAULT_JOKE_API_URL.to_string(),
        }
    }
}

/// Configuration for the resources domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourcesConfig {
    /// Directory of additional `*.yaml` schemas, each exposed as
    /// `schema://<file stem>`.
    pub schema_dir: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// A group of tools that can be switched on or off as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Toolset {
    /// Payrix API proxy tools (merchants, transactions).
    Payrix,
    /// Integer/float arithmetic.
    Calculator,
    /// Random joke fetcher.
    Joke,
    /// Local wall-clock time.
    Time,
}

impl Toolset {
    pub const ALL: [Toolset; 4] = [
        Toolset::Payrix,
        Toolset::Calculator,
        Toolset::Joke,
        Toolset::Time,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Toolset::Payrix => "payrix",
            Toolset::Calculator => "calculator",
            Toolset::Joke => "joke",
            Toolset::Time => "time",
        }
    }

    /// Parse a comma-separated list, skipping (and warning about) unknown names.
    pub fn parse_list(list: &str) -> Vec<Toolset> {
        let mut toolsets = Vec::new();
        for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            match name.parse::<Toolset>() {
                Ok(toolset) if !toolsets.contains(&toolset) => toolsets.push(toolset),
                Ok(_) => {}
                Err(e) => warn!("{}", e),
            }
        }
        toolsets
    }
}

impl FromStr for Toolset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "payrix" => Ok(Toolset::Payrix),
            "calculator" | "calc" => Ok(Toolset::Calculator),
            "joke" => Ok(Toolset::Joke),
            "time" => Ok(Toolset::Time),
            other => Err(format!("Unknown toolset '{}' ignored", other)),
        }
    }
}

impl fmt::Display for Toolset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "payrix-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            payrix: PayrixConfig::default(),
            services: ServicesConfig::default(),
            toolsets: Toolset::ALL.to_vec(),
            resources: ResourcesConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from `.env` and the process environment.
    ///
    /// The Payrix endpoint keeps the unprefixed `API_URL` / `API_TOKEN`
    /// names; everything else is prefixed with `MCP_`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.payrix.api_url = std::env::var("API_URL").unwrap_or_default();
        config.payrix.api_token = std::env::var("API_TOKEN").unwrap_or_default();
        if !config.payrix.api_url.is_empty() {
            info!("Payrix API endpoint: {}", config.payrix.api_url);
        }

        if let Some(timeout) = std::env::var("MCP_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.payrix.timeout_secs = timeout;
        }

        if let Ok(url) = std::env::var("MCP_JOKE_API_URL") {
            config.services.joke_api_url = url;
        }

        if let Ok(list) = std::env::var("MCP_TOOLSETS") {
            config.toolsets = Toolset::parse_list(&list);
        }

        if let Ok(dir) = std::env::var("MCP_SCHEMA_DIR") {
            config.resources.schema_dir = Some(PathBuf::from(dir));
        }

        config.transport = TransportConfig::from_env();

        config
    }

    /// Whether the given toolset is enabled.
    pub fn has_toolset(&self, toolset: Toolset) -> bool {
        self.toolsets.contains(&toolset)
    }
}
