//! Server info resource definition.

use serde_json::{Value, json};

use super::ResourceDefinition;
use crate::core::config::Config;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};

/// Server information resource (dynamic).
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "payrix://server/info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str =
        "Server name and version, enabled toolsets and whether the Payrix API is configured";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::ServerInfo)
    }
}

impl ServerInfoResource {
    /// Snapshot of the running configuration. Never includes the API token.
    pub fn snapshot(config: &Config) -> Value {
        json!({
            "server": config.server.name,
            "version": config.server.version,
            "toolsets": config.toolsets.iter().map(|t| t.as_str()).collect::<Vec<_>>(),
            "api_url_configured": !config.payrix.api_url.is_empty(),
            "transport": config.transport.description(),
        })
    }
}
