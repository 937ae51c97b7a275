//! Resource service implementation.
//!
//! Holds the bundled resources plus any schemas loaded from the configured
//! schema directory, and answers list/read requests for both the fixed URIs
//! and the `schema://{schemaName}/fields` template.

use rmcp::model::{
    AnnotateAble, RawResource, ReadResourceResult, Resource, ResourceContents, ResourceTemplate,
};
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::definitions::{SCHEMA_MIME_TYPE, SCHEMA_SCHEME, ServerInfoResource};
use super::error::ResourceError;
use super::fields::extract_fields;
use super::registry::{get_all_resource_templates, get_all_resources};
use crate::core::config::Config;

const FIELDS_SUFFIX: &str = "/fields";

/// Service for managing and accessing resources.
pub struct ResourceService {
    config: Arc<Config>,

    /// Key: resource URI. Ordered so listings are stable.
    resources: BTreeMap<String, ResourceEntry>,

    templates: Vec<ResourceTemplate>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(String),

    /// Content computed on every read.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicResourceType {
    /// Snapshot of the running configuration.
    ServerInfo,
}

impl ResourceService {
    /// Create the service with the bundled resources, then load the schema
    /// directory if one is configured. A bad directory is logged, not fatal.
    pub fn new(config: Arc<Config>) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            config: config.clone(),
            resources: BTreeMap::new(),
            templates: get_all_resource_templates(),
        };

        for entry in get_all_resources() {
            service.register_resource(entry);
        }

        if let Some(dir) = &config.resources.schema_dir {
            match service.load_schema_dir(dir) {
                Ok(count) => info!("Loaded {} schema(s) from {}", count, dir.display()),
                Err(e) => warn!("Could not load schemas from {}: {}", dir.display(), e),
            }
        }

        service
    }

    /// Register a resource, replacing any previous entry with the same URI.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        debug!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// Register every `*.yaml` / `*.yml` file of `dir` as `schema://<file stem>`.
    pub fn load_schema_dir(&mut self, dir: &Path) -> Result<usize, ResourceError> {
        let mut count = 0;
        for dir_entry in std::fs::read_dir(dir)? {
            let path = dir_entry?.path();
            let is_yaml = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
            if !is_yaml || !path.is_file() {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let text = std::fs::read_to_string(&path)?;
            let uri = format!("{}{}", SCHEMA_SCHEME, stem);
            let mut raw = RawResource::new(uri, format!("{} schema", stem));
            raw.description = Some(format!("Schema loaded from {}", path.display()));
            raw.mime_type = Some(SCHEMA_MIME_TYPE.to_string());

            self.register_resource(ResourceEntry {
                resource: raw.no_annotation(),
                content: ResourceContent::Text(text),
            });
            count += 1;
        }
        Ok(count)
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI, falling back to the fields template.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let content = match self.resources.get(uri) {
            Some(entry) => {
                let mime_type = entry.resource.raw.mime_type.clone();
                let text = match &entry.content {
                    ResourceContent::Text(text) => text.clone(),
                    ResourceContent::Dynamic(dynamic_type) => self.resolve_dynamic(*dynamic_type)?,
                };
                text_contents(uri, text, mime_type)
            }
            None => {
                let fields = self.schema_fields(uri)?;
                let text = serde_json::to_string_pretty(&fields)
                    .map_err(|e| ResourceError::internal(e.to_string()))?;
                text_contents(uri, text, Some("application/json".to_string()))
            }
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }

    /// Field table for a `schema://{schemaName}/fields` URI.
    ///
    /// An unknown schema name is reported in-band as `{"error": ..}`; a URI
    /// that does not match the template is `NotFound`.
    pub fn schema_fields(&self, uri: &str) -> Result<Value, ResourceError> {
        let name = uri
            .strip_prefix(SCHEMA_SCHEME)
            .and_then(|rest| rest.strip_suffix(FIELDS_SUFFIX))
            .ok_or_else(|| ResourceError::not_found(uri))?;
        if name.is_empty() || name.contains('/') {
            return Err(ResourceError::invalid_uri(uri));
        }

        let schema_uri = format!("{}{}", SCHEMA_SCHEME, name);
        match self.resources.get(&schema_uri).map(|entry| &entry.content) {
            Some(ResourceContent::Text(schema)) => Ok(extract_fields(schema)),
            _ => Ok(json!({ "error": format!("Resource {} not found", schema_uri) })),
        }
    }

    fn resolve_dynamic(&self, dynamic_type: DynamicResourceType) -> Result<String, ResourceError> {
        match dynamic_type {
            DynamicResourceType::ServerInfo => {
                serde_json::to_string_pretty(&ServerInfoResource::snapshot(&self.config))
                    .map_err(|e| ResourceError::internal(e.to_string()))
            }
        }
    }
}

fn text_contents(uri: &str, text: String, mime_type: Option<String>) -> ResourceContents {
    ResourceContents::TextResourceContents {
        uri: uri.to_string(),
        mime_type,
        text,
        meta: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn service() -> ResourceService {
        ResourceService::new(Arc::new(Config::default()))
    }

    fn read_text(result: &ReadResourceResult) -> &str {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text,
            other => panic!("expected text contents, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let resources = service().list_resources().await;
        assert_eq!(resources.len(), 4);
        let templates = service().list_resource_templates().await;
        assert_eq!(templates.len(), 1);
    }

    #[tokio::test]
    async fn test_read_schema() {
        let result = service().read_resource("schema://merchants").await.unwrap();
        assert!(read_text(&result).contains("properties:"));
    }

    #[tokio::test]
    async fn test_read_server_info() {
        let result = service().read_resource("payrix://server/info").await.unwrap();
        let info: Value = serde_json::from_str(read_text(&result)).unwrap();
        assert_eq!(info["server"], "payrix-mcp-server");
    }

    #[tokio::test]
    async fn test_read_schema_fields() {
        let result = service().read_resource("schema://txns/fields").await.unwrap();
        let fields: Value = serde_json::from_str(read_text(&result)).unwrap();
        assert_eq!(fields["merchant"]["type"], "string");
    }

    #[tokio::test]
    async fn test_fields_of_unknown_schema() {
        let result = service().read_resource("schema://nope/fields").await.unwrap();
        let fields: Value = serde_json::from_str(read_text(&result)).unwrap();
        assert_eq!(fields, json!({"error": "Resource schema://nope not found"}));
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let result = service().read_resource("payrix://server/nonexistent").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_load_schema_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("customers.yaml")).unwrap();
        writeln!(file, "properties:\n  name:\n    type: string\n    description: Full name").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let mut config = Config::default();
        config.resources.schema_dir = Some(dir.path().to_path_buf());
        let service = ResourceService::new(Arc::new(config));

        assert_eq!(service.list_resources().await.len(), 5);
        let fields = service.schema_fields("schema://customers/fields").unwrap();
        assert_eq!(
            fields,
            json!({"name": {"type": "string", "description": "Full name"}})
        );
    }

    #[test]
    fn test_missing_schema_dir_is_error() {
        let mut service = service();
        let result = service.load_schema_dir(Path::new("/definitely/not/here"));
        assert!(matches!(result, Err(ResourceError::Io(_))));
    }
}
