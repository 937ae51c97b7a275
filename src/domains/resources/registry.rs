//! Resource Registry - central registration of all resources.

use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate, ResourceTemplate};

use super::definitions::{
    MerchantsSchemaResource, ResourceDefinition, SearchOperatorsResource, ServerInfoResource,
    TxnsSchemaResource,
};
use super::service::ResourceEntry;

/// URI template of the per-schema field table.
pub const SCHEMA_FIELDS_TEMPLATE: &str = "schema://{schemaName}/fields";

fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        content: R::content(),
    }
}

/// Get all bundled resources as ResourceEntries.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<MerchantsSchemaResource>(),
        build_resource::<TxnsSchemaResource>(),
        build_resource::<SearchOperatorsResource>(),
        build_resource::<ServerInfoResource>(),
    ]
}

/// Get all registered resource templates.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![
        RawResourceTemplate {
            uri_template: SCHEMA_FIELDS_TEMPLATE.to_string(),
            name: "Schema Fields".to_string(),
            title: Some("Fields and types of a schema".to_string()),
            description: Some(
                "Field names of schema://{schemaName} mapped to their type and description"
                    .to_string(),
            ),
            mime_type: Some("application/json".to_string()),
        }
        .no_annotation(),
    ]
}

/// Get the list of bundled resource URIs.
pub fn resource_uris() -> Vec<&'static str> {
    vec![
        MerchantsSchemaResource::URI,
        TxnsSchemaResource::URI,
        SearchOperatorsResource::URI,
        ServerInfoResource::URI,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_resources() {
        let resources = get_all_resources();
        let uris: Vec<_> = resources
            .iter()
            .map(|r| r.resource.raw.uri.as_str())
            .collect();
        assert_eq!(uris, resource_uris());
        assert!(uris.contains(&"schema://merchants"));
        assert!(uris.contains(&"docs://search-operators"));
    }

    #[test]
    fn test_get_all_resource_templates() {
        let templates = get_all_resource_templates();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].raw.uri_template, "schema://{schemaName}/fields");
    }
}
