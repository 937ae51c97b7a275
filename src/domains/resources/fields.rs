//! Field table extraction for `schema://{schemaName}/fields`.
//!
//! Schemas are YAML documents with a `properties:` section. Only that
//! section is parsed: everything before it is ignored and parsing stops at
//! the next top-level `title:` or `type:` line.

use regex::Regex;
use serde_json::{Map, Value, json};
use std::sync::LazyLock;

static PROPERTIES_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(properties:.*)").expect("properties regex must compile")
});

static SECTION_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\ntitle:|\ntype:").expect("section end regex must compile")
});

/// Map every property of `schema` to `{"type", "description"}`.
///
/// A schema without `properties:` yields `{}`; a section that does not
/// parse yields `{"error": <message>}`.
pub fn extract_fields(schema: &str) -> Value {
    let schema = schema.replace("\\n", "\n");
    let schema = schema.trim();

    let Some(section) = PROPERTIES_SECTION.find(schema) else {
        return json!({});
    };
    let section = SECTION_END
        .split(section.as_str())
        .next()
        .unwrap_or_default();

    match parse_properties(section) {
        Ok(fields) => Value::Object(fields),
        Err(message) => json!({ "error": message }),
    }
}

fn parse_properties(section: &str) -> Result<Map<String, Value>, String> {
    let parsed: serde_yaml::Value = serde_yaml::from_str(section).map_err(|e| e.to_string())?;
    let properties = parsed.get("properties").unwrap_or(&parsed);
    let properties = properties
        .as_mapping()
        .ok_or_else(|| "properties is not a mapping".to_string())?;

    let mut fields = Map::new();
    for (name, meta) in properties {
        let name = yaml_key(name)?;
        let meta = meta
            .as_mapping()
            .ok_or_else(|| format!("property '{}' is not a mapping", name))?;

        let field_type = match meta.get("type") {
            Some(value) => serde_json::to_value(value).map_err(|e| e.to_string())?,
            None => json!("object"),
        };
        let description = match meta.get("description") {
            Some(value) => serde_json::to_value(value).map_err(|e| e.to_string())?,
            None => json!(""),
        };

        fields.insert(
            name,
            json!({ "type": field_type, "description": description }),
        );
    }
    Ok(fields)
}

fn yaml_key(key: &serde_yaml::Value) -> Result<String, String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s.clone()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        other => Err(format!("unsupported property name: {:?}", other)),
    }
}
