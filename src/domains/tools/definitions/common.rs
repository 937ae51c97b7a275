//! Helpers shared by every tool definition.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::warn;

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Build the Tool model (metadata) for a tool taking `P` as parameters.
pub fn tool_model<P: JsonSchema + 'static>(name: &'static str, description: String) -> Tool {
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema: cached_schema_for_type::<P>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Deserialize rmcp call arguments into a params struct.
///
/// Arguments that do not fit `P` come back as an `isError` result for the
/// route to return in place of the tool output.
pub fn parse_params<P: DeserializeOwned>(arguments: Option<JsonObject>) -> Result<P, CallToolResult> {
    parse_value(Value::Object(arguments.unwrap_or_default()))
}

/// Like [`parse_params`] for a raw JSON value. `null` counts as no arguments.
pub fn parse_value<P: DeserializeOwned>(arguments: Value) -> Result<P, CallToolResult> {
    let arguments = if arguments.is_null() {
        Value::Object(Default::default())
    } else {
        arguments
    };
    serde_json::from_value(arguments).map_err(|e| invalid_arguments(&e))
}

/// `isError` result for arguments that failed validation.
pub fn invalid_arguments(reason: &impl std::fmt::Display) -> CallToolResult {
    error_result(&format!("Invalid arguments: {}", reason))
}

/// Plain text success.
pub fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Tool-level failure, reported to the client with `isError: true`.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Success carrying both a JSON text rendering and `structuredContent`.
pub fn structured_result<T: Serialize>(data: &T) -> CallToolResult {
    match serde_json::to_value(data) {
        Ok(structured) => CallToolResult {
            content: vec![Content::text(structured.to_string())],
            structured_content: Some(structured),
            is_error: Some(false),
            meta: None,
        },
        Err(e) => error_result(&format!("Failed to serialize result: {}", e)),
    }
}

/// Serialize a result for the HTTP transport, keeping `structuredContent`.
#[cfg(feature = "http")]
pub fn result_to_json(result: CallToolResult) -> Result<serde_json::Value, ToolError> {
    serde_json::to_value(&result).map_err(|e| ToolError::internal(e.to_string()))
}

/// First text block of a result (tests and logging).
pub fn result_text(result: &CallToolResult) -> Option<&str> {
    result.content.iter().find_map(|c| match &c.raw {
        rmcp::model::RawContent::Text(text) => Some(text.text.as_str()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, JsonSchema)]
    struct Sample {
        value: i64,
    }

    #[test]
    fn test_parse_params_missing_field_is_error_result() {
        let invalid = parse_params::<Sample>(None).unwrap_err();
        assert_eq!(invalid.is_error, Some(true));
        assert!(result_text(&invalid).unwrap().starts_with("Invalid arguments: "));
    }

    #[test]
    fn test_parse_value_null_is_empty_object() {
        #[derive(Debug, Deserialize)]
        struct Empty {}
        assert!(parse_value::<Empty>(Value::Null).is_ok());
    }

    #[test]
    fn test_parse_value_wrong_type_is_error_result() {
        let invalid = parse_value::<Sample>(serde_json::json!({ "value": "3" })).unwrap_err();
        assert_eq!(invalid.is_error, Some(true));
    }

    #[test]
    fn test_parse_params_ok() {
        let mut args = JsonObject::new();
        args.insert("value".into(), serde_json::json!(3));
        let sample: Sample = parse_params(Some(args)).unwrap();
        assert_eq!(sample.value, 3);
    }

    #[test]
    fn test_structured_result_has_text_and_structure() {
        let result = structured_result(&serde_json::json!({ "result": 5 }));
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result_text(&result), Some(r#"{"result":5}"#));
        assert!(result.structured_content.is_some());
    }

    #[test]
    fn test_error_result_flags_error() {
        let result = error_result("boom");
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result_text(&result), Some("boom"));
    }
}
