//! Tool Registry - tool listing and HTTP dispatch.
//!
//! Mirrors [`build_tool_router`](super::build_tool_router): both honor the
//! same toolset selection, so the two transports expose identical tools.

use rmcp::model::Tool;
#[cfg(feature = "http")]
use tracing::warn;

use crate::core::config::Toolset;

use super::context::ToolContext;
use super::definitions::{
    ArithmeticTool, GetJokeTool, GetTimeTool, Operation, PayrixListTool, PayrixLookupTool,
    PayrixResource,
};
#[cfg(feature = "http")]
use super::ToolError;

/// Registry of the tools enabled for this process.
pub struct ToolRegistry {
    context: ToolContext,
}

impl ToolRegistry {
    pub fn new(context: ToolContext) -> Self {
        Self { context }
    }

    /// Names of the enabled tools, grouped by toolset.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.toolsets()
            .flat_map(|toolset| match toolset {
                Toolset::Payrix => PayrixResource::ALL
                    .iter()
                    .flat_map(|r| [r.list_tool, r.lookup_tool])
                    .collect(),
                Toolset::Calculator => Operation::ALL.iter().map(|op| op.name()).collect(),
                Toolset::Joke => vec![GetJokeTool::NAME],
                Toolset::Time => vec![GetTimeTool::NAME],
            })
            .collect()
    }

    /// Tool models of the enabled tools.
    pub fn tools(&self) -> Vec<Tool> {
        self.toolsets()
            .flat_map(|toolset| match toolset {
                Toolset::Payrix => PayrixResource::ALL
                    .into_iter()
                    .flat_map(|r| [PayrixListTool::to_tool(r), PayrixLookupTool::to_tool(r)])
                    .collect(),
                Toolset::Calculator => Operation::ALL.into_iter().map(ArithmeticTool::to_tool).collect(),
                Toolset::Joke => vec![GetJokeTool::to_tool()],
                Toolset::Time => vec![GetTimeTool::to_tool()],
            })
            .collect()
    }

    fn toolsets(&self) -> impl Iterator<Item = Toolset> + '_ {
        Toolset::ALL
            .into_iter()
            .filter(|toolset| self.context.config.has_toolset(*toolset))
    }

    /// Dispatch an HTTP tool call to the matching handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        if !self.tool_names().iter().any(|enabled| *enabled == name) {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        }

        let payrix = &self.context.payrix;
        if let Some(resource) = PayrixResource::by_list_tool(name) {
            return PayrixListTool::http_handler(resource, arguments, payrix).await;
        }
        if let Some(resource) = PayrixResource::by_lookup_tool(name) {
            return PayrixLookupTool::http_handler(resource, arguments, payrix).await;
        }
        if let Some(op) = Operation::from_name(name) {
            return ArithmeticTool::http_handler(op, arguments);
        }
        match name {
            GetJokeTool::NAME => GetJokeTool::http_handler(arguments, &self.context.jokes).await,
            GetTimeTool::NAME => GetTimeTool::http_handler(arguments),
            other => Err(ToolError::not_found(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use std::sync::Arc;

    fn registry_with(toolsets: Vec<Toolset>) -> ToolRegistry {
        let config = Config {
            toolsets,
            ..Config::default()
        };
        ToolRegistry::new(ToolContext::new(Arc::new(config)).unwrap())
    }

    #[test]
    fn test_registry_tool_names() {
        let names = registry_with(Toolset::ALL.to_vec()).tool_names();
        assert_eq!(
            names,
            vec![
                "getMerchants",
                "getMerchantsId",
                "getTxns",
                "getTxnsId",
                "add",
                "subtract",
                "multiply",
                "divide",
                "get_joke",
                "get_time",
            ]
        );
    }

    #[test]
    fn test_tools_match_names() {
        let registry = registry_with(vec![Toolset::Calculator, Toolset::Time]);
        let tools = registry.tools();
        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(names, registry.tool_names());
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_divide() {
        let registry = registry_with(vec![Toolset::Calculator]);
        let result = registry
            .call_tool("divide", serde_json::json!({ "a": 10, "b": 4 }))
            .await
            .unwrap();
        assert_eq!(result["structuredContent"]["result"], serde_json::json!(2.5));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_bad_arguments_are_error_results() {
        let registry = registry_with(Toolset::ALL.to_vec());
        let result = registry
            .call_tool("add", serde_json::json!({ "a": 1.5, "b": 2 }))
            .await
            .unwrap();
        assert_eq!(result["isError"], serde_json::json!(true));

        let result = registry
            .call_tool("getTxnsId", serde_json::json!({}))
            .await
            .unwrap();
        assert_eq!(result["isError"], serde_json::json!(true));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_disabled_tool() {
        let registry = registry_with(vec![Toolset::Time]);
        let result = registry.call_tool("add", serde_json::json!({ "a": 1, "b": 2 })).await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown() {
        let registry = registry_with(Toolset::ALL.to_vec());
        let result = registry.call_tool("unknown", serde_json::json!({})).await;
        assert!(result.is_err());
    }
}
