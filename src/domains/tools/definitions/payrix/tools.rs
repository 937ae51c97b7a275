//! The Payrix tools: one list tool and one lookup-by-id tool per
//! [`PayrixResource`] (`getMerchants`/`getMerchantsId`, `getTxns`/`getTxnsId`).

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Tool},
};
use std::sync::Arc;
use tracing::instrument;

use super::client::PayrixClient;
use super::resource::{PayrixByIdParams, PayrixListParams, PayrixResource, search_help};
use crate::domains::tools::definitions::common::{parse_params, text_result, tool_model};

#[cfg(feature = "http")]
use crate::domains::tools::{
    ToolError,
    definitions::common::{parse_value, result_to_json},
};

/// Filtered query of a collection.
pub struct PayrixListTool;

impl PayrixListTool {
    #[instrument(skip_all, fields(tool = resource.list_tool))]
    pub async fn execute(
        resource: PayrixResource,
        client: &PayrixClient,
        params: &PayrixListParams,
    ) -> CallToolResult {
        text_result(resource.list(client, params).await)
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(
        resource: PayrixResource,
        arguments: serde_json::Value,
        client: &PayrixClient,
    ) -> Result<serde_json::Value, ToolError> {
        result_to_json(match parse_value::<PayrixListParams>(arguments) {
            Ok(params) => Self::execute(resource, client, &params).await,
            Err(invalid) => invalid,
        })
    }

    pub fn to_tool(resource: PayrixResource) -> Tool {
        tool_model::<PayrixListParams>(
            resource.list_tool,
            format!("{}\n\n{}", resource.list_summary, search_help()),
        )
    }

    pub fn create_route<S>(resource: PayrixResource, client: Arc<PayrixClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(resource), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            let client = client.clone();
            async move {
                Ok(match parse_params::<PayrixListParams>(args) {
                    Ok(params) => Self::execute(resource, &client, &params).await,
                    Err(invalid) => invalid,
                })
            }
            .boxed()
        })
    }
}

/// Retrieve one record of a collection by id.
pub struct PayrixLookupTool;

impl PayrixLookupTool {
    #[instrument(skip_all, fields(tool = resource.lookup_tool, id = %params.id))]
    pub async fn execute(
        resource: PayrixResource,
        client: &PayrixClient,
        params: &PayrixByIdParams,
    ) -> CallToolResult {
        text_result(resource.fetch(client, params).await)
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(
        resource: PayrixResource,
        arguments: serde_json::Value,
        client: &PayrixClient,
    ) -> Result<serde_json::Value, ToolError> {
        result_to_json(match parse_value::<PayrixByIdParams>(arguments) {
            Ok(params) => Self::execute(resource, client, &params).await,
            Err(invalid) => invalid,
        })
    }

    pub fn to_tool(resource: PayrixResource) -> Tool {
        tool_model::<PayrixByIdParams>(
            resource.lookup_tool,
            format!("{}\n\n{}", resource.lookup_summary, search_help()),
        )
    }

    pub fn create_route<S>(resource: PayrixResource, client: Arc<PayrixClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(resource), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            let client = client.clone();
            async move {
                Ok(match parse_params::<PayrixByIdParams>(args) {
                    Ok(params) => Self::execute(resource, &client, &params).await,
                    Err(invalid) => invalid,
                })
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::PayrixConfig;
    use crate::domains::tools::definitions::common::result_text;
    use crate::domains::tools::definitions::payrix::resource::{MERCHANTS, TRANSACTIONS};
    use rmcp::model::JsonObject;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(url: &str) -> PayrixClient {
        PayrixClient::new(&PayrixConfig {
            api_url: url.to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    fn object(value: serde_json::Value) -> Option<JsonObject> {
        value.as_object().cloned()
    }

    #[test]
    fn test_tool_metadata() {
        let tool = PayrixListTool::to_tool(MERCHANTS);
        assert_eq!(tool.name, "getMerchants");
        let description = tool.description.unwrap();
        assert!(description.contains("equals"));
        assert!(tool.input_schema.contains_key("properties"));

        assert_eq!(PayrixLookupTool::to_tool(MERCHANTS).name, "getMerchantsId");
        assert_eq!(PayrixListTool::to_tool(TRANSACTIONS).name, "getTxns");
        assert_eq!(PayrixLookupTool::to_tool(TRANSACTIONS).name, "getTxnsId");
    }

    #[test]
    fn test_lookup_schema_requires_id() {
        let tool = PayrixLookupTool::to_tool(TRANSACTIONS);
        let required = tool
            .input_schema
            .get("required")
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap_or_default();
        assert!(required.contains(&json!("id")));
    }

    #[tokio::test]
    async fn test_lookup_by_id_sends_search_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/merchants/p1_mer_9"))
            .and(header("search", "status[equals]=1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":[{"id":"p1_mer_9"}]}"#))
            .expect(1)
            .mount(&server)
            .await;

        let params = PayrixByIdParams {
            id: "p1_mer_9".to_string(),
            search: Some("status[equals]=1".to_string()),
        };
        let result = PayrixLookupTool::execute(MERCHANTS, &client_for(&server.uri()), &params).await;
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result_text(&result), Some(r#"{"data":[{"id":"p1_mer_9"}]}"#));
    }

    #[tokio::test]
    async fn test_empty_transactions_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/txns"))
            .and(header("search", "merchant[equals]=p1_mer_1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data": []}"#))
            .mount(&server)
            .await;

        let params = PayrixListParams {
            search: Some("merchant[equals]=p1_mer_1".to_string()),
            ..Default::default()
        };
        let result = PayrixListTool::execute(TRANSACTIONS, &client_for(&server.uri()), &params).await;
        assert_eq!(
            result_text(&result),
            Some("No transactions found for the given criteria.")
        );
    }

    #[tokio::test]
    async fn test_api_error_is_ordinary_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .mount(&server)
            .await;

        let result = PayrixListTool::execute(
            MERCHANTS,
            &client_for(&server.uri()),
            &PayrixListParams::default(),
        )
        .await;
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result_text(&result), Some("API Error: 401 - unauthorized"));
    }

    #[tokio::test]
    async fn test_transport_failure_is_error_string() {
        // Nothing listens on port 9 of the loopback interface
        let client = PayrixClient::new(&PayrixConfig {
            api_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 2,
            ..Default::default()
        })
        .unwrap();
        let params = PayrixByIdParams {
            id: "t1".to_string(),
            search: None,
        };
        let result = PayrixLookupTool::execute(TRANSACTIONS, &client, &params).await;
        assert_eq!(result.is_error, Some(false));
        assert!(result_text(&result).unwrap().starts_with("Error: "));
    }

    #[tokio::test]
    async fn test_negative_page_reaches_the_api() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/merchants"))
            .and(query_param("page[number]", "-1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":[{"id":"m1"}]}"#))
            .expect(1)
            .mount(&server)
            .await;

        let params = parse_params::<PayrixListParams>(object(json!({ "page_number_": -1 }))).unwrap();
        let result = PayrixListTool::execute(MERCHANTS, &client_for(&server.uri()), &params).await;
        assert_eq!(result_text(&result), Some(r#"{"data":[{"id":"m1"}]}"#));
    }

    #[test]
    fn test_mistyped_arguments_are_error_results() {
        for arguments in [
            json!({ "page_number_": "2" }),
            json!({ "page_limit_": 1.5 }),
            json!({ "totals": 1 }),
        ] {
            let invalid = parse_params::<PayrixListParams>(object(arguments)).unwrap_err();
            assert_eq!(invalid.is_error, Some(true));
        }

        let invalid = parse_params::<PayrixByIdParams>(object(json!({}))).unwrap_err();
        assert!(result_text(&invalid).unwrap().contains("id"));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_http_handler_bad_arguments_skip_the_api() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let value = PayrixListTool::http_handler(
            MERCHANTS,
            json!({ "page_number_": "2" }),
            &client_for(&server.uri()),
        )
        .await
        .unwrap();
        assert_eq!(value["isError"], json!(true));
        assert!(
            value["content"][0]["text"]
                .as_str()
                .unwrap()
                .starts_with("Invalid arguments: ")
        );
    }
}
