//! HTTP transport implementation.
//!
//! JSON-RPC 2.0 over `POST <rpc_path>`, plus `GET /health` and `GET /`.
//! Plain request/response: no streaming, no server-initiated messages and
//! no per-client session, so every method is answered as soon as it
//! arrives, whether or not `initialize` was sent first.

use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::core::server::INSTRUCTIONS;
use crate::domains::resources::ResourceError;
use crate::domains::tools::ToolError;

const JSONRPC_VERSION: &str = "2.0";

/// Protocol revision answered on `initialize`.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// Exactly one of `result` and `error` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error object, and the failure type of every method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;

    fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(Self::INVALID_PARAMS, message)
    }
}

/// An unknown or disabled tool is the caller's mistake. Bad arguments never
/// get here: they come back as an `isError` tool result.
impl From<ToolError> for JsonRpcError {
    fn from(e: ToolError) -> Self {
        match e {
            ToolError::NotFound(_) => Self::invalid_params(e.to_string()),
            ToolError::Internal(_) => Self::new(Self::INTERNAL_ERROR, e.to_string()),
        }
    }
}

impl From<ResourceError> for JsonRpcError {
    fn from(e: ResourceError) -> Self {
        match e {
            ResourceError::NotFound(_) | ResourceError::InvalidUri(_) => {
                Self::invalid_params(e.to_string())
            }
            _ => Self::new(Self::INTERNAL_ERROR, e.to_string()),
        }
    }
}

impl JsonRpcResponse {
    fn reply(id: Option<Value>, outcome: Result<Value, JsonRpcError>) -> Self {
        let (result, error) = match outcome {
            Ok(result) => (Some(result), None),
            Err(error) => (None, Some(error)),
        };
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result,
            error,
        }
    }
}

/// The `params` member of a request.
#[derive(Clone, Copy)]
struct Params<'a>(Option<&'a Value>);

impl<'a> Params<'a> {
    fn get(self, key: &str) -> Option<&'a Value> {
        self.0.and_then(|params| params.get(key))
    }

    fn required_str(self, key: &str) -> Result<&'a str, JsonRpcError> {
        self.get(key)
            .and_then(Value::as_str)
            .ok_or_else(|| JsonRpcError::invalid_params(format!("Missing '{}' parameter", key)))
    }
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    server: McpServer,
    rpc_path: Arc<str>,
}

impl HttpTransport {
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();

        let state = AppState {
            server,
            rpc_path: Arc::from(self.config.rpc_path.as_str()),
        };

        let mut app = Router::new()
            .route(&self.config.rpc_path, post(handle_rpc))
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        if self.config.enable_cors {
            app = app.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );
        }

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            "Ready - JSON-RPC on POST http://{}{} (CORS {})",
            addr,
            self.config.rpc_path,
            if self.config.enable_cors { "on" } else { "off" }
        );

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))
    }
}

/// Describes the endpoints and the enabled toolsets.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "protocol": "JSON-RPC 2.0",
        "endpoints": {
            "rpc": &*state.rpc_path,
            "health": "/health"
        },
        "toolsets": state.server.config().toolsets.iter().map(|t| t.as_str()).collect::<Vec<_>>()
    }))
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[instrument(skip_all, fields(method = %request.method))]
async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> Json<JsonRpcResponse> {
    Json(process_request(&state.server, request).await)
}

async fn process_request(server: &McpServer, request: JsonRpcRequest) -> JsonRpcResponse {
    if request.jsonrpc != JSONRPC_VERSION {
        let error = JsonRpcError::new(JsonRpcError::INVALID_REQUEST, "Invalid Request");
        return JsonRpcResponse::reply(request.id, Err(error));
    }

    if request.method.starts_with("notifications/") {
        debug!("Notification: {}", request.method);
        return JsonRpcResponse::reply(request.id, Ok(Value::Null));
    }

    let outcome = dispatch(server, &request.method, Params(request.params.as_ref())).await;
    if let Err(e) = &outcome {
        warn!("{} failed ({}): {}", request.method, e.code, e.message);
    }
    JsonRpcResponse::reply(request.id, outcome)
}

async fn dispatch(
    server: &McpServer,
    method: &str,
    params: Params<'_>,
) -> Result<Value, JsonRpcError> {
    match method {
        "initialize" => Ok(initialize(server, params)),
        "ping" => Ok(json!({})),
        "tools/list" => Ok(json!({ "tools": server.list_tools() })),
        "tools/call" => {
            let name = params.required_str("name")?;
            let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));
            info!("Calling tool {}", name);
            Ok(server.call_tool(name, arguments).await?)
        }
        "resources/list" => Ok(json!({ "resources": server.list_resources().await })),
        "resources/templates/list" => Ok(json!({
            "resourceTemplates": server.list_resource_templates().await
        })),
        "resources/read" => Ok(server.read_resource(params.required_str("uri")?).await?),
        "prompts/list" => Ok(json!({ "prompts": server.list_prompts().await })),
        "prompts/get" => {
            let name = params.required_str("name")?;
            server
                .get_prompt(name, params.get("arguments").cloned())
                .await
                .map_err(JsonRpcError::invalid_params)
        }
        other => Err(JsonRpcError::new(
            JsonRpcError::METHOD_NOT_FOUND,
            format!("Method not found: {}", other),
        )),
    }
}

fn initialize(server: &McpServer, params: Params<'_>) -> Value {
    let client = params
        .get("clientInfo")
        .and_then(|info| info.get("name"))
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    info!("Initialize from client {}", client);

    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {},
            "resources": {},
            "prompts": {}
        },
        "serverInfo": {
            "name": server.name(),
            "version": server.version()
        },
        "instructions": INSTRUCTIONS
    })
}
