//! Random joke tool.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, instrument, warn};

use super::common::{parse_params, structured_result, tool_model};

#[cfg(feature = "http")]
use crate::domains::tools::{
    ToolError,
    definitions::common::{parse_value, result_to_json},
};

/// Payload returned when the joke service cannot be reached or answers badly.
pub const JOKE_FAILURE_MESSAGE: &str = "Failed to fetch joke";

/// `get_joke` takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetJokeParams {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    pub setup: String,
    pub punchline: String,
}

/// Where jokes come from.
#[derive(Debug, Clone)]
pub struct JokeSource {
    http: reqwest::Client,
    url: String,
}

impl JokeSource {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    /// One GET, no retry. Any status other than 200 is a failure.
    pub async fn fetch(&self) -> Option<Joke> {
        let response = match self.http.get(&self.url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Joke request failed: {}", e);
                return None;
            }
        };

        if response.status() != reqwest::StatusCode::OK {
            warn!("Joke service returned {}", response.status());
            return None;
        }

        match response.json::<Joke>().await {
            Ok(joke) => Some(joke),
            Err(e) => {
                warn!("Joke service sent an unexpected body: {}", e);
                None
            }
        }
    }
}

pub struct GetJokeTool;

impl GetJokeTool {
    pub const NAME: &'static str = "get_joke";

    pub const DESCRIPTION: &'static str =
        "Fetch a random joke. Returns an object with 'setup' and 'punchline'.";

    #[instrument(skip_all, name = "get_joke")]
    pub async fn execute(source: &JokeSource) -> CallToolResult {
        match source.fetch().await {
            Some(joke) => {
                info!("Fetched joke");
                structured_result(&joke)
            }
            None => structured_result(&json!({ "error": JOKE_FAILURE_MESSAGE })),
        }
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        source: &JokeSource,
    ) -> Result<serde_json::Value, ToolError> {
        result_to_json(match parse_value::<GetJokeParams>(arguments) {
            Ok(_) => Self::execute(source).await,
            Err(invalid) => invalid,
        })
    }

    pub fn to_tool() -> Tool {
        tool_model::<GetJokeParams>(Self::NAME, Self::DESCRIPTION.to_string())
    }

    pub fn create_route<S>(source: JokeSource) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            let source = source.clone();
            async move {
                Ok(match parse_params::<GetJokeParams>(args) {
                    Ok(_) => Self::execute(&source).await,
                    Err(invalid) => invalid,
                })
            }
            .boxed()
        })
    }
}
