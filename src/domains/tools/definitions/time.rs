//! Local wall-clock time tool.

use chrono::{DateTime, Local, TimeZone};
use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::common::{parse_params, text_result, tool_model};

#[cfg(feature = "http")]
use crate::domains::tools::{
    ToolError,
    definitions::common::{parse_value, result_to_json},
};

pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetTimeParams {}

pub fn format_time<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(TIME_FORMAT).to_string()
}

pub struct GetTimeTool;

impl GetTimeTool {
    pub const NAME: &'static str = "get_time";

    pub const DESCRIPTION: &'static str =
        "Get the current local time of the server, formatted as YYYY-MM-DD HH:MM:SS.";

    pub fn execute() -> CallToolResult {
        text_result(format_time(&Local::now()))
    }

    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        result_to_json(match parse_value::<GetTimeParams>(arguments) {
            Ok(_) => Self::execute(),
            Err(invalid) => invalid,
        })
    }

    pub fn to_tool() -> Tool {
        tool_model::<GetTimeParams>(Self::NAME, Self::DESCRIPTION.to_string())
    }

    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            async move {
                Ok(match parse_params::<GetTimeParams>(args) {
                    Ok(_) => Self::execute(),
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
    use crate::domains::tools::definitions::common::result_text;
    use chrono::Utc;

    #[test]
    fn test_format_time() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(format_time(&at), "2024-03-09 07:05:01");
    }

    #[test]
    fn test_execute_shape() {
        let result = GetTimeTool::execute();
        let text = result_text(&result).unwrap();
        assert_eq!(text.len(), 19);
        assert!(chrono::NaiveDateTime::parse_from_str(text, TIME_FORMAT).is_ok());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_rejects_non_object_arguments() {
        let value = GetTimeTool::http_handler(serde_json::json!("now")).unwrap();
        assert_eq!(value["isError"], serde_json::json!(true));
    }
}
