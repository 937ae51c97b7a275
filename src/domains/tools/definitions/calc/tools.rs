//! Tool definitions for the four arithmetic operations.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use super::arithmetic::{ArithmeticError, add, divide, multiply, subtract};
use crate::domains::tools::definitions::common::{error_result, parse_value, tool_model};

#[cfg(feature = "http")]
use crate::domains::tools::{ToolError, definitions::common::result_to_json};

/// Integer operands for add/subtract/multiply.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct IntOperands {
    #[schemars(description = "First operand")]
    pub a: i64,
    #[schemars(description = "Second operand")]
    pub b: i64,
}

/// Floating-point operands for divide.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FloatOperands {
    #[schemars(description = "Dividend")]
    pub a: f64,
    #[schemars(description = "Divisor (must not be zero)")]
    pub b: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Tool name as registered in MCP.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    fn description(self) -> &'static str {
        match self {
            Operation::Add => "Add two numbers and return the result.",
            Operation::Subtract => "Subtract the second number from the first.",
            Operation::Multiply => "Multiply two numbers.",
            Operation::Divide => {
                "Divide the first number by the second. Fails on division by zero."
            }
        }
    }
}

/// The calculator tools, one per [`Operation`].
pub struct ArithmeticTool;

impl ArithmeticTool {
    /// Run `op` on raw call arguments. Malformed arguments and arithmetic
    /// failures (division by zero, overflow) are both `isError` results.
    pub fn execute(op: Operation, arguments: Value) -> CallToolResult {
        let outcome = match op {
            Operation::Divide => match parse_value::<FloatOperands>(arguments) {
                Ok(FloatOperands { a, b }) => divide(a, b).map(|r| json!(r)),
                Err(invalid) => return invalid,
            },
            Operation::Add | Operation::Subtract | Operation::Multiply => {
                let IntOperands { a, b } = match parse_value(arguments) {
                    Ok(operands) => operands,
                    Err(invalid) => return invalid,
                };
                let apply: fn(i64, i64) -> Result<i64, ArithmeticError> = match op {
                    Operation::Add => add,
                    Operation::Subtract => subtract,
                    _ => multiply,
                };
                apply(a, b).map(|r| json!(r))
            }
        };

        match outcome {
            Ok(result) => {
                info!("{} -> {}", op.name(), result);
                CallToolResult {
                    content: vec![Content::text(result.to_string())],
                    structured_content: Some(json!({ "result": result })),
                    is_error: Some(false),
                    meta: None,
                }
            }
            Err(e) => error_result(&e.to_string()),
        }
    }

    #[cfg(feature = "http")]
    pub fn http_handler(op: Operation, arguments: Value) -> Result<Value, ToolError> {
        result_to_json(Self::execute(op, arguments))
    }

    pub fn to_tool(op: Operation) -> Tool {
        let description = op.description().to_string();
        match op {
            Operation::Divide => tool_model::<FloatOperands>(op.name(), description),
            _ => tool_model::<IntOperands>(op.name(), description),
        }
    }

    pub fn create_route<S>(op: Operation) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(op), move |ctx: ToolCallContext<'_, S>| {
            let args = Value::Object(ctx.arguments.clone().unwrap_or_default());
            async move { Ok(Self::execute(op, args)) }.boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::result_text;

    #[test]
    fn test_divide_ten_by_two() {
        let result = ArithmeticTool::execute(Operation::Divide, json!({"a": 10, "b": 2}));
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.structured_content, Some(json!({"result": 5.0})));
    }

    #[test]
    fn test_divide_by_zero_is_error_result() {
        let result = ArithmeticTool::execute(Operation::Divide, json!({"a": 10, "b": 0}));
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result_text(&result), Some("Division by zero"));
    }

    #[test]
    fn test_divide_infinite_quotient_is_error_result() {
        let result = ArithmeticTool::execute(Operation::Divide, json!({"a": 1e308, "b": 1e-10}));
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result_text(&result), Some("Result is not a finite number"));
    }

    #[test]
    fn test_integer_tools() {
        let result = ArithmeticTool::execute(Operation::Subtract, json!({"a": 7, "b": 10}));
        assert_eq!(result_text(&result), Some("-3"));

        let result = ArithmeticTool::execute(Operation::Multiply, json!({"a": 6, "b": 7}));
        assert_eq!(result_text(&result), Some("42"));
    }

    #[test]
    fn test_integer_tool_rejects_fractions_as_error_result() {
        let result = ArithmeticTool::execute(Operation::Add, json!({"a": 1.5, "b": 2}));
        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).unwrap().starts_with("Invalid arguments: "));
    }

    #[test]
    fn test_missing_operand_is_error_result() {
        let result = ArithmeticTool::execute(Operation::Add, json!({"a": 1}));
        assert_eq!(result.is_error, Some(true));
        assert!(result.structured_content.is_none());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_non_object_arguments() {
        let value = ArithmeticTool::http_handler(Operation::Multiply, json!([1, 2])).unwrap();
        assert_eq!(value["isError"], json!(true));
    }

    #[test]
    fn test_names_round_trip() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_name(op.name()), Some(op));
            assert_eq!(ArithmeticTool::to_tool(op).name, op.name());
        }
        assert_eq!(Operation::from_name("modulo"), None);
    }
}
