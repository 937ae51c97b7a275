//! Tool definitions module.
//!
//! One submodule per tool group. Each tool exposes `to_tool()`,
//! `create_route()` for rmcp and `http_handler()` for the HTTP transport.
//! Grouped tools (`ArithmeticTool`, the Payrix tools) take the member they
//! serve as the first argument.

pub mod calc;
pub mod common;
pub mod joke;
pub mod payrix;
pub mod time;

pub use calc::{ArithmeticTool, Operation};
pub use joke::{GetJokeTool, JokeSource};
pub use payrix::{PayrixClient, PayrixListTool, PayrixLookupTool, PayrixResource};
pub use time::GetTimeTool;
