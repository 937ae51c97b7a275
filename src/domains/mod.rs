//! MCP capabilities, one module per protocol area.
//!
//! - `tools`: Payrix proxy, calculator, joke and time tools
//! - `resources`: schemas, operator reference and server info
//! - `prompts`: query guidance prompts

pub mod prompts;
pub mod resources;
pub mod tools;
