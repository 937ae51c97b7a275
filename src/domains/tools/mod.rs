//! Tools domain module.
//!
//! Tools are the callable operations exposed to MCP clients, grouped into
//! toolsets (`payrix`, `calculator`, `joke`, `time`) that can be enabled
//! independently.
//!
//! ## Architecture
//!
//! - `definitions/` - tool implementations, one module per group
//! - `context.rs` - outbound clients shared by the routes
//! - `router.rs` - rmcp ToolRouter for the stdio transport
//! - `registry.rs` - tool listing and HTTP dispatch
//! - `error.rs` - tool-specific error types

mod context;
pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use context::ToolContext;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
