//! Transport layer for the MCP server.
//!
//! - **STDIO** (feature `stdio`, default): rmcp over stdin/stdout, the mode
//!   desktop MCP clients spawn.
//! - **HTTP** (feature `http`): JSON-RPC 2.0 over `POST`, for clients that
//!   reach the server over the network.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
