//! Payrix MCP Server Library
//!
//! A Model Context Protocol server that exposes the Payrix payment API
//! (merchants and transactions) as MCP tools, together with a few
//! collaborator tools (calculator, random joke, local time), schema
//! resources and query guidance prompts.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the rmcp server handler and
//!   the stdio/HTTP transports
//! - **domains**: MCP capabilities
//!   - **tools**: Payrix proxy tools and the collaborator toolsets
//!   - **resources**: schemas, operator reference, server info
//!   - **prompts**: guidance prompts for the Payrix tools
//!
//! # Example
//!
//! ```rust,no_run
//! use payrix_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let transport = TransportService::new(config.transport.clone());
//!     let server = McpServer::new(config)?;
//!     transport.run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
