//! Tool-specific error types.
//!
//! These are dispatch failures. Arguments that fail validation, and tools
//! that run and fail, are reported inside the tool result instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    /// The tool does not exist or its toolset is disabled.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// The result could not be serialized.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
