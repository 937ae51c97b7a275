//! Prompts domain module.
//!
//! Guidance prompts that help a client phrase Payrix queries before calling
//! the corresponding tools.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual prompt definitions
//! - `registry.rs` - Central prompt registration
//! - `service.rs` - Prompt service for listing and rendering
//! - `templates.rs` - Template rendering engine

pub mod definitions;
mod error;
mod registry;
mod service;
pub mod templates;

pub use definitions::PromptDefinition;
pub use error::PromptError;
pub use registry::{get_all_prompts, prompt_names};
pub use service::PromptService;
pub use templates::PromptTemplate;
