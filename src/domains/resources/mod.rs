//! Resources domain module.
//!
//! Resources are read-only documents exposed to MCP clients: the Payrix
//! response schemas, the search operator reference and a server info
//! snapshot. The `schema://{schemaName}/fields` template turns any schema
//! into a field table.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions
//! - `registry.rs` - Central resource registration
//! - `service.rs` - Listing, reading and the schema directory loader
//! - `fields.rs` - Field table extraction from YAML schemas

pub mod definitions;
mod error;
pub mod fields;
mod registry;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use registry::{SCHEMA_FIELDS_TEMPLATE, get_all_resources, resource_uris};
pub use service::{DynamicResourceType, ResourceContent, ResourceEntry, ResourceService};
