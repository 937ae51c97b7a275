//! Resource definitions module.
//!
//! Each resource provides its URI, metadata and a content provider through
//! [`ResourceDefinition`], and is registered in `registry.rs`.

mod schemas;
mod search_operators;
mod server_info;

pub use schemas::{MerchantsSchemaResource, SCHEMA_MIME_TYPE, SCHEMA_SCHEME, TxnsSchemaResource};
pub use search_operators::SearchOperatorsResource;
pub use server_info::ServerInfoResource;

use super::service::ResourceContent;

/// Trait for resource definitions.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Get the content for this resource.
    fn content() -> ResourceContent;
}
