//! Response schemas of the Payrix collections.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

/// URI scheme shared by every schema resource.
pub const SCHEMA_SCHEME: &str = "schema://";

/// MIME type of schema resources, bundled or loaded from disk.
pub const SCHEMA_MIME_TYPE: &str = "application/yaml";

pub struct MerchantsSchemaResource;

impl ResourceDefinition for MerchantsSchemaResource {
    const URI: &'static str = "schema://merchants";
    const NAME: &'static str = "Merchants Schema";
    const DESCRIPTION: &'static str =
        "Properties of a merchant record as returned by getMerchants and getMerchantsId";
    const MIME_TYPE: &'static str = SCHEMA_MIME_TYPE;

    fn content() -> ResourceContent {
        ResourceContent::Text(include_str!("../schemas/merchants.yaml").to_string())
    }
}

pub struct TxnsSchemaResource;

impl ResourceDefinition for TxnsSchemaResource {
    const URI: &'static str = "schema://txns";
    const NAME: &'static str = "Transactions Schema";
    const DESCRIPTION: &'static str =
        "Properties of a transaction record as returned by getTxns and getTxnsId";
    const MIME_TYPE: &'static str = SCHEMA_MIME_TYPE;

    fn content() -> ResourceContent {
        ResourceContent::Text(include_str!("../schemas/txns.yaml").to_string())
    }
}
