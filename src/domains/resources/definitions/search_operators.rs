//! Reference table of the Payrix search operators.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;
use crate::domains::tools::definitions::payrix::filter::operators_markdown;

pub struct SearchOperatorsResource;

impl ResourceDefinition for SearchOperatorsResource {
    const URI: &'static str = "docs://search-operators";
    const NAME: &'static str = "Search Operators";
    const DESCRIPTION: &'static str =
        "Operators accepted in the 'search' argument of the Payrix tools";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(format!(
            "# Payrix search operators\n\n\
             Conditions take the form `field[operator]=value` and are joined with `&`, \
             e.g. `created[greater]=2024-01-01&status[equals]=1`.\n\n{}",
            operators_markdown()
        ))
    }
}
