//! Merchant guidance prompts.

use super::{PromptDefinition, criteria_argument, id_argument};
use rmcp::model::PromptArgument;

pub struct GetMerchantsPrompt;

impl PromptDefinition for GetMerchantsPrompt {
    const NAME: &'static str = "get_merchants";
    const DESCRIPTION: &'static str = "Guide the listing of merchants with the getMerchants tool";

    fn template() -> &'static str {
        "Please provide the criteria to list merchants from the Payrix API. \
You can specify conditions such as 'top 4', 'created after 2024-01-01', 'name like Acme', etc. \
For multiple conditions, use '&' as the separator, e.g., 'status[equals]=active&created[greater]=2024-01-01'.\
{{#if criteria}}\n\nList merchants matching: {{criteria}}{{/if}}"
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![criteria_argument("'created after 2024-01-01' or 'dba[like]=Acme%25'")]
    }
}

pub struct GetMerchantByIdPrompt;

impl PromptDefinition for GetMerchantByIdPrompt {
    const NAME: &'static str = "get_merchants_id";
    const DESCRIPTION: &'static str =
        "Guide the lookup of a single merchant with the getMerchantsId tool";

    fn template() -> &'static str {
        "{{#if id}}Retrieve the details of merchant {{id}} with the getMerchantsId tool.\
{{else}}Please provide the merchant ID to retrieve details for a specific merchant.{{/if}}"
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![id_argument("merchant")]
    }
}
